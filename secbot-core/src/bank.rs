//! Response variant banks with non-repeating random selection.
//!
//! A bank is a named pool of alternative response templates. Selection is
//! uniform over the pool minus the previously chosen template, so a bank of
//! two or more templates never answers the same way twice in a row. The
//! last-chosen index is kept in the owning handler's memory, which means
//! selection history survives across turns within a session.

use crate::memory::MemoryStore;
use rand::Rng;
use thiserror::Error;

/// Error type for bank construction.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("response bank '{0}' has no templates")]
    Empty(String),
}

/// Substitute the user's name into a template's `{name}` placeholder.
pub fn personalize(template: &str, user_name: &str) -> String {
    template.replace("{name}", user_name)
}

/// A named, ordered pool of response templates.
#[derive(Debug, Clone)]
pub struct ResponseBank {
    name: String,
    templates: Vec<String>,
}

impl ResponseBank {
    /// Create a bank. Every bank must hold at least one template.
    pub fn new(
        name: impl Into<String>,
        templates: Vec<String>,
    ) -> Result<Self, BankError> {
        let name = name.into();
        if templates.is_empty() {
            return Err(BankError::Empty(name));
        }
        Ok(Self { name, templates })
    }

    /// The bank's name, used to derive its selection-state memory key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of templates in the pool.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false; construction rejects empty pools.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn memory_key(&self) -> String {
        format!("last_response_{}", self.name)
    }

    /// Select a template, avoiding the previously returned one when possible.
    pub fn select(&self, memory: &mut MemoryStore) -> &str {
        self.select_with_rng(memory, &mut rand::thread_rng())
    }

    /// Like [`select`](Self::select) but with an explicit RNG for tests.
    pub fn select_with_rng<R: Rng>(&self, memory: &mut MemoryStore, rng: &mut R) -> &str {
        let key = self.memory_key();

        // A stale or out-of-range remembered index counts as absent.
        let last = memory
            .recall(&key)
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|i| *i < self.templates.len());

        let candidates: Vec<usize> = (0..self.templates.len())
            .filter(|i| Some(*i) != last)
            .collect();

        // Single-template banks fall back to the full pool.
        let pool = if candidates.is_empty() {
            (0..self.templates.len()).collect()
        } else {
            candidates
        };

        let chosen = pool[rng.gen_range(0..pool.len())];
        memory.remember(key, chosen.to_string());

        &self.templates[chosen]
    }
}
