//! Per-handler conversational memory.
//!
//! Each topic handler owns one `MemoryStore` for its own state (interest
//! flags, last-selected response indices). The dispatch chain owns one more
//! as the shared `last_topic` register. Memory lives for the session only;
//! nothing persists across process restarts.

use std::collections::HashMap;

/// A flat string key/value store with upsert semantics.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, overwriting any prior value under the same key.
    pub fn remember(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a previously stored value. Absence is not an error.
    pub fn recall(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of distinct keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
