//! Sentiment detection and the reaction side-channel.
//!
//! Detection is word-list membership on the raw input, not tokenized:
//! "good" inside "goodbye" matches. That false positive is accepted
//! source behavior. The negative list wins when both lists match.

use crate::bank::personalize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const NEGATIVE_WORDS: &[&str] = &["worried", "scared", "afraid", "nervous", "frustrated"];
const POSITIVE_WORDS: &[&str] = &["happy", "excited", "great", "good", "interested"];

/// Detected emotional tone of a user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Negative,
    Positive,
}

/// Classify input by case-insensitive substring containment.
///
/// Negative words are checked first, so an input containing both
/// "worried" and "happy" classifies as negative.
pub fn detect(input: &str) -> Option<Sentiment> {
    let lowered = input.to_lowercase();
    if NEGATIVE_WORDS.iter().any(|w| lowered.contains(w)) {
        return Some(Sentiment::Negative);
    }
    if POSITIVE_WORDS.iter().any(|w| lowered.contains(w)) {
        return Some(Sentiment::Positive);
    }
    None
}

/// Maps detected sentiment to a canned, personalized acknowledgment.
///
/// A sentiment with no registered template is a no-op, so the reactor
/// tolerates labels it was never configured for.
#[derive(Debug, Clone)]
pub struct SentimentReactor {
    reactions: HashMap<Sentiment, String>,
}

impl SentimentReactor {
    /// Reactor with the stock reassurance/encouragement templates.
    pub fn new() -> Self {
        Self::empty()
            .with_reaction(
                Sentiment::Negative,
                "I understand this might feel overwhelming, {name}. Let's take it one step at a time.",
            )
            .with_reaction(
                Sentiment::Positive,
                "Great to see your enthusiasm about cybersecurity, {name}!",
            )
    }

    /// Reactor with no templates; every sentiment is a no-op.
    pub fn empty() -> Self {
        Self {
            reactions: HashMap::new(),
        }
    }

    /// Register (or replace) the template for a sentiment.
    pub fn with_reaction(mut self, sentiment: Sentiment, template: impl Into<String>) -> Self {
        self.reactions.insert(sentiment, template.into());
        self
    }

    /// Produce the acknowledgment for a sentiment, if one is registered.
    pub fn react(&self, sentiment: Sentiment, user_name: &str) -> Option<String> {
        self.reactions
            .get(&sentiment)
            .map(|template| personalize(template, user_name))
    }
}

impl Default for SentimentReactor {
    fn default() -> Self {
        Self::new()
    }
}
