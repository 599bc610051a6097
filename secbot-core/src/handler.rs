//! Topic handlers: the behavioral unit of the chatbot.
//!
//! A handler pairs a keyword set with a response bank and its own memory.
//! Keyword matching is case-insensitive substring containment anywhere in
//! the input, not word-boundary. The catch-all `FallbackHandler` matches
//! everything and must sit last in dispatch order.

use crate::bank::{personalize, ResponseBank};
use crate::memory::MemoryStore;
use crate::sentiment::{self, Sentiment};

/// Shared-memory slot recording the topic of the most recent topical answer.
pub const LAST_TOPIC_KEY: &str = "last_topic";

/// Shared-memory slot mirroring the most recently flagged interest.
pub const INTEREST_KEY: &str = "interest";

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A sentiment observed while handling one input. Ephemeral; the session
/// applies the reactor to these after the handler returns.
#[derive(Debug, Clone)]
pub struct SentimentEvent {
    pub sentiment: Sentiment,
    pub raw_input: String,
    pub user_name: String,
}

/// Mutable context for one dispatch-and-handle cycle.
pub struct Turn<'a> {
    /// Effective input (after any follow-up rewrite).
    pub input: &'a str,
    pub user_name: &'a str,
    /// Chain-level shared memory (`last_topic` / `interest` register).
    pub shared: &'a mut MemoryStore,
    /// Sentiment events collected during this turn.
    pub sentiments: &'a mut Vec<SentimentEvent>,
}

/// Contract every handler in the dispatch chain satisfies.
pub trait Handler {
    /// Stable handler name, used for logging.
    fn name(&self) -> &str;

    /// Whether this handler wants the input.
    fn can_handle(&self, input: &str) -> bool;

    /// Produce the response text, mutating handler memory as needed.
    fn handle(&mut self, turn: &mut Turn<'_>) -> String;
}

/// How a topic handler tracks repeat interest in its subject.
#[derive(Debug, Clone, Copy)]
pub enum InterestPolicy {
    /// The handler only answers; no interest tracking.
    None,
    /// The word "remember" anywhere in the input sets the flag and appends
    /// `ack`; once set, later responses are prefixed with `prefix`.
    OnRemember {
        key: &'static str,
        value: &'static str,
        prefix: &'static str,
        ack: &'static str,
    },
    /// Every visit sets the flag; any revisit gets the `prefix`.
    OnRepeat {
        key: &'static str,
        prefix: &'static str,
    },
}

/// A keyword-matched handler owning one conversational topic.
pub struct TopicHandler {
    name: &'static str,
    /// Topic label written to the shared `last_topic` slot. Chosen so that
    /// the label itself contains one of this handler's keywords, which is
    /// what makes "tell me more" route back here.
    topic: Option<&'static str>,
    keywords: &'static [&'static str],
    bank: ResponseBank,
    memory: MemoryStore,
    policy: InterestPolicy,
}

impl TopicHandler {
    pub fn new(
        name: &'static str,
        topic: Option<&'static str>,
        keywords: &'static [&'static str],
        bank: ResponseBank,
        policy: InterestPolicy,
    ) -> Self {
        Self {
            name,
            topic,
            keywords,
            bank,
            memory: MemoryStore::new(),
            policy,
        }
    }

    /// This handler's private memory (interest flags, selection state).
    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }
}

impl Handler for TopicHandler {
    fn name(&self) -> &str {
        self.name
    }

    fn can_handle(&self, input: &str) -> bool {
        let lowered = input.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k))
    }

    fn handle(&mut self, turn: &mut Turn<'_>) -> String {
        if let Some(detected) = sentiment::detect(turn.input) {
            turn.sentiments.push(SentimentEvent {
                sentiment: detected,
                raw_input: turn.input.to_string(),
                user_name: turn.user_name.to_string(),
            });
        }

        if let Some(topic) = self.topic {
            turn.shared.remember(LAST_TOPIC_KEY, topic);
        }

        // Flag state is read before the "remember" trigger below can set it,
        // so the acknowledgment prefix first appears on the *next* visit.
        let prefix = match self.policy {
            InterestPolicy::None => None,
            InterestPolicy::OnRemember {
                key, value, prefix, ..
            } => (self.memory.recall(key) == Some(value)).then_some(prefix),
            InterestPolicy::OnRepeat { key, prefix } => {
                self.memory.recall(key).is_some().then_some(prefix)
            }
        };

        let body = personalize(self.bank.select(&mut self.memory), turn.user_name);
        let mut out = match prefix {
            Some(prefix) => format!("{}\n{}", personalize(prefix, turn.user_name), body),
            None => body,
        };

        match self.policy {
            InterestPolicy::None => {}
            InterestPolicy::OnRemember {
                key, value, ack, ..
            } => {
                if contains_ignore_case(turn.input, "remember") {
                    self.memory.remember(key, value);
                    if let Some(topic) = self.topic {
                        turn.shared.remember(INTEREST_KEY, topic);
                    }
                    out.push_str("\n\n");
                    out.push_str(&personalize(ack, turn.user_name));
                }
            }
            InterestPolicy::OnRepeat { key, .. } => {
                self.memory.remember(key, "true");
            }
        }

        out
    }
}

/// The catch-all handler. Ignores memory and sentiment; answers with one
/// non-repeating fallback plus a static menu of supported topics.
pub struct FallbackHandler {
    bank: ResponseBank,
    memory: MemoryStore,
    menu: &'static str,
}

impl FallbackHandler {
    pub fn new(bank: ResponseBank, menu: &'static str) -> Self {
        Self {
            bank,
            memory: MemoryStore::new(),
            menu,
        }
    }
}

impl Handler for FallbackHandler {
    fn name(&self) -> &str {
        "fallback"
    }

    fn can_handle(&self, _input: &str) -> bool {
        true
    }

    fn handle(&mut self, _turn: &mut Turn<'_>) -> String {
        format!("{}\n{}", self.bank.select(&mut self.memory), self.menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::ResponseBank;

    fn turn_parts() -> (MemoryStore, Vec<SentimentEvent>) {
        (MemoryStore::new(), Vec::new())
    }

    fn sample_handler(policy: InterestPolicy) -> TopicHandler {
        TopicHandler::new(
            "phishing",
            Some("phishing"),
            &["phishing", "scam"],
            ResponseBank::new("main", vec!["Watch for fake senders, {name}.".to_string()])
                .expect("non-empty bank"),
            policy,
        )
    }

    #[test]
    fn test_keyword_match_is_case_insensitive_substring() {
        let handler = sample_handler(InterestPolicy::None);
        assert!(handler.can_handle("what is PHISHING?"));
        assert!(handler.can_handle("I got a scammy email")); // "scam" substring
        assert!(!handler.can_handle("hello there"));
    }

    #[test]
    fn test_handle_records_last_topic_and_personalizes() {
        let mut handler = sample_handler(InterestPolicy::None);
        let (mut shared, mut sentiments) = turn_parts();

        let out = handler.handle(&mut Turn {
            input: "what is phishing",
            user_name: "Asha",
            shared: &mut shared,
            sentiments: &mut sentiments,
        });

        assert_eq!(shared.recall(LAST_TOPIC_KEY), Some("phishing"));
        assert!(out.contains("Asha"));
        assert!(sentiments.is_empty());
    }

    #[test]
    fn test_handle_collects_sentiment_event() {
        let mut handler = sample_handler(InterestPolicy::None);
        let (mut shared, mut sentiments) = turn_parts();

        handler.handle(&mut Turn {
            input: "I'm worried about phishing",
            user_name: "Asha",
            shared: &mut shared,
            sentiments: &mut sentiments,
        });

        assert_eq!(sentiments.len(), 1);
        assert_eq!(sentiments[0].sentiment, Sentiment::Negative);
        assert_eq!(sentiments[0].user_name, "Asha");
    }

    #[test]
    fn test_remember_trigger_sets_flag_and_acknowledges() {
        let policy = InterestPolicy::OnRemember {
            key: "important_topic",
            value: "phishing",
            prefix: "{name}, since phishing is important to you:",
            ack: "I'll remember that phishing is an important topic for you, {name}!",
        };
        let mut handler = sample_handler(policy);
        let (mut shared, mut sentiments) = turn_parts();

        // First visit with "remember": no prefix yet, but flag set + ack.
        let first = handler.handle(&mut Turn {
            input: "remember phishing",
            user_name: "Asha",
            shared: &mut shared,
            sentiments: &mut sentiments,
        });
        assert!(!first.starts_with("Asha, since phishing is important to you:"));
        assert!(first.contains("I'll remember that phishing is an important topic for you, Asha!"));
        assert_eq!(handler.memory().recall("important_topic"), Some("phishing"));
        assert_eq!(shared.recall(INTEREST_KEY), Some("phishing"));

        // Next visit: flag is set, so the prefix appears.
        let second = handler.handle(&mut Turn {
            input: "what is phishing",
            user_name: "Asha",
            shared: &mut shared,
            sentiments: &mut sentiments,
        });
        assert!(second.starts_with("Asha, since phishing is important to you:"));
    }

    #[test]
    fn test_repeat_policy_prefixes_on_revisit() {
        let policy = InterestPolicy::OnRepeat {
            key: "last_social_engineering_response",
            prefix: "{name}, building on our previous talk:",
        };
        let mut handler = sample_handler(policy);
        let (mut shared, mut sentiments) = turn_parts();

        let first = handler.handle(&mut Turn {
            input: "phishing",
            user_name: "Asha",
            shared: &mut shared,
            sentiments: &mut sentiments,
        });
        assert!(!first.starts_with("Asha, building on our previous talk:"));

        let second = handler.handle(&mut Turn {
            input: "phishing",
            user_name: "Asha",
            shared: &mut shared,
            sentiments: &mut sentiments,
        });
        assert!(second.starts_with("Asha, building on our previous talk:"));
    }

    #[test]
    fn test_fallback_always_matches_and_appends_menu() {
        let bank = ResponseBank::new("default", vec!["I didn't follow that.".to_string()])
            .expect("non-empty bank");
        let mut handler = FallbackHandler::new(bank, "Try asking about: passwords.");
        let (mut shared, mut sentiments) = turn_parts();

        assert!(handler.can_handle("zzz"));
        assert!(handler.can_handle(""));

        let out = handler.handle(&mut Turn {
            input: "I'm worried about zzz",
            user_name: "Asha",
            shared: &mut shared,
            sentiments: &mut sentiments,
        });
        assert!(out.ends_with("Try asking about: passwords."));
        // Catch-all ignores sentiment and shared memory.
        assert!(sentiments.is_empty());
        assert!(shared.is_empty());
    }
}
