//! ChatSession - the engine's public entry point.
//!
//! Owns the fixed-order handler chain, the shared topic register, and the
//! sentiment reactor. `respond` is total: every string input, including
//! empty or arbitrarily long text, produces a response (the catch-all
//! guarantees termination).
//!
//! Output composition: the returned string is
//! `[follow-up preamble] [sentiment reactions] [handler response]`,
//! blank-line separated, reactions before the response. The caller renders
//! the one returned string; there is no separate side-channel output.

use crate::bank::BankError;
use crate::handler::{
    contains_ignore_case, Handler, SentimentEvent, Turn, INTEREST_KEY, LAST_TOPIC_KEY,
};
use crate::memory::MemoryStore;
use crate::sentiment::SentimentReactor;
use crate::topics;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from engine construction. Dispatch itself never fails.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("bank error: {0}")]
    Bank(#[from] BankError),
}

/// One recorded exchange. In-session only; the caller decides whether to
/// export the transcript anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub turn: usize,
    pub user_input: String,
    pub response: String,
}

/// A single-user conversational session.
pub struct ChatSession {
    handlers: Vec<Box<dyn Handler>>,
    shared: MemoryStore,
    reactor: SentimentReactor,
    transcript: Vec<TranscriptEntry>,
}

impl ChatSession {
    /// Build the fixed-order chain: greeting, purpose, password-safety,
    /// phishing, browsing, social-engineering, two-factor-auth, catch-all.
    pub fn new() -> Result<Self, EngineError> {
        let handlers: Vec<Box<dyn Handler>> = vec![
            Box::new(topics::greeting()?),
            Box::new(topics::purpose()?),
            Box::new(topics::password_safety()?),
            Box::new(topics::phishing()?),
            Box::new(topics::browsing()?),
            Box::new(topics::social_engineering()?),
            Box::new(topics::two_factor_auth()?),
            Box::new(topics::fallback()?),
        ];

        Ok(Self {
            handlers,
            shared: MemoryStore::new(),
            reactor: SentimentReactor::new(),
            transcript: Vec::new(),
        })
    }

    /// Replace the sentiment reactor.
    pub fn with_reactor(mut self, reactor: SentimentReactor) -> Self {
        self.reactor = reactor;
        self
    }

    /// Dispatch one input and return the full text to display.
    pub fn respond(&mut self, input: &str, user_name: &str) -> String {
        let mut sections: Vec<String> = Vec::new();

        // Follow-up resolution: "tell me more" re-dispatches as the last
        // recorded topic. The shared slot is the only cross-handler memory.
        let mut effective = input.to_string();
        if contains_ignore_case(input, "more") {
            if let Some(topic) = self.shared.recall(LAST_TOPIC_KEY).map(str::to_string) {
                debug!(%topic, "follow-up rewrite");
                let mut preamble = format!("Continuing our discussion about {topic}...");
                if let Some(interest) = self.shared.recall(INTEREST_KEY) {
                    preamble.push_str(&format!(
                        "\nI remember you were particularly interested in {interest}..."
                    ));
                }
                sections.push(preamble);
                effective = topic;
            }
        }

        let index = self
            .handlers
            .iter()
            .position(|h| h.can_handle(&effective))
            .unwrap_or(self.handlers.len() - 1);
        debug!(handler = self.handlers[index].name(), "dispatch");

        let mut sentiments: Vec<SentimentEvent> = Vec::new();
        let response = self.handlers[index].handle(&mut Turn {
            input: &effective,
            user_name,
            shared: &mut self.shared,
            sentiments: &mut sentiments,
        });

        // Reactions precede the handler response, matching the order the
        // events were raised in.
        for event in &sentiments {
            debug!(sentiment = ?event.sentiment, "sentiment reaction");
            if let Some(reaction) = self.reactor.react(event.sentiment, &event.user_name) {
                sections.push(reaction);
            }
        }
        sections.push(response);

        let out = sections.join("\n\n");
        self.transcript.push(TranscriptEntry {
            turn: self.transcript.len() + 1,
            user_input: input.to_string(),
            response: out.clone(),
        });
        out
    }

    /// The topic of the most recent topical response, if any.
    pub fn last_topic(&self) -> Option<&str> {
        self.shared.recall(LAST_TOPIC_KEY)
    }

    /// All exchanges so far, in order.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ChatSession {
        ChatSession::new().expect("built-in banks are non-empty")
    }

    #[test]
    fn test_phishing_routes_to_phishing_not_password() {
        let mut s = session();
        let out = s.respond("what is phishing", "Asha");
        assert!(out.contains("Phishing") || out.contains("phishing"));
        assert_eq!(s.last_topic(), Some("phishing"));
    }

    #[test]
    fn test_earlier_handler_wins() {
        // "hello" matches greeting, which precedes everything else.
        let mut s = session();
        let out = s.respond("hello", "Asha");
        assert!(out.contains("Asha"));
        assert_eq!(s.last_topic(), None);
    }

    #[test]
    fn test_unmatched_input_hits_catch_all() {
        let mut s = session();
        let out = s.respond("quantum llama stew", "Asha");
        assert!(out.ends_with(topics::TOPIC_MENU));
    }

    #[test]
    fn test_catch_all_is_total_on_degenerate_input() {
        let mut s = session();
        let long = "x".repeat(10_000);
        for input in ["", "   ", long.as_str()] {
            let out = s.respond(input, "Asha");
            assert!(!out.is_empty());
        }
    }

    #[test]
    fn test_sentiment_reaction_precedes_response() {
        let mut s = session();
        let out = s.respond("I'm worried about phishing", "Asha");
        let reaction_at = out
            .find("I understand this might feel overwhelming, Asha.")
            .expect("negative reaction present");
        assert_eq!(reaction_at, 0, "reaction should lead the output");
        assert!(out.len() > reaction_at);
    }

    #[test]
    fn test_interest_flag_survives_unrelated_turns() {
        let mut s = session();
        s.respond("remember password", "Asha");
        s.respond("hello", "Asha");
        let out = s.respond("password tips please", "Asha");
        assert!(out.starts_with("Since you're interested in password safety, Asha, here's more:"));
    }

    #[test]
    fn test_tell_me_more_redispatches_last_topic() {
        let mut s = session();
        s.respond("what is phishing", "Asha");
        let out = s.respond("tell me more", "Asha");
        assert!(out.starts_with("Continuing our discussion about phishing..."));
        assert_eq!(s.last_topic(), Some("phishing"));
    }

    #[test]
    fn test_tell_me_more_echoes_remembered_interest() {
        let mut s = session();
        s.respond("remember password", "Asha");
        let out = s.respond("tell me more", "Asha");
        assert!(out.contains("Continuing our discussion about password safety..."));
        assert!(out.contains("I remember you were particularly interested in password safety..."));
    }

    #[test]
    fn test_more_without_prior_topic_falls_through() {
        // Nothing to continue; "tell me more" matches no keywords and lands
        // on the catch-all.
        let mut s = session();
        let out = s.respond("tell me more", "Asha");
        assert!(out.ends_with(topics::TOPIC_MENU));
    }

    #[test]
    fn test_transcript_records_exchanges_in_order() {
        let mut s = session();
        s.respond("hello", "Asha");
        s.respond("what is phishing", "Asha");

        let transcript = s.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].turn, 1);
        assert_eq!(transcript[0].user_input, "hello");
        assert_eq!(transcript[1].turn, 2);
        assert_eq!(transcript[1].user_input, "what is phishing");
    }

    #[test]
    fn test_transcript_serializes() {
        let mut s = session();
        s.respond("hello", "Asha");
        let json = serde_json::to_string(s.transcript()).expect("serializable");
        assert!(json.contains("\"user_input\":\"hello\""));
    }

    #[test]
    fn test_silent_reactor_suppresses_reaction_text() {
        let mut s = session().with_reactor(SentimentReactor::empty());
        let out = s.respond("I'm worried about phishing", "Asha");
        assert!(!out.contains("overwhelming"));
    }
}
