//! Keyword-dispatch engine for a cybersecurity awareness chatbot.
//!
//! This crate provides:
//! - An ordered chain of keyword-matched topic handlers with a catch-all
//! - Per-handler memory for interest flags and follow-up state
//! - Non-repeating random selection over named response pools
//! - A sentiment side-channel with pluggable reaction templates
//!
//! # Quick Start
//!
//! ```
//! use secbot_core::ChatSession;
//!
//! # fn main() -> Result<(), secbot_core::EngineError> {
//! let mut session = ChatSession::new()?;
//!
//! let reply = session.respond("what is phishing", "Asha");
//! assert!(!reply.is_empty());
//!
//! // Follow-ups re-dispatch to the last topic.
//! let more = session.respond("tell me more", "Asha");
//! assert!(more.starts_with("Continuing our discussion about phishing"));
//! # Ok(())
//! # }
//! ```

pub mod bank;
pub mod handler;
pub mod memory;
pub mod sentiment;
pub mod session;
pub mod topics;

// Primary public API
pub use bank::{personalize, BankError, ResponseBank};
pub use handler::{
    FallbackHandler, Handler, InterestPolicy, SentimentEvent, TopicHandler, Turn,
};
pub use memory::MemoryStore;
pub use sentiment::{detect, Sentiment, SentimentReactor};
pub use session::{ChatSession, EngineError, TranscriptEntry};
