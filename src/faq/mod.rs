//! FAQ Chatbot
//!
//! Rule-based question answering over a fixed knowledge base:
//!
//! - **knowledge**: ordered (pattern, answer) entries, first match wins
//! - **transcript**: per-session chat history
//!
//! # Example
//!
//! ```rust
//! use safespace::faq::KnowledgeBase;
//!
//! let kb = KnowledgeBase::builtin();
//! let answer = kb.answer("Who are the founders?");
//! assert!(answer.contains("Jerim Owino"));
//! ```

pub mod knowledge;
pub mod transcript;

pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use transcript::{ChatMessage, ChatTranscript, Speaker};

use thiserror::Error;

/// Errors building a knowledge base
#[derive(Error, Debug)]
pub enum FaqError {
    /// A question pattern failed to compile
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
