//! # SafeSpace
//!
//! Server for the SafeSpace Organisation site: a single page presenting the
//! organisation, its services and crisis resources, with a few per-visitor
//! widgets.
//!
//! ## Features
//!
//! - **Registration forms**: counseling, volunteer, partnership and newsletter
//!   signups with inline validation
//! - **Mood tracker**: 1-5 ratings with notes, recent history and CSV export
//! - **FAQ chatbot**: ordered regex knowledge base with a fallback answer
//! - **Sessions**: cookie-scoped, in-memory, bounded
//!
//! ## Modules
//!
//! - [`faq`]: Knowledge base and chat transcript
//! - [`mood`]: Mood ratings, log and CSV export
//! - [`forms`]: Form types and validation
//! - [`session`]: Per-visitor state and the session store
//! - [`content`]: Static page copy
//! - [`render`]: HTML rendering
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use safespace::faq::KnowledgeBase;
//! use safespace::mood::{MoodLog, MoodRating};
//! use chrono::{FixedOffset, TimeZone};
//!
//! let kb = KnowledgeBase::builtin();
//! assert!(kb.answer("How can I volunteer?").contains("Volunteer form"));
//!
//! let eat = FixedOffset::east_opt(3 * 3600).unwrap();
//! let mut log = MoodLog::new();
//! log.log(
//!     MoodRating::new(4).unwrap(),
//!     "calm",
//!     eat.with_ymd_and_hms(2025, 8, 6, 9, 30, 0).unwrap(),
//! );
//!
//! assert_eq!(
//!     log.to_csv().unwrap(),
//!     "Date,Mood,Note\n2025-08-06 09:30,4,calm\n"
//! );
//! ```

pub mod api;
pub mod config;
pub mod content;
pub mod faq;
pub mod forms;
pub mod mood;
pub mod render;
pub mod session;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, LoadedConfig, LoggingConfig};

pub use faq::{ChatTranscript, FaqError, KnowledgeBase};

pub use forms::{FormKind, FormState, ValidationError};

pub use mood::{MoodEntry, MoodError, MoodLog, MoodRating};

pub use session::{Session, SessionStore};
