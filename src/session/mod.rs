//! Visitor Sessions
//!
//! Everything a visitor does lives in their session: the mood log, the chat
//! transcript, the state of each form and a one-shot flash message. Sessions
//! are keyed by a cookie and held in memory only.

pub mod store;

pub use store::{SessionId, SessionStore, StoreError};

use std::time::Instant;

use crate::faq::ChatTranscript;
use crate::forms::FormState;
use crate::mood::MoodLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            FlashLevel::Success => "flash-success",
            FlashLevel::Error => "flash-error",
        }
    }
}

/// A message shown once, inside the section it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub anchor: &'static str,
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(anchor: &'static str, message: impl Into<String>) -> Self {
        Self {
            anchor,
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(anchor: &'static str, message: impl Into<String>) -> Self {
        Self {
            anchor,
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    pub id: SessionId,
    pub mood: MoodLog,
    pub chat: ChatTranscript,
    pub forms: FormState,
    flash: Option<Flash>,
    last_seen: Instant,
}

impl Session {
    pub fn new(id: SessionId, max_chat_messages: usize) -> Self {
        Self {
            id,
            mood: MoodLog::new(),
            chat: ChatTranscript::new(max_chat_messages),
            forms: FormState::default(),
            flash: None,
            last_seen: Instant::now(),
        }
    }

    /// Replace any pending flash
    pub fn set_flash(&mut self, flash: Flash) {
        self.flash = Some(flash);
    }

    /// Pending flash, cleared once taken
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }

    pub fn last_seen(&self) -> Instant {
        self.last_seen
    }

    fn touch(&mut self) {
        self.last_seen = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_is_one_shot() {
        let mut session = Session::new("s1".to_string(), 10);
        session.set_flash(Flash::error("tracker", "first"));
        session.set_flash(Flash::success("tracker", "second"));

        let flash = session.take_flash().unwrap();
        assert_eq!(flash.message, "second");
        assert_eq!(flash.level, FlashLevel::Success);
        assert!(session.take_flash().is_none());
    }
}
