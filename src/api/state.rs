//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, FixedOffset, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::faq::KnowledgeBase;
use crate::session::SessionStore;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Per-visitor sessions
    pub sessions: Arc<SessionStore>,
    /// FAQ chatbot knowledge base
    pub knowledge: Arc<KnowledgeBase>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state with the built-in knowledge base
    pub fn new(config: Config) -> Self {
        Self::with_knowledge_base(config, KnowledgeBase::builtin())
    }

    pub fn with_knowledge_base(config: Config, knowledge: KnowledgeBase) -> Self {
        let sessions = SessionStore::new(config.session.clone(), config.chat.max_messages);

        Self {
            config: Arc::new(config),
            sessions: Arc::new(sessions),
            knowledge: Arc::new(knowledge),
            start_time: Instant::now(),
        }
    }

    /// Current time in the site's time zone
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.config.site.offset())
    }

    /// `01:08 AM EAT, August 06, 2025`
    pub fn display_time(&self, at: DateTime<FixedOffset>) -> String {
        format!(
            "{} {}, {}",
            at.format("%I:%M %p"),
            self.config.site.timezone_label,
            at.format("%B %d, %Y")
        )
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_time() {
        let state = AppState::new(Config::default());
        let at = FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 8, 6, 1, 8, 0)
            .unwrap();

        assert_eq!(state.display_time(at), "01:08 AM EAT, August 06, 2025");
    }

    #[test]
    fn test_now_uses_site_offset() {
        let state = AppState::new(Config::default());
        assert_eq!(state.now().offset().local_minus_utc(), 3 * 3600);
    }
}
