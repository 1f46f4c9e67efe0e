//! Page Rendering
//!
//! Server-side HTML for the single page:
//!
//! - **sections**: static content sections
//! - **widgets**: forms, mood tracker and chatbot, filled from the session
//! - **html**: escaping and small element builders
//! - **style**: the stylesheet inlined into the page
//!
//! Rendering works from a [`PageView`] snapshot so the session lock is not
//! held while the page is built. All visitor-supplied text is escaped.

pub mod html;
pub mod sections;
pub mod style;
pub mod widgets;

use crate::content::ORG_NAME;
use crate::faq::ChatMessage;
use crate::forms::FormState;
use crate::mood::MoodEntry;
use crate::session::{Flash, Session};

/// Everything from a session that the page shows
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub flash: Option<Flash>,
    pub forms: FormState,
    pub recent_moods: Vec<MoodEntry>,
    pub chat: Vec<ChatMessage>,
}

impl PageView {
    /// Snapshot a session, consuming its pending flash
    pub fn from_session(session: &mut Session, recent_moods: usize) -> Self {
        Self {
            flash: session.take_flash(),
            forms: session.forms.clone(),
            recent_moods: session.mood.recent(recent_moods).to_vec(),
            chat: session.chat.messages().cloned().collect(),
        }
    }
}

/// Render the complete page
pub fn render_page(view: &PageView) -> String {
    let mut body = String::with_capacity(64 * 1024);

    body.push_str(&sections::header());
    body.push_str("<main>\n");
    body.push_str(&sections::hero());
    body.push_str(&sections::about());
    body.push_str(&sections::founders());
    body.push_str(&sections::services());
    body.push_str(&widgets::counseling_form(view));
    body.push_str(&sections::services_footer());
    body.push_str(&sections::testimonials());
    body.push_str(&sections::counseling_sessions());
    body.push_str(&sections::blog());
    body.push_str(&sections::crisis());
    body.push_str(&widgets::mood_tracker(view));
    body.push_str(&sections::volunteer());
    body.push_str(&widgets::volunteer_form(view));
    body.push_str(&sections::volunteer_footer());
    body.push_str(&sections::events());
    body.push_str(&sections::partnerships());
    body.push_str(&widgets::partnership_form(view));
    body.push_str(&sections::partner_with_us());
    body.push_str(&sections::faq());
    body.push_str(&sections::contact());
    body.push_str("</main>\n");
    body.push_str(&sections::footer());
    body.push_str(&widgets::newsletter_form(view));
    body.push_str("</footer>\n");
    body.push_str(&widgets::chatbot(view));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        html::escape(ORG_NAME),
        style::STYLESHEET,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::KnowledgeBase;
    use crate::mood::MoodRating;
    use chrono::{Duration, FixedOffset, TimeZone};

    #[test]
    fn test_page_has_all_sections() {
        let page = render_page(&PageView::default());

        for id in [
            "hero",
            "about",
            "founders",
            "services",
            "counseling-form",
            "testimonials",
            "counseling-sessions",
            "blog",
            "crisis",
            "tracker",
            "volunteer",
            "volunteer-form",
            "events",
            "partnerships",
            "partnership-form",
            "partner-with-us",
            "faq",
            "contact",
            "newsletter",
            "chatbot",
        ] {
            assert!(page.contains(&format!("id=\"{}\"", id)), "missing section {}", id);
        }
        assert!(page.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_view_shows_last_five_moods() {
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        let start = tz.with_ymd_and_hms(2025, 8, 6, 8, 0, 0).unwrap();

        let mut session = Session::new("s".to_string(), 10);
        for i in 0..7 {
            session.mood.log(
                MoodRating::DEFAULT,
                format!("note-{}", i),
                start + Duration::minutes(i),
            );
        }

        let view = PageView::from_session(&mut session, 5);
        let page = render_page(&view);

        assert!(!page.contains("note-1"));
        assert!(page.contains("2025-08-06 08:02: Mood 3/5 (note-2)"));
        assert!(page.contains("note-6"));
    }

    #[test]
    fn test_visitor_text_is_escaped() {
        let kb = KnowledgeBase::builtin();
        let mut session = Session::new("s".to_string(), 10);
        session.chat.ask(&kb, "<script>alert(1)</script>");

        let page = render_page(&PageView::from_session(&mut session, 5));
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(page.contains("<details class=\"chatbot\" id=\"chatbot\" open>"));
    }

    #[test]
    fn test_flash_consumed_by_view() {
        let mut session = Session::new("s".to_string(), 10);
        session.set_flash(Flash::success("tracker", "Mood logged"));

        let first = render_page(&PageView::from_session(&mut session, 5));
        assert!(first.contains("<div class=\"flash flash-success\" role=\"status\">Mood logged</div>"));

        let second = render_page(&PageView::from_session(&mut session, 5));
        assert!(!second.contains("Mood logged"));
    }
}
