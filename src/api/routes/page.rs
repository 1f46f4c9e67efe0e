//! Page Route
//!
//! - GET / - The SafeSpace page, rendered for the current session

use axum::{
    extract::{Extension, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::session::CurrentSession;
use crate::api::state::AppState;
use crate::render::{render_page, PageView};

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    Extension(CurrentSession(session_id)): Extension<CurrentSession>,
) -> ApiResult<Html<String>> {
    let recent = state.config.site.recent_moods;
    let view = state
        .sessions
        .with_session(&session_id, |session| PageView::from_session(session, recent))
        .await?;

    Ok(Html(render_page(&view)))
}
