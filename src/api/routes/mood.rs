//! Mood Routes
//!
//! - POST /mood - Log a mood rating with an optional note
//! - GET /mood/export - Download the session's mood history as CSV

use axum::{
    body::Body,
    extract::{Extension, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;

use crate::api::dto::MoodRequest;
use crate::api::error::ApiResult;
use crate::api::session::CurrentSession;
use crate::api::state::AppState;
use crate::mood::{MoodError, MoodRating, CSV_FILENAME};
use crate::session::Flash;

const TRACKER_ANCHOR: &str = "tracker";

/// POST /mood
///
/// An out-of-range or unparseable rating is reported inline and nothing
/// is logged.
pub async fn log_mood(
    State(state): State<Arc<AppState>>,
    Extension(CurrentSession(session_id)): Extension<CurrentSession>,
    Form(request): Form<MoodRequest>,
) -> ApiResult<Redirect> {
    let rating = parse_rating(&request.rating);
    let now = state.now();
    let logged_at = state.display_time(now);

    state
        .sessions
        .with_session(&session_id, |session| match rating {
            Ok(rating) => {
                session.mood.log(rating, request.note, now);
                tracing::info!(
                    session_id = %session_id,
                    rating = rating.value(),
                    entries = session.mood.len(),
                    "Mood logged"
                );
                session.set_flash(Flash::success(
                    TRACKER_ANCHOR,
                    format!("Logged at {}!", logged_at),
                ));
            }
            Err(e) => {
                tracing::info!(session_id = %session_id, reason = %e, "Mood rejected");
                session.set_flash(Flash::error(TRACKER_ANCHOR, e.to_string()));
            }
        })
        .await?;

    Ok(Redirect::to(&format!("/#{}", TRACKER_ANCHOR)))
}

/// GET /mood/export
pub async fn export_moods(
    State(state): State<Arc<AppState>>,
    Extension(CurrentSession(session_id)): Extension<CurrentSession>,
) -> ApiResult<Response> {
    let csv = state
        .sessions
        .with_session(&session_id, |session| session.mood.to_csv())
        .await??;

    tracing::debug!(session_id = %session_id, bytes = csv.len(), "Mood history exported");

    let disposition = format!("attachment; filename=\"{}\"", CSV_FILENAME);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, disposition.as_str()),
        ],
        Body::from(csv),
    )
        .into_response())
}

fn parse_rating(raw: &str) -> Result<MoodRating, MoodError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(MoodRating::DEFAULT);
    }

    let value = raw.parse::<i64>().map_err(|_| MoodError::InvalidRating)?;
    MoodRating::new(value)
}
