//! Chat Routes
//!
//! - POST /chat - Ask the FAQ bot from the page widget
//! - POST /api/v1/chat - Ask the FAQ bot, JSON in and out
//!
//! Both record the exchange in the session transcript.

use axum::{
    extract::{Extension, State},
    response::Redirect,
    Form, Json,
};
use std::sync::Arc;

use crate::api::dto::{ChatRequest, ChatResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::session::CurrentSession;
use crate::api::state::AppState;

/// POST /chat
pub async fn ask_form(
    State(state): State<Arc<AppState>>,
    Extension(CurrentSession(session_id)): Extension<CurrentSession>,
    Form(request): Form<ChatRequest>,
) -> ApiResult<Redirect> {
    let knowledge = Arc::clone(&state.knowledge);

    let answered = state
        .sessions
        .with_session(&session_id, |session| {
            session.chat.ask(&knowledge, &request.query).is_some()
        })
        .await?;

    tracing::debug!(session_id = %session_id, answered, "Chat question");
    Ok(Redirect::to("/#chatbot"))
}

/// POST /api/v1/chat
pub async fn ask_json(
    State(state): State<Arc<AppState>>,
    Extension(CurrentSession(session_id)): Extension<CurrentSession>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    if request.query.trim().is_empty() {
        return Err(ApiError::Validation("query must not be empty".to_string()));
    }

    let pattern = state
        .knowledge
        .find(request.query.trim())
        .map(|entry| entry.pattern().to_string());

    let knowledge = Arc::clone(&state.knowledge);
    let answer = state
        .sessions
        .with_session(&session_id, |session| session.chat.ask(&knowledge, &request.query))
        .await?
        .unwrap_or_else(|| knowledge.default_answer().to_string());

    tracing::debug!(
        session_id = %session_id,
        matched = pattern.is_some(),
        "Chat question via API"
    );

    Ok(Json(ChatResponse {
        answer,
        matched: pattern.is_some(),
        pattern,
    }))
}
