//! Form Routes
//!
//! - POST /forms/counseling - Counseling registration
//! - POST /forms/volunteer - Volunteer registration
//! - POST /forms/partnership - Partner / donor registration
//! - POST /forms/newsletter - Newsletter signup
//!
//! Every form redirects back to its section with a flash message, including
//! posts whose body cannot be decoded (e.g. a select value outside the list).

use axum::{
    extract::{rejection::FormRejection, Extension, State},
    response::Redirect,
    Form,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::session::CurrentSession;
use crate::api::state::AppState;
use crate::forms::{
    self, CounselingForm, NewsletterForm, PartnershipForm, Submission, VolunteerForm,
};
use crate::session::Flash;

/// POST /forms/counseling
pub async fn counseling(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
    form: Result<Form<CounselingForm>, FormRejection>,
) -> ApiResult<Redirect> {
    handle_submission(&state, &session, form).await
}

/// POST /forms/volunteer
pub async fn volunteer(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
    form: Result<Form<VolunteerForm>, FormRejection>,
) -> ApiResult<Redirect> {
    handle_submission(&state, &session, form).await
}

/// POST /forms/partnership
pub async fn partnership(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
    form: Result<Form<PartnershipForm>, FormRejection>,
) -> ApiResult<Redirect> {
    handle_submission(&state, &session, form).await
}

/// POST /forms/newsletter
pub async fn newsletter(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
    form: Result<Form<NewsletterForm>, FormRejection>,
) -> ApiResult<Redirect> {
    handle_submission(&state, &session, form).await
}

async fn handle_submission<F: Submission>(
    state: &AppState,
    CurrentSession(session_id): &CurrentSession,
    form: Result<Form<F>, FormRejection>,
) -> ApiResult<Redirect> {
    let kind = F::KIND;
    let submitted_at = state.display_time(state.now());

    state
        .sessions
        .with_session(session_id, |session| {
            let outcome = match form {
                Ok(Form(form)) => forms::submit(&mut session.forms, form, &submitted_at)
                    .map_err(|e| e.to_string()),
                // The rejection text can echo submitted values, so only the status is logged
                Err(rejection) => Err(format!("undecodable form body ({})", rejection.status())),
            };

            match outcome {
                Ok(message) => {
                    tracing::info!(session_id = %session_id, form = %kind, "Form submitted");
                    session.set_flash(Flash::success(kind.anchor(), message));
                }
                Err(e) => {
                    tracing::info!(
                        session_id = %session_id,
                        form = %kind,
                        reason = %e,
                        "Form rejected"
                    );
                    session.set_flash(Flash::error(kind.anchor(), kind.error_message()));
                }
            }
        })
        .await?;

    Ok(Redirect::to(&format!("/#{}", kind.anchor())))
}
