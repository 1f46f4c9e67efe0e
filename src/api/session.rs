//! Session cookie middleware
//!
//! Resolves the visitor's session from the cookie, issuing a new one when
//! needed, and exposes it to handlers as a [`CurrentSession`] extension.

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::state::AppState;
use crate::session::SessionId;

/// Session resolved for the current request
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionId);

pub async fn session_layer(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let name = state.sessions.cookie_name().to_string();
    let cookie = read_cookie(request.headers(), &name);
    let (id, created) = state.sessions.resolve(cookie.as_deref()).await;

    request.extensions_mut().insert(CurrentSession(id.clone()));
    let mut response = next.run(request).await;

    if created {
        match HeaderValue::from_str(&session_cookie(&name, &id)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(error = %e, "Invalid session cookie value"),
        }
    }

    response
}

/// `Set-Cookie` value for a session
pub fn session_cookie(name: &str, id: &str) -> String {
    format!("{}={}; HttpOnly; SameSite=Lax; Path=/", name, id)
}

/// Find a cookie by name across all `Cookie` headers
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; safespace_session=abc-123; lang=en"),
        );

        assert_eq!(
            read_cookie(&headers, "safespace_session").as_deref(),
            Some("abc-123")
        );
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_read_cookie_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("safespace_session=xyz"));

        assert_eq!(read_cookie(&headers, "safespace_session").as_deref(), Some("xyz"));
    }

    #[test]
    fn test_empty_cookie_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("safespace_session="));
        assert_eq!(read_cookie(&headers, "safespace_session"), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        assert_eq!(
            session_cookie("safespace_session", "abc"),
            "safespace_session=abc; HttpOnly; SameSite=Lax; Path=/"
        );
    }
}
