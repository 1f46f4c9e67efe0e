//! SafeSpace HTTP layer
//!
//! Serves the single page and its interactive widgets, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - The SafeSpace page for the current visitor
//!
//! ## Forms
//! - `POST /forms/counseling` - Counseling registration
//! - `POST /forms/volunteer` - Volunteer registration
//! - `POST /forms/partnership` - Partner / donor registration
//! - `POST /forms/newsletter` - Newsletter signup
//!
//! ## Mood tracker
//! - `POST /mood` - Log a mood
//! - `GET /mood/export` - Download mood history as CSV
//!
//! ## Chatbot
//! - `POST /chat` - Ask from the page widget
//! - `POST /api/v1/chat` - Ask via JSON
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! Page, form, mood and chat routes run behind the session cookie
//! middleware; health probes do not create sessions.
//!
//! # Example
//!
//! ```rust,ignore
//! use safespace::api::{serve, AppState};
//! use safespace::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(Config::load_default().config);
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.cors_origins);

    // Create shared state
    let shared_state = Arc::new(state);

    let site_routes = Router::new()
        .route("/", get(routes::page::index))
        // Form routes
        .route("/forms/counseling", post(routes::forms::counseling))
        .route("/forms/volunteer", post(routes::forms::volunteer))
        .route("/forms/partnership", post(routes::forms::partnership))
        .route("/forms/newsletter", post(routes::forms::newsletter))
        // Mood tracker routes
        .route("/mood", post(routes::mood::log_mood))
        .route("/mood/export", get(routes::mood::export_moods))
        // Chatbot routes
        .route("/chat", post(routes::chat::ask_form))
        .route("/api/v1/chat", post(routes::chat::ask_json))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&shared_state),
            session::session_layer,
        ));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    Router::new()
        .merge(site_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Cross-origin access for the JSON chat API; none unless origins are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.server.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("SafeSpace listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("SafeSpace shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, Response, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    /// `name=value` part of the Set-Cookie header
    fn session_cookie(response: &Response<Body>) -> String {
        let value = response.headers()[header::SET_COOKIE].to_str().unwrap();
        value.split(';').next().unwrap().to_string()
    }

    async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        app.clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(app: &Router, uri: &str, cookie: &str, body: &str) -> Response<Body> {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::COOKIE, cookie)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn new_visitor(app: &Router) -> String {
        let response = get(app, "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        session_cookie(&response)
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();
        let response = get(&app, "/health/live", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app();
        let response = get(&app, "/health/ready", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full_creates_no_session() {
        let app = create_test_app();
        let response = get(&app, "/health", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["sessions"], 0);
        assert_eq!(body["knowledge_entries"], 10);
    }

    #[tokio::test]
    async fn test_page_issues_session_cookie() {
        let app = create_test_app();
        let response = get(&app, "/", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.starts_with("safespace_session="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("SameSite=Lax"));

        let page = body_text(response).await;
        assert!(page.contains("id=\"tracker\""));
    }

    #[tokio::test]
    async fn test_known_session_not_reissued() {
        let app = create_test_app();
        let cookie = new_visitor(&app).await;

        let response = get(&app, "/", Some(&cookie)).await;
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_log_mood_then_view() {
        let app = create_test_app();
        let cookie = new_visitor(&app).await;

        let response = post_form(&app, "/mood", &cookie, "rating=4&note=calm+day").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/#tracker");

        let page = body_text(get(&app, "/", Some(&cookie)).await).await;
        assert!(page.contains("Mood 4/5 (calm day)"));
        assert!(page.contains("flash-success\" role=\"status\">Logged at"));
    }

    #[tokio::test]
    async fn test_out_of_range_mood_rejected() {
        let app = create_test_app();
        let cookie = new_visitor(&app).await;

        for rating in ["0", "6"] {
            let body = format!("rating={}&note=x", rating);
            let response = post_form(&app, "/mood", &cookie, &body).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
        }

        let csv = body_text(get(&app, "/mood/export", Some(&cookie)).await).await;
        assert_eq!(csv, "Date,Mood,Note\n");
    }

    #[tokio::test]
    async fn test_export_is_csv_attachment() {
        let app = create_test_app();
        let cookie = new_visitor(&app).await;
        post_form(&app, "/mood", &cookie, "rating=2&note=tired%2C+long+day").await;

        let response = get(&app, "/mood/export", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"mood_history.csv\""
        );

        let csv = body_text(response).await;
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Date,Mood,Note"));
        let row = lines.next().unwrap();
        assert!(row.ends_with(",2,\"tired, long day\""));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let app = create_test_app();
        let alice = new_visitor(&app).await;
        let bob = new_visitor(&app).await;
        assert_ne!(alice, bob);

        post_form(&app, "/mood", &alice, "rating=5&note=alice-note").await;

        let bob_page = body_text(get(&app, "/", Some(&bob)).await).await;
        assert!(!bob_page.contains("alice-note"));

        let bob_csv = body_text(get(&app, "/mood/export", Some(&bob)).await).await;
        assert_eq!(bob_csv, "Date,Mood,Note\n");
    }

    #[tokio::test]
    async fn test_counseling_form_submission() {
        let app = create_test_app();
        let cookie = new_visitor(&app).await;

        let response = post_form(
            &app,
            "/forms/counseling",
            &cookie,
            "name=Jane&email=jane%40example.com&phone=0700000000&type=In-Person",
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/#counseling-form");

        let page = body_text(get(&app, "/", Some(&cookie)).await).await;
        assert!(page.contains("Thank you, Jane!"));
        assert!(!page.contains("value=\"jane@example.com\""));
    }

    #[tokio::test]
    async fn test_invalid_volunteer_form_flashes_error() {
        let app = create_test_app();
        let cookie = new_visitor(&app).await;

        let response = post_form(
            &app,
            "/forms/volunteer",
            &cookie,
            "name=Sam&email=sam-at-example&phone=0700&experience=none",
        )
        .await;
        assert_eq!(response.headers()[header::LOCATION], "/#volunteer-form");

        let page = body_text(get(&app, "/", Some(&cookie)).await).await;
        assert!(page.contains("flash-error\" role=\"status\">Fill all fields."));
    }

    #[tokio::test]
    async fn test_unknown_select_value_flashes_error() {
        let app = create_test_app();
        let cookie = new_visitor(&app).await;

        let response = post_form(
            &app,
            "/forms/counseling",
            &cookie,
            "name=Jane&email=jane%40example.com&phone=0700000000&type=Phone",
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/#counseling-form");

        let page = body_text(get(&app, "/", Some(&cookie)).await).await;
        assert!(page.contains("flash-error\" role=\"status\">Fill all required fields."));
        assert!(!page.contains("Thank you, Jane!"));
    }

    #[tokio::test]
    async fn test_partnership_form_submission() {
        let app = create_test_app();
        let cookie = new_visitor(&app).await;

        let response = post_form(
            &app,
            "/forms/partnership",
            &cookie,
            "name=Amina&organization=&email=amina%40ngo.org&phone=0711000000&type=Donor",
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/#partnership-form");

        let page = body_text(get(&app, "/", Some(&cookie)).await).await;
        assert!(page.contains("Thank you, Amina! Your Donor registration at"));
    }

    #[tokio::test]
    async fn test_partnership_form_missing_phone_rejected() {
        let app = create_test_app();
        let cookie = new_visitor(&app).await;

        let response = post_form(
            &app,
            "/forms/partnership",
            &cookie,
            "name=Amina&email=amina%40ngo.org&phone=&type=Partner",
        )
        .await;
        assert_eq!(response.headers()[header::LOCATION], "/#partnership-form");

        let page = body_text(get(&app, "/", Some(&cookie)).await).await;
        assert!(page.contains("flash-error\" role=\"status\">Fill all required fields."));
    }

    #[tokio::test]
    async fn test_newsletter_signup() {
        let app = create_test_app();
        let cookie = new_visitor(&app).await;

        let response = post_form(&app, "/forms/newsletter", &cookie, "email=reader%40mail.co.ke").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/#newsletter");

        let page = body_text(get(&app, "/", Some(&cookie)).await).await;
        assert!(page.contains("Thanks for subscribing! Our newsletter will reach you at reader@mail.co.ke."));
    }

    #[tokio::test]
    async fn test_newsletter_invalid_email_rejected() {
        let app = create_test_app();
        let cookie = new_visitor(&app).await;

        let response = post_form(&app, "/forms/newsletter", &cookie, "email=reader-at-mail").await;
        assert_eq!(response.headers()[header::LOCATION], "/#newsletter");

        let page = body_text(get(&app, "/", Some(&cookie)).await).await;
        assert!(page.contains("flash-error\" role=\"status\">Enter a valid email address."));
    }

    #[tokio::test]
    async fn test_chat_form_records_transcript() {
        let app = create_test_app();
        let cookie = new_visitor(&app).await;

        let response = post_form(&app, "/chat", &cookie, "query=How+can+I+volunteer%3F").await;
        assert_eq!(response.headers()[header::LOCATION], "/#chatbot");

        let page = body_text(get(&app, "/", Some(&cookie)).await).await;
        assert!(page.contains("How can I volunteer?"));
        assert!(page.contains("<details class=\"chatbot\" id=\"chatbot\" open>"));
    }

    #[tokio::test]
    async fn test_chat_api_matches() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"query": "WHAT IS SafeSpace Organisation?"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["matched"], true);
        assert!(body["answer"].as_str().unwrap().contains("founded"));
    }

    #[tokio::test]
    async fn test_chat_api_default_and_blank() {
        let app = create_test_app();

        let ask = |query: &'static str| {
            app.clone().oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(format!(r#"{{"query": "{}"}}"#, query)))
                    .unwrap(),
            )
        };

        let response = ask("banana").await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["matched"], false);
        assert!(body.get("pattern").is_none());

        let response = ask("   ").await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_cors_layer_skips_invalid_origins() {
        // Construction must not panic on bad input
        let _ = cors_layer(&["https://safespace.example".to_string(), "bad\norigin".to_string()]);
        let _ = cors_layer(&[]);
    }
}
