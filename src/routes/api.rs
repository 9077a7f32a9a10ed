//! Portfolio JSON API.
//!
//! Placeholder endpoints returning static data. The contact form is
//! acknowledged and echoed back; it is not validated, stored, or forwarded.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use super::ws;
use crate::content::{self, Contact, Project};
use crate::sequencer::SequencerConfig;
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

/// API failures. `Display` is the exact `error` string sent to clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Endpoint not found")]
    NotFound,

    #[error("POST endpoint not found")]
    PostNotFound,

    #[error("{0} method not implemented")]
    NotImplemented(Method),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request")]
    InvalidRequest,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::PostNotFound => StatusCode::NOT_FOUND,
            Self::NotImplemented(_) | Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

// =============================================================================
// ROUTER
// =============================================================================

/// Routes mounted under `/api`.
pub fn routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health).fallback(unmatched))
        .route("/contact", get(contact).fallback(unmatched))
        .route("/projects", get(projects).fallback(unmatched))
        .route("/contact-form", post(contact_form).fallback(unmatched))
        .route("/hero", get(hero_config).fallback(unmatched))
        .route("/hero/ws", get(ws::handle_ws).fallback(unmatched))
        .fallback(unmatched)
        .layer(cors)
        .with_state(state)
}

/// Fallback for unknown paths and unsupported methods on known paths.
pub async fn unmatched(method: Method) -> ApiError {
    match method {
        Method::GET | Method::HEAD => ApiError::NotFound,
        Method::POST => ApiError::PostNotFound,
        Method::PUT | Method::DELETE => ApiError::NotImplemented(method),
        _ => ApiError::MethodNotAllowed,
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
}

/// `GET /api/health`
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok", message: "Portfolio API is running" })
}

/// `GET /api/contact`
pub async fn contact() -> Json<Contact> {
    Json(content::CONTACT)
}

/// `GET /api/projects`
pub async fn projects() -> Json<&'static [Project]> {
    Json(content::PROJECTS)
}

#[derive(Debug, Serialize)]
pub struct ContactFormAck {
    pub message: &'static str,
    pub received: serde_json::Value,
}

/// `POST /api/contact-form` — acknowledge and echo any JSON body.
///
/// Content type is not checked; only the body must parse as JSON.
pub async fn contact_form(body: Bytes) -> Result<Json<ContactFormAck>, ApiError> {
    let received: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, bytes = body.len(), "contact form: invalid JSON body");
        ApiError::InvalidRequest
    })?;
    info!(bytes = body.len(), "contact form received");
    Ok(Json(ContactFormAck { message: "Contact form functionality coming soon", received }))
}

/// Hero animation settings, for views that render their own copy.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct HeroConfig {
    pub phrases: Vec<String>,
    pub typing_ms: u64,
    pub erasing_ms: u64,
    pub hold_ms: u64,
    pub cursor_blink_ms: u64,
    pub fix_articles: bool,
}

impl From<&SequencerConfig> for HeroConfig {
    fn from(config: &SequencerConfig) -> Self {
        let millis = |d: std::time::Duration| u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        Self {
            phrases: config.phrases.iter().map(String::from).collect(),
            typing_ms: millis(config.typing_interval),
            erasing_ms: millis(config.erasing_interval),
            hold_ms: millis(config.hold),
            cursor_blink_ms: millis(config.cursor_blink),
            fix_articles: config.fix_articles,
        }
    }
}

/// `GET /api/hero`
pub async fn hero_config(State(state): State<AppState>) -> Json<HeroConfig> {
    Json(HeroConfig::from(state.hero.as_ref()))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
