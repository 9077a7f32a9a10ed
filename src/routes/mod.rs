//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! JSON API and the hero websocket live under `/api`; anything else falls
//! through to the static website directory. Unknown `/api` paths and
//! unsupported methods answer with JSON errors rather than the static 404.

pub mod api;
pub mod ws;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router: API + health probe + static site fallback.
pub fn app(state: AppState, website_dir: &Path) -> Router {
    let website = ServeDir::new(website_dir).append_index_html_on_directories(true);

    Router::new()
        .nest("/api", api::routes(state))
        .route("/healthz", get(healthz))
        .fallback_service(website)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
