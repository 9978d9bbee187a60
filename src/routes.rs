//! Router assembly for the dev server.

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Static bundle at `/`, `index.html` for any path that is not a file.
pub fn app(dist_dir: &Path) -> Router {
    let index = ServeFile::new(dist_dir.join("index.html"));
    let assets = ServeDir::new(dist_dir).append_index_html_on_directories(true).fallback(index);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
