//! `hydromap`: development server for the browser bundle.
//!
//! Serves the built `client` assets from a dist directory and answers every
//! unknown path with `index.html`, so deep links like `/admin` reach the
//! in-browser router. The monitoring API itself runs elsewhere.

mod config;
mod routes;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    if !config.dist_dir.join("index.html").is_file() {
        tracing::warn!(dist = %config.dist_dir.display(), "index.html not found; build the client bundle first");
    }

    let app = routes::app(&config.dist_dir);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, dist = %config.dist_dir.display(), "hydromap dev server listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
