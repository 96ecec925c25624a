//! Host for the CodePush account console.
//!
//! Server-renders the Leptos app from the `client` crate and serves the
//! compiled WASM/CSS bundle. The account API itself is a separate backend
//! that the browser calls directly.

#![recursion_limit = "256"]

mod config;
mod routes;

use config::{ConfigError, HostConfig};

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(ConfigError::Bind)?;

    tracing::info!(port = config.port, "codepush console listening");
    axum::serve(listener, app).await.map_err(ConfigError::Serve)
}
