//! HTTP server startup logic.

use std::net::{SocketAddr, TcpListener};

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the HTTP server on `0.0.0.0:<port>`.
///
/// This function blocks until the server shuts down. The listener is bound
/// before serving so that a port already in use (or a privileged port) is
/// reported as a fatal [`ServerError::Bind`], making the process exit
/// non-zero.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // Any failure while setting up the listener reports as a bind error
    let listener = TcpListener::bind(addr).map_err(|source| ServerError::Bind { addr, source })?;
    listener
        .set_nonblocking(true)
        .map_err(|source| ServerError::Bind { addr, source })?;
    let port = listener
        .local_addr()
        .map_err(|source| ServerError::Bind { addr, source })?
        .port();

    // Setup graceful shutdown
    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!("devops-demo service running on port {}", port);

    axum_server::from_tcp(listener)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
