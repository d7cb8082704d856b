//! Listener setup and the serve loop.

use tokio::net::TcpListener;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// # Errors
///
/// Returns `ServerError::Bind` if the address is malformed or already taken.
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.to_string(), source })
}

/// Serve `app` until the listener fails.
///
/// # Errors
///
/// Returns `ServerError::Serve` if the accept loop stops with an I/O error.
pub async fn serve(listener: TcpListener, app: axum::Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

#[cfg(test)]
#[path = "server_test.rs"]
mod tests;
