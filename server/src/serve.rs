use std::{io, net::SocketAddr};

use axum::Router;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

use crate::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("HTTP server terminated unexpectedly")]
    Serve(#[source] io::Error),
}

/// Binds the configured address and serves `app` until Ctrl+C or SIGTERM.
pub async fn serve(config: &ServerConfig, app: Router) -> Result<(), ServeError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    serve_on(listener, app, shutdown_signal()).await
}

/// Serves `app` on an already bound listener.
///
/// Once `shutdown` resolves the listener stops accepting and in-flight
/// requests are allowed to finish.
pub async fn serve_on<F>(
    listener: TcpListener, app: Router, shutdown: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().map_err(ServeError::Serve)?;
    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServeError::Serve)?;

    info!("Server on {} shut down gracefully", addr);
    Ok(())
}

/// Resolves on the first Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("🛑 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
