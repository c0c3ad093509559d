//! HTTP server initialization and runtime setup.
//!
//! Opens the data context, wires the repository into the router and runs the
//! Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::repositories::BlogRepository;
use crate::infrastructure::data_context::open_data_context;
use crate::infrastructure::persistence::ContextBlogRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Data context for the configured backend (applying migrations for PostgreSQL)
/// - Blog repository
/// - Axum HTTP server with graceful shutdown
///
/// The data context is closed once the server stops.
///
/// # Errors
///
/// Returns an error if:
/// - The data context cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let options = config.data_context_options()?;
    let backend = options.backend_name();

    let context = open_data_context(options).await?;
    tracing::info!(backend, "Data context ready");

    let repository: Arc<dyn BlogRepository> =
        Arc::new(ContextBlogRepository::new(Some(context.clone()))?);

    let state = AppState::new(repository, context.clone());
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let served = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    context.close().await;
    tracing::info!("Server stopped");

    served?;
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
