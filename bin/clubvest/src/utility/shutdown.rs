use tokio::signal;
use tracing::info;

/// Resolves on Ctrl+C or SIGTERM; axum then stops accepting and drains
/// in-flight requests.
pub async fn shutdown_signal() {
    let interrupt = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {}
        _ = terminate => {}
    }

    info!("shutdown requested, draining in-flight requests");
}
