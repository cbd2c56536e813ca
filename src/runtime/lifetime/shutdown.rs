use tokio::signal;
use tracing::warn;

/// 等待 SIGINT / SIGTERM，收到后触发优雅退出
pub async fn listen_for_shutdown() {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to listen for SIGTERM");

        tokio::select! {
            _ = signal::ctrl_c() => {
                warn!("SIGINT received, initiating graceful shutdown...");
            }
            _ = sigterm.recv() => {
                warn!("SIGTERM received, initiating graceful shutdown...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        warn!("Shutdown signal received, initiating graceful shutdown...");
    }
}
