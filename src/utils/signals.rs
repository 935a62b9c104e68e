//! Signal handling for graceful shutdown

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::{info, warn};

/// Wait for shutdown signals (SIGTERM, SIGINT)
///
/// If the handler cannot be installed this never resolves and the process
/// falls back to the default signal disposition.
pub async fn shutdown_signal() {
    let mut signals = match Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ]) {
        Ok(signals) => signals,
        Err(e) => {
            warn!("Failed to create signal handler: {}", e);
            return std::future::pending().await;
        }
    };

    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
}
