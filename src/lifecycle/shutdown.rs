//! Graceful shutdown coordination.

use std::time::Duration;

use axum_server::Handle;

/// Bounded window for in-flight requests to complete after a shutdown
/// signal; remaining connections are force-closed when it expires.
pub const GRACE_PERIOD: Duration = Duration::from_secs(10);

/// Wait for a termination signal, then drain the server.
///
/// Spawned alongside the listener at startup; the server future itself
/// returns once the handle completes shutdown.
pub async fn watch_signals(handle: Handle) {
    wait_for_signal().await;
    tracing::info!("shutdown signal received, draining in-flight requests");
    drain(handle, GRACE_PERIOD).await;
}

/// Stop accepting connections and give in-flight requests up to `grace`
/// to complete.
pub async fn drain(handle: Handle, grace: Duration) {
    handle.graceful_shutdown(Some(grace));

    // Poll for stragglers so an overrun gets logged; the handle itself
    // force-closes at the deadline regardless.
    let mut elapsed = Duration::ZERO;
    let tick = Duration::from_secs(1);
    while elapsed < grace {
        if handle.connection_count() == 0 {
            return;
        }
        tokio::time::sleep(tick).await;
        elapsed += tick;
    }

    let remaining = handle.connection_count();
    if remaining > 0 {
        tracing::warn!(remaining, "grace period expired, forcing remaining connections closed");
    }
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {},
        _ = sigterm.recv() => {},
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
