//! Shared utilities for integration testing.

use axum_server::Handle;
use tokio::task::JoinHandle;

use subredirect::config::{ServerConfig, SslConfig, TimeoutConfig};
use subredirect::lifecycle::startup::{self, StartupError};
use subredirect::mapping::{MappingSnapshot, UserMapping};
use subredirect::routing::PathIndex;

/// Build a server config listening on loopback.
pub fn config(port: u16, redirect_domain: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port,
        redirect_domain: redirect_domain.to_string(),
        ssl: SslConfig::default(),
        timeouts: TimeoutConfig::default(),
    }
}

/// Build a mapping record.
pub fn mapping(user_id: i64, old: &str, new: &str) -> UserMapping {
    UserMapping {
        user_id,
        old_subscription_url: old.to_string(),
        new_subscription_url: new.to_string(),
        display_name: None,
        matched_by: None,
    }
}

/// Build a snapshot from records, keyed by user id.
pub fn snapshot(records: Vec<UserMapping>) -> MappingSnapshot {
    MappingSnapshot {
        mappings: records
            .into_iter()
            .map(|m| (m.user_id.to_string(), m))
            .collect(),
        ..Default::default()
    }
}

/// Start a redirect server and wait until it is accepting connections.
///
/// Returns the shutdown handle and the server task.
pub async fn start_server(
    config: ServerConfig,
    snapshot: &MappingSnapshot,
) -> (Handle, JoinHandle<Result<(), StartupError>>) {
    let index = PathIndex::build(snapshot);
    let handle = Handle::new();
    let server_handle = handle.clone();

    let server = tokio::spawn(async move { startup::serve(config, index, server_handle).await });

    handle.listening().await;

    (handle, server)
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
