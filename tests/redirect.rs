//! End-to-end tests for the redirect service: real listener, real client.

use std::time::Duration;

use subredirect::config::load_server_config;
use subredirect::config::ConfigError;
use subredirect::lifecycle::startup::{self, StartupError};
use subredirect::routing::PathIndex;

mod common;
use common::{client, config, mapping, snapshot, start_server};

#[tokio::test]
async fn test_hit_redirects_with_request_host() {
    let snap = snapshot(vec![mapping(
        1,
        "https://old.example.com/sub/alice/k1",
        "/sub/alice/n1",
    )]);
    let (handle, _server) = start_server(config(28310, ""), &snap).await;

    let res = client()
        .get("http://127.0.0.1:28310/sub/alice/k1")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 301);
    assert_eq!(
        res.headers()["location"],
        "http://127.0.0.1:28310/sub/alice/n1"
    );

    handle.shutdown();
}

#[tokio::test]
async fn test_absolute_new_url_used_verbatim() {
    let snap = snapshot(vec![mapping(
        2,
        "/sub/bob/k2",
        "https://new.example.com/sub/bob/n2",
    )]);
    // A configured redirect domain must not override an absolute URL.
    let (handle, _server) = start_server(config(28311, "panel.example.com"), &snap).await;

    let res = client()
        .get("http://127.0.0.1:28311/sub/bob/k2")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 301);
    assert_eq!(res.headers()["location"], "https://new.example.com/sub/bob/n2");

    handle.shutdown();
}

#[tokio::test]
async fn test_redirect_domain_prefixes_relative_url() {
    let snap = snapshot(vec![mapping(3, "/sub/carol/k3", "/sub/carol/n3")]);
    let (handle, _server) = start_server(config(28312, "panel.example.com"), &snap).await;

    let res = client()
        .get("http://127.0.0.1:28312/sub/carol/k3")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 301);
    assert_eq!(
        res.headers()["location"],
        "https://panel.example.com/sub/carol/n3"
    );

    handle.shutdown();
}

#[tokio::test]
async fn test_forwarded_proto_drives_scheme() {
    let snap = snapshot(vec![mapping(4, "/sub/dave/k4", "/sub/dave/n4")]);
    let (handle, _server) = start_server(config(28313, ""), &snap).await;

    let res = client()
        .get("http://127.0.0.1:28313/sub/dave/k4")
        .header("X-Forwarded-Proto", "https")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 301);
    assert_eq!(
        res.headers()["location"],
        "https://127.0.0.1:28313/sub/dave/n4"
    );

    handle.shutdown();
}

#[tokio::test]
async fn test_miss_returns_404() {
    let snap = snapshot(vec![mapping(5, "/sub/erin/k5", "/sub/erin/n5")]);
    let (handle, _server) = start_server(config(28314, ""), &snap).await;

    let res = client()
        .get("http://127.0.0.1:28314/sub/unknown/key")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 404);

    // Exact match only: a trailing slash is a different key.
    let res = client()
        .get("http://127.0.0.1:28314/sub/erin/k5/")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 404);

    handle.shutdown();
}

#[tokio::test]
async fn test_any_method_is_served() {
    let snap = snapshot(vec![mapping(6, "/sub/frank/k6", "/sub/frank/n6")]);
    let (handle, _server) = start_server(config(28315, ""), &snap).await;

    let res = client()
        .post("http://127.0.0.1:28315/sub/frank/k6")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 301);

    let res = client()
        .post("http://127.0.0.1:28315/nope")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 404);

    handle.shutdown();
}

#[tokio::test]
async fn test_graceful_shutdown_drains_and_exits() {
    let snap = snapshot(vec![mapping(7, "/sub/grace/k7", "/sub/grace/n7")]);
    let (handle, server) = start_server(config(28316, ""), &snap).await;

    let res = client()
        .get("http://127.0.0.1:28316/sub/grace/k7")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 301);

    handle.graceful_shutdown(Some(Duration::from_secs(1)));

    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not stop within the grace period")
        .unwrap();
    assert!(result.is_ok());

    // The listener is gone; new connections must fail.
    assert!(client()
        .get("http://127.0.0.1:28316/sub/grace/k7")
        .send()
        .await
        .is_err());
}

#[tokio::test]
async fn test_startup_rejects_incomplete_tls_material() {
    let dir = std::env::temp_dir();
    let config_path = dir.join(format!("subredirect-tls-config-{}.json", std::process::id()));
    std::fs::write(
        &config_path,
        r#"{ "host": "127.0.0.1", "port": 28317, "ssl": { "enabled": true, "cert": "stub", "key": "" } }"#,
    )
    .unwrap();

    let err = load_server_config(&config_path).unwrap_err();
    std::fs::remove_file(&config_path).ok();

    assert!(matches!(err, ConfigError::IncompleteTls));
}

#[tokio::test]
async fn test_startup_rejects_malformed_pem() {
    let mut cfg = config(28318, "");
    cfg.ssl.enabled = true;
    cfg.ssl.cert = "not a certificate".to_string();
    cfg.ssl.key = "not a key".to_string();

    let snap = snapshot(vec![]);
    let index = PathIndex::build(&snap);

    let err = startup::serve(cfg, index, axum_server::Handle::new())
        .await
        .unwrap_err();
    assert!(matches!(err, StartupError::Tls(_)));
}
