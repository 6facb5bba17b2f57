//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create Axum Router with the redirect handler on every path
//! - Wire up middleware (tracing, request timeout)
//! - Hold the immutable path index via injected state
//!
//! # Request lifecycle
//! Received → path taken verbatim → exact index lookup →
//! 301 with computed Location on a hit, 404 on a miss.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ServerConfig, TimeoutConfig};
use crate::routing::{resolve_redirect_target, PathIndex};

/// Application state injected into the redirect handler.
///
/// Everything here is immutable after startup; handlers share it
/// without locks.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<PathIndex>,
    pub redirect_domain: String,
    /// Whether this listener terminates TLS (drives scheme inference
    /// for the host fallback).
    pub tls_enabled: bool,
}

impl AppState {
    /// Derive handler state from the loaded configuration and the
    /// built index.
    pub fn new(index: Arc<PathIndex>, config: &ServerConfig) -> Self {
        Self {
            index,
            redirect_domain: config.redirect_domain.clone(),
            tls_enabled: config.ssl.enabled,
        }
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState, timeouts: &TimeoutConfig) -> Router {
    Router::new()
        .route("/{*path}", any(redirect_handler))
        .route("/", any(redirect_handler))
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(timeouts.request_secs)))
        .layer(TraceLayer::new_for_http())
}

/// Handles every inbound request: one lookup, one response.
async fn redirect_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let path = request.uri().path();

    let Some(new_url) = state.index.lookup(path) else {
        tracing::info!(path = %path, "no mapping for path");
        return (StatusCode::NOT_FOUND, "404 page not found").into_response();
    };

    let scheme = request_scheme(&state, &request);
    let host = request_host(&request);
    let target = resolve_redirect_target(new_url, &state.redirect_domain, scheme, host);

    tracing::info!(path = %path, target = %target, "redirecting");

    match HeaderValue::from_str(&target) {
        Ok(location) => {
            (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
        }
        Err(e) => {
            tracing::error!(path = %path, target = %target, error = %e, "redirect target is not a valid header value");
            (StatusCode::INTERNAL_SERVER_ERROR, "invalid redirect target").into_response()
        }
    }
}

/// Infer the inbound scheme: https when this listener terminates TLS or
/// a terminating proxy in front of us says so.
fn request_scheme(state: &AppState, request: &Request<Body>) -> &'static str {
    let forwarded_https = request
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("https"))
        .unwrap_or(false);

    if state.tls_enabled || forwarded_https {
        "https"
    } else {
        "http"
    }
}

/// The inbound Host header, falling back to the URI authority (HTTP/2).
fn request_host<'a>(request: &'a Request<Body>) -> &'a str {
    request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| request.uri().authority().map(|a| a.as_str()))
        .unwrap_or_default()
}
