//! Subscription URL Redirect Server
//!
//! A stateless redirect service built with Tokio and Axum. It maps legacy
//! subscription URLs from a decommissioned panel to their new locations,
//! using a mapping snapshot produced by an external migration process.
//!
//! # Architecture Overview
//!
//! ```text
//! Startup (strictly sequential):
//!
//!   config.json ──▶ config loader ──┐
//!                                   ├──▶ path index ──▶ listener (HTTP/HTTPS)
//!   mapping.json ─▶ mapping loader ─┘    (immutable)
//!
//! Request time (fan-out, lock-free):
//!
//!   GET /sub/user/key ──▶ exact lookup in path index
//!                           ├─ hit  ──▶ 301 + Location: effective target
//!                           └─ miss ──▶ 404
//! ```
//!
//! The index is built once at startup and shared read-only across all
//! request handlers; rebuilding it requires a restart.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use subredirect::lifecycle::startup;

#[derive(Parser)]
#[command(name = "subredirect", version)]
#[command(about = "Redirects legacy subscription URLs to their new locations", long_about = None)]
struct Cli {
    /// Path to the server configuration file
    #[arg(short = 'c', long = "config", default_value = "config.json")]
    config: PathBuf,

    /// Path to the URL mapping file
    #[arg(short = 'm', long = "map", default_value = "subscription_url_mapping.json")]
    map: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "subredirect=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("subscription URL redirect server starting");

    if let Err(e) = startup::run(&cli.config, &cli.map).await {
        tracing::error!(error = %e, "startup failed");
        std::process::exit(1);
    }

    tracing::info!("shutdown complete");
}
