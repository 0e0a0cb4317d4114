//! # homehubd — home-hub daemon
//!
//! Composition root that wires the store, service, and HTTP adapter
//! together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file + env var overrides)
//! - Initialize structured logging
//! - Construct the in-memory state store (adapter)
//! - Construct the hub service, injecting the store via the port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use homehub_adapter_http_axum::state::AppState;
use homehub_adapter_store_memory::InMemoryStateStore;
use homehub_app::messages::{Locale, MessageCatalog};
use homehub_app::services::hub_service::HomeHubService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let store = InMemoryStateStore::new();
    let service = HomeHubService::new(
        store,
        MessageCatalog::new(),
        Locale::new(config.messages.locale.clone()),
    );
    let state = AppState::new(service);
    let app = homehub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, locale = %config.messages.locale, "homehubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("homehubd stopped");
    Ok(())
}

/// Resolve when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
