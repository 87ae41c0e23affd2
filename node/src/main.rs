// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use rolodex_core::StoreHandle;
use rolodex_node::config::NodeConfig;
use rolodex_node::server::{build_router, record_load, AppState};
use rolodex_node::telemetry::init_telemetry;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_telemetry();

    let mut cfg = NodeConfig::from_env();
    // Positional data file argument wins over the environment.
    if let Some(path) = std::env::args().nth(1) {
        cfg.data_path = path.into();
    }

    tracing::info!("Initializing Rolodex Node with config: {:?}", cfg);

    // A missing or malformed file leaves an empty store; the server still starts.
    let (handle, outcome) = StoreHandle::open(&cfg.data_path);
    record_load(&handle.snapshot(), &outcome);
    if !outcome.is_ok() {
        tracing::warn!(
            "Serving an empty store ({}). POST /api/refresh once {:?} is fixed.",
            outcome.label(),
            cfg.data_path
        );
    }

    let addr = cfg.bind_addr;
    let app = build_router(AppState::new(Arc::new(handle), cfg));

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Cannot bind {}: {}", addr, e);
        e
    })?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
