use bureau_ingest::configs::ServiceConfig;
use bureau_ingest::runtime::logging::init_tracing;
use bureau_ingest::runtime::store::MemoryReportStore;
use bureau_ingest::server::build_router;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match ServiceConfig::load_default() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("[Reports] {}", err);
            std::process::exit(1);
        }
    };

    let app = build_router(Arc::new(MemoryReportStore::new()), &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {e}", config.bind_addr));

    tracing::info!("[Reports] Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("[Reports] Failed to listen for shutdown signal: {}", err);
    }
    tracing::info!("[Reports] Shutting down.");
}
