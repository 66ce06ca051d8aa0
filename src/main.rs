use doclister::app::build_router;
use doclister::models::{AppConfig, AppState};
use doclister::storage::S3Lister;
use doclister::utils::initialize_logger;
use log::info;
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Precedence: optional TOML file (first argument), then .env, then the environment
    let config_path = env::args().nth(1);

    let config = AppConfig::load(config_path.as_deref()).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    if let Err(e) = initialize_logger(config.log_path.as_deref(), config.get_log_level()) {
        eprintln!("Failed to initialize logger: {e}");
        std::process::exit(1);
    }
    info!("Loaded configuration: {config:?}");

    let lister = S3Lister::from_config(&config);
    info!("Listing documents from bucket '{}'", lister.bucket());

    let state = Arc::new(AppState::new(
        Arc::new(lister),
        config.get_request_timeout(),
    ));
    let app = build_router(state);

    let listener =
        tokio::net::TcpListener::bind((config.get_bind_address(), config.get_port())).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received, draining connections");
    }
}
