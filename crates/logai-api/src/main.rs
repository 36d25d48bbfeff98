use logai_api::build_router;
use logai_api::config::ApiConfig;
use logai_api::state::AppState;
use logai_core::MockLogStore;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    //logging setup
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ApiConfig::from_env()?;

    // Generate mock logs once, they stay fixed for the process lifetime
    info!("Generating mock logs...");
    let store = match config.seed {
        Some(seed) => MockLogStore::with_seed(seed),
        None => MockLogStore::generate(),
    };
    info!(records = store.len(), seed = ?config.seed, "Mock log store ready");

    let state = Arc::new(AppState::new(store));
    let app = build_router(state);

    info!("CORS is fully permissive, do not expose this server publicly");

    // Server start
    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
