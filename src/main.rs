use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DB_HOST, REDIS_HOST, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = dockauto_demo::config::config();
    tracing::info!("Starting dockauto demo in {:?} mode", config.environment);

    // Report the contract up front; the server still starts so /contract can be inspected
    match dockauto_demo::contract::load_profile(&config.contract) {
        Ok(profile) => {
            let report = dockauto_demo::contract::checker_for(
                &config.contract,
                dockauto_demo::contract::EnvSnapshot::from_process(),
            )
            .run(&profile);
            tracing::info!("Environment contract '{}': {}", report.profile(), report.status());
        }
        Err(e) => tracing::error!("Failed to load environment contract: {}", e),
    }

    dockauto_demo::server::serve(config).await
}
