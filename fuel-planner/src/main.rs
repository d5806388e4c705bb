use std::error::Error;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fuel_planner::catalog::{SharedCatalog, StationIndex};
use fuel_planner::config::ServerConfig;
use fuel_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    // Load the station catalog (fail fast if the configured file is unreadable)
    let catalog = match &config.stations_path {
        Some(path) => SharedCatalog::load(path)?,
        None => {
            warn!("FUEL_STATIONS_PATH not set; serving with an empty catalog");
            SharedCatalog::new(StationIndex::default())
        }
    };

    // Spawn background task to refresh the catalog from disk
    if catalog.source().is_some() {
        let refresh = catalog.clone();
        let period = config.refresh_interval;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match refresh.reload().await {
                    Ok(Some(count)) => info!(stations = count, "refreshed fuel station catalog"),
                    Ok(None) => {}
                    Err(e) => error!(error = %e, "failed to refresh fuel station catalog"),
                }
            }
        });
    }

    info!(
        max_range_miles = config.vehicle.max_range_miles(),
        fuel_efficiency = config.vehicle.fuel_efficiency(),
        "vehicle configuration"
    );

    let state = AppState::new(catalog, config.vehicle.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "fuel planner listening");
    info!("  GET  /health            - Health check");
    info!("  POST /fuel/plan         - Plan fuel stops along a route");
    info!("  GET  /stations/nearest  - Nearest station to a point");

    axum::serve(listener, app).await?;
    Ok(())
}
