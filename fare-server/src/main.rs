use std::net::SocketAddr;

use tracing::info;

use fare_server::stations::{metro_manila_aliases, metro_manila_distances};
use fare_server::store::{FareStore, seed_tables};
use fare_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build the immutable station reference data
    let aliases = metro_manila_aliases();
    let distances = metro_manila_distances();

    // Seed the editable tables from the published presets
    let tables = seed_tables(&distances);
    info!(
        public_rows = tables.public_mode_fares.len(),
        fare_rules = tables.fare_rules.len(),
        "seeded fare tables"
    );
    let store = FareStore::new(tables);

    // Build app state and router
    let state = AppState::new(store, aliases, distances);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 8000));
    info!("Fare administration API listening on http://{addr}");
    println!("API Endpoints:");
    println!("  GET  /health                               - Health check");
    println!("  GET  /admin/fare-rates                     - Full fare-rates snapshot");
    println!("  PUT  /admin/fare-rates/public              - Replace public fare table");
    println!("  PUT  /admin/fare-rates/public-all          - Replace public table and fare rules");
    println!("  POST /admin/fare-rates/public-generate     - Generate road-transit preview");
    println!("  POST /admin/fare-rates/rail-generate       - Recompute a rail line's fare rules");
    println!("  PUT  /admin/fare-rates/private             - Replace private fare settings");
    println!("  GET/PUT /admin/fare-rates/private-vehicles - Vehicle fuel settings");
    println!("  GET/PUT /admin/fare-rates/private-fuel-prices - Fuel price options");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
