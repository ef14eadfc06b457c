//! rsvp-gateway server entry point.
//!
//! Starts the Axum HTTP server with the reservation REST endpoints.

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use rsvp_gateway::api;
use rsvp_gateway::app_state::AppState;
use rsvp_gateway::config::ServerConfig;
use rsvp_gateway::persistence::ReservationStore;
use rsvp_gateway::service::ReservationService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env();
    let addr = config.listen_addr();
    tracing::info!(%addr, data_path = %config.data_path.display(), "starting rsvp-gateway");

    // Build persistence layer. A failed init is logged, not fatal:
    // requests then fail individually with store errors.
    let store = Arc::new(ReservationStore::new(&config.data_path));
    if let Err(e) = store.ensure_initialized().await {
        tracing::error!(detail = e.detail(), "failed to initialize data file");
    }

    // Build service layer and application state
    let app_state = AppState {
        reservation_service: Arc::new(ReservationService::new(store)),
    };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
