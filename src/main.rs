use axum::Router;
use ecoroute::config::Config;
use ecoroute::services::route_enricher::RouteEnricher;
use ecoroute::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecoroute=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting EcoRoute API server");
    tracing::info!(
        weather = %config.endpoints.open_weather,
        geocode = %config.endpoints.google_geocode,
        routing = %config.endpoints.tomtom_routing,
        "Configuration loaded successfully"
    );

    // Create application state
    let state = Arc::new(AppState {
        route_enricher: RouteEnricher::from_config(&config),
        api_keys: config.api_keys.clone(),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .merge(ecoroute::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
