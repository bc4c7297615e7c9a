use crate::error::AppError;
use crate::models::{OptimizeRequest, OptimizeResponse};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// POST /optimize
/// Enrich up to three traffic-aware routes with weather, place names and emissions.
///
/// The body is parsed here rather than by the `Json` extractor so that a
/// malformed payload still answers with the `{"error": ...}` envelope.
pub async fn optimize_routes(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request = match OptimizeRequest::from_slice(&body) {
        Ok(request) => request,
        Err(e) => return AppError::InvalidRequest(e).into_response(),
    };

    tracing::info!(
        origin = %request.origin.to_lat_lng(),
        destination = %request.destination.to_lat_lng(),
        fuel_efficiency = request.fuel_efficiency,
        emission_factor = request.emission_factor,
        "Optimize request: {} -> {}",
        request.origin.to_lat_lng(),
        request.destination.to_lat_lng()
    );

    match state.route_enricher.optimize(&request).await {
        Ok(routes) => {
            tracing::info!("Optimize succeeded: {} routes returned", routes.len());
            Json(OptimizeResponse::Routes { routes }).into_response()
        }
        Err(e) => e.into_response(),
    }
}
