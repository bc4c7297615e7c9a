use crate::constants::NO_TRAFFIC_DATA;
use crate::models::OptimizeResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Computation(String),

    #[error("No traffic data available")]
    NoTrafficData,
}

// Errors are reported in-band: the status is always 200 and the body carries
// `{"error": ...}` so the browser client can branch on body shape alone.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidRequest(ref e) => {
                tracing::info!("Rejected optimize request: {}", e);
            }
            AppError::Upstream(ref e) => {
                tracing::error!("Routing provider unavailable: {}", e);
            }
            AppError::Computation(ref e) => {
                tracing::warn!("Route computation failed: {}", e);
            }
            AppError::NoTrafficData => {
                tracing::info!("{}", NO_TRAFFIC_DATA);
            }
        }

        let body = Json(OptimizeResponse::Error {
            error: self.to_string(),
        });

        (StatusCode::OK, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_errors_render_in_band_with_ok_status() {
        let response = AppError::InvalidRequest("missing field `fuel_efficiency`".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json, json!({"error": "missing field `fuel_efficiency`"}));
    }

    #[tokio::test]
    async fn test_no_traffic_data_message() {
        let json = body_json(AppError::NoTrafficData.into_response()).await;
        assert_eq!(json["error"], "No traffic data available");
        assert_eq!(json.as_object().unwrap().len(), 1);
    }
}
