use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Report which provider credentials are configured
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    let keys = &state.api_keys;
    for (check, key) in [
        ("open_weather_key", &keys.open_weather),
        ("tomtom_key", &keys.tomtom),
        ("google_key", &keys.google),
    ] {
        if key.is_empty() {
            status["checks"][check] = json!("missing");
            status["status"] = json!("degraded");
        } else {
            status["checks"][check] = json!("configured");
        }
    }

    Json(status)
}
