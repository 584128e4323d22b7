use axum::response::Json;
use serde::Serialize;

use crate::models::ApiStatus;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: i64,
}

// GET / - Liveness banner
pub async fn api_status() -> Json<ApiStatus> {
    Json(ApiStatus { api: "up".to_string() })
}

// GET /health - Process health with server time
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().timestamp(),
    })
}
