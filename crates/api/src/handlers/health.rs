use axum::Json;
use serde_json::{json, Value};

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses((status = 200, description = "Service is up")),
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
