use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Static liveness payload; always succeeds.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Meal Buddy API is running"
    }))
}
