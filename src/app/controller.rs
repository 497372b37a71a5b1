use axum::Json;
use serde_json::{json, Value};

use super::util::time::current_time_in_secs_f64;

pub async fn get_root() -> Json<Value> {
    Json(json!({
        "message": "Blueprint3D API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/health",
    }))
}

pub async fn get_health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": current_time_in_secs_f64(),
    }))
}
