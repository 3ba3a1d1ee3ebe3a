use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /api/health
/// Liveness probe with service version and current time.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Panthiya Learning Platform API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Panthiya Learning Platform API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "specializations": "/api/specializations",
            "ai": "/api/ai",
            "users": "/api/users"
        }
    }))
}
