use axum::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "quipster",
        "version": env!("CARGO_PKG_VERSION"),
        "build": format!("{} ({})", env!("QUIPSTER_GIT_HASH"), env!("QUIPSTER_BUILD_TIMESTAMP")),
    }))
}
