use axum::{extract::State, Json};
use serde_json::{json, Value};
use crate::api::AppState;

/// The fallback chain in the order it is tried.
pub async fn list_models(State(state): State<AppState>) -> Json<Value> {
    let generator = state.service.generator();
    Json(json!({
        "provider": generator.provider_name(),
        "models": generator.candidates(),
    }))
}
