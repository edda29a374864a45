use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde_json::{json, Value};
use crate::api::models::{ApiJson, AuthUser, ListQuery};
use crate::api::AppState;
use crate::errors::QuipsterError;
use crate::generation::JokeRequest;
use crate::models::JokeUpdate;

pub async fn generate_joke(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    ApiJson(req): ApiJson<JokeRequest>,
) -> Result<Json<Value>, QuipsterError> {
    let outcome = state.service.generate_for_user(&user, req).await?;
    Ok(Json(serde_json::to_value(outcome)?))
}

pub async fn list_jokes(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, QuipsterError> {
    let page = state.service.list_jokes(&user, query.limit(), query.offset())?;
    Ok(Json(serde_json::to_value(page)?))
}

pub async fn get_joke(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, QuipsterError> {
    let joke = state.service.get_joke(&user, &id)?;
    Ok(Json(serde_json::to_value(joke)?))
}

pub async fn update_joke(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<JokeUpdate>,
) -> Result<Json<Value>, QuipsterError> {
    let joke = state.service.update_joke(&user, &id, &update)?;
    Ok(Json(serde_json::to_value(joke)?))
}

pub async fn delete_joke(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, QuipsterError> {
    state.service.delete_joke(&user, &id)?;
    Ok(Json(json!({"deleted": true})))
}
