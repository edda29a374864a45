use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use serde_json::{json, Value};
use tracing::debug;
use crate::api::models::AuthUser;
use crate::api::AppState;

/// Resolves the bearer token to a user and attaches it as an [`AuthUser`]
/// extension for the handlers behind this layer.
pub async fn require_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let token = request.headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    let Some(token) = token else {
        return Err((StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))));
    };

    match state.verifier.verify(&token).await {
        Ok(user_id) => {
            request.extensions_mut().insert(AuthUser(user_id));
            Ok(next.run(request).await)
        }
        Err(e) => {
            debug!(verifier = state.verifier.verifier_name(), error = %e, "Rejected bearer token");
            Err((StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid token"}))))
        }
    }
}
