use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;
use crate::errors::QuipsterError;

impl IntoResponse for QuipsterError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            QuipsterError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            QuipsterError::Authentication(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            QuipsterError::NotFound(msg) => (StatusCode::NOT_FOUND, format!("{} not found", msg)),
            QuipsterError::AllCandidatesExhausted(failures) => {
                error!(
                    failures = ?failures.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
                    "Joke generation failed"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate joke".to_string())
            }
            other => {
                error!(error = %other, kind = other.classify().error_type, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        (status, Json(json!({"error": message}))).into_response()
    }
}

impl From<JsonRejection> for QuipsterError {
    fn from(rejection: JsonRejection) -> Self {
        QuipsterError::Validation(rejection.body_text())
    }
}
