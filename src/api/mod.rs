pub mod routes;
pub mod models;
pub mod errors;
pub mod auth;

use std::sync::Arc;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::auth::{create_verifier, TokenVerifier};
use crate::config::QuipsterConfig;
use crate::db::Database;
use crate::errors::QuipsterError;
use crate::generation::{build_generator, JokeService};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<JokeService>,
    pub verifier: Arc<dyn TokenVerifier>,
}

pub fn create_app_state(config: &QuipsterConfig, db_path: &str) -> Result<AppState, QuipsterError> {
    let db = Database::new(db_path)?;
    let generator = build_generator(config)?;
    Ok(AppState {
        service: Arc::new(JokeService::new(generator, Arc::new(db))),
        verifier: create_verifier(config)?,
    })
}

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/jokes/generate", post(routes::jokes::generate_joke))
        .route("/api/jokes", get(routes::jokes::list_jokes))
        .route(
            "/api/jokes/:id",
            get(routes::jokes::get_joke)
                .patch(routes::jokes::update_joke)
                .delete(routes::jokes::delete_joke),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_user));

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/models", get(routes::models::list_models))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
