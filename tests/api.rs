mod common;

use std::collections::HashMap;
use std::sync::Arc;
use axum::http::StatusCode;
use axum::body::Body;
use http_body_util::BodyExt;
use tower::ServiceExt;
use serde_json::{json, Value};
use quipster::api::{build_router, AppState};
use quipster::auth::StaticTokenVerifier;
use quipster::db::{Database, JokeStore};
use quipster::generation::JokeService;
use common::{generator, FailingStore, ScriptedProvider, Step};

const MISTRAL: &str = "mistralai/mistral-small-latest";
const LLAMA: &str = "meta-llama/llama-3.1-8b-instruct";

fn create_test_state(steps: Vec<Step>, store: Arc<dyn JokeStore>) -> AppState {
    let provider = ScriptedProvider::new(steps);
    let service = JokeService::new(generator(provider, &[(MISTRAL, 0.001), (LLAMA, 0.0002)]), store);
    let tokens = HashMap::from([
        ("alice-token".to_string(), "alice".to_string()),
        ("bob-token".to_string(), "bob".to_string()),
    ]);
    AppState {
        service: Arc::new(service),
        verifier: Arc::new(StaticTokenVerifier::new(tokens)),
    }
}

fn db_state(steps: Vec<Step>) -> AppState {
    create_test_state(steps, Arc::new(Database::in_memory().unwrap()))
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone())
}

fn make_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> axum::http::Request<Body> {
    let mut builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

async fn generate_as(state: &AppState, token: &str, topic: &str) -> Value {
    let req = make_request("POST", "/api/jokes/generate", Some(token), Some(json!({
        "topic": topic,
        "jokeType": "pun",
    })));
    let response = app(state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response_json(response).await
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = db_state(vec![]);
    let response = app(&state).oneshot(make_request("GET", "/api/health", None, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "quipster");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_models_lists_candidates_in_order() {
    let state = db_state(vec![]);
    let response = app(&state).oneshot(make_request("GET", "/api/models", None, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let models = body["models"].as_array().unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0]["model"], MISTRAL);
    assert_eq!(models[1]["model"], LLAMA);
}

#[tokio::test]
async fn test_generate_requires_authorization_header() {
    let state = db_state(vec![]);
    let req = make_request("POST", "/api/jokes/generate", None, Some(json!({"topic": "cats", "style": "pun"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response_json(response).await["error"], "Unauthorized");
}

#[tokio::test]
async fn test_generate_rejects_unknown_token() {
    let state = db_state(vec![]);
    let req = make_request("POST", "/api/jokes/generate", Some("nope"), Some(json!({"topic": "cats", "style": "pun"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response_json(response).await["error"], "Invalid token");
}

#[tokio::test]
async fn test_generate_and_save() {
    let state = db_state(vec![Step::Reply("I'm reading a book about anti-gravity. It's impossible to put down.", Some(42))]);

    let body = generate_as(&state, "alice-token", "gravity").await;

    assert_eq!(body["saved"], true);
    assert_eq!(body["model"], MISTRAL);
    assert_eq!(body["tokensUsed"], 42);
    assert!((body["costUsd"].as_f64().unwrap() - 0.000042).abs() < 1e-12);
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());
    assert!(body.get("warning").is_none());
}

#[tokio::test]
async fn test_generate_missing_topic_is_bad_request() {
    let state = db_state(vec![]);
    let req = make_request("POST", "/api/jokes/generate", Some("alice-token"), Some(json!({"style": "pun"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response_json(response).await["error"].as_str().unwrap().contains("Missing required fields"));
}

#[tokio::test]
async fn test_generate_unknown_style_is_bad_request() {
    let state = db_state(vec![]);
    let req = make_request("POST", "/api/jokes/generate", Some("alice-token"), Some(json!({"topic": "cats", "style": "limerick"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mistyped_body_is_json_bad_request() {
    let state = db_state(vec![]);
    let req = make_request("POST", "/api/jokes/generate", Some("alice-token"), Some(json!({"topic": 123, "style": "pun"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_unparseable_update_is_json_bad_request() {
    let state = db_state(vec![]);
    let req = axum::http::Request::builder()
        .method("PATCH")
        .uri("/api/jokes/some-id")
        .header("content-type", "application/json")
        .header("authorization", "Bearer alice-token")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_exhausted_candidates_hide_provider_detail() {
    let state = db_state(vec![
        Step::Fail(|| quipster::errors::QuipsterError::ProviderStatus { status: 503, message: "upstream secret".into() }),
        Step::Reply("", None),
    ]);
    let req = make_request("POST", "/api/jokes/generate", Some("alice-token"), Some(json!({"topic": "cats", "style": "pun"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Failed to generate joke");
    assert!(!body.to_string().contains("upstream secret"));
}

#[tokio::test]
async fn test_storage_failure_returns_unsaved_joke() {
    let state = create_test_state(vec![Step::Reply("Cats are purr-fect.", Some(7))], Arc::new(FailingStore));

    let body = generate_as(&state, "alice-token", "cats").await;

    assert_eq!(body["saved"], false);
    assert_eq!(body["text"], "Cats are purr-fect.");
    assert_eq!(body["warning"], "Joke generated but not saved to history");
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn test_history_is_scoped_to_user() {
    let state = db_state(vec![
        Step::Reply("first", Some(1)),
        Step::Reply("second", Some(1)),
        Step::Reply("bob's", Some(1)),
    ]);
    let first = generate_as(&state, "alice-token", "one").await;
    generate_as(&state, "alice-token", "two").await;
    generate_as(&state, "bob-token", "three").await;

    let response = app(&state).oneshot(make_request("GET", "/api/jokes", Some("alice-token"), None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["total"], 2);
    let jokes = body["jokes"].as_array().unwrap();
    assert_eq!(jokes[0]["content"], "second");
    assert_eq!(jokes[1]["content"], "first");

    let uri = format!("/api/jokes/{}", first["id"].as_str().unwrap());
    let response = app(&state).oneshot(make_request("GET", &uri, Some("bob-token"), None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app(&state).oneshot(make_request("GET", &uri, Some("alice-token"), None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["topic"], "one");
}

#[tokio::test]
async fn test_rate_and_delete_joke() {
    let state = db_state(vec![Step::Reply("ha", Some(1))]);
    let created = generate_as(&state, "alice-token", "cats").await;
    let uri = format!("/api/jokes/{}", created["id"].as_str().unwrap());

    let req = make_request("PATCH", &uri, Some("alice-token"), Some(json!({})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response_json(response).await["error"].as_str().unwrap().contains("Nothing to update"));

    let req = make_request("PATCH", &uri, Some("alice-token"), Some(json!({"userRating": 9})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let req = make_request("PATCH", &uri, Some("alice-token"), Some(json!({"userRating": 5, "favorited": true})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["userRating"], 5);
    assert_eq!(body["favorited"], true);

    let response = app(&state).oneshot(make_request("DELETE", &uri, Some("alice-token"), None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["deleted"], true);

    let response = app(&state).oneshot(make_request("DELETE", &uri, Some("alice-token"), None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
