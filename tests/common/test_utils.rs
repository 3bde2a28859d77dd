use super::mocks::{MockFaceAnalyzer, MockTextClassifier};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use emotion_api::{
    model::{FaceAnalyzer, TextClassifier},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

pub const TEST_BODY_LIMIT: usize = 1024 * 1024;

/// Build the router around the given mocks, with a fresh scratch directory
pub fn create_test_app(
    text_classifier: Arc<MockTextClassifier>,
    face_analyzer: Arc<MockFaceAnalyzer>,
) -> (Router, TempDir) {
    create_app(text_classifier, face_analyzer)
}

/// Build the router around any collaborators, with a fresh scratch directory
pub fn create_app(
    text_classifier: Arc<dyn TextClassifier>,
    face_analyzer: Arc<dyn FaceAnalyzer>,
) -> (Router, TempDir) {
    let scratch_dir = tempfile::tempdir().expect("Failed to create temp directory");

    let app_state = AppState {
        text_classifier,
        face_analyzer,
        scratch_dir: Arc::new(scratch_dir.path().to_path_buf()),
    };

    (server::router(app_state, TEST_BODY_LIMIT), scratch_dir)
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and return the status and raw body bytes
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

/// POST a JSON body and parse the JSON reply
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, bytes) = send(app, json_request(uri, &body)).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Number of entries left in the scratch directory
pub fn scratch_entries(dir: &TempDir) -> usize {
    std::fs::read_dir(dir.path()).unwrap().count()
}
