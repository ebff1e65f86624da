use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use roster::MemoryIndex;
use std::sync::Arc;
use tower::ServiceExt;

/// Router backed by an in-memory index, plus a handle on that index.
pub fn memory_app() -> (Router, Arc<MemoryIndex>) {
    let index = Arc::new(MemoryIndex::new());
    let state = roster_http::Services::new(index.clone()).app_state();
    (roster_http::router(state), index)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Body) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Status, content type and decoded JSON body.
#[allow(dead_code)]
pub async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, String, serde_json::Value) {
    let body = match body {
        Some(json) => Body::from(serde_json::to_vec(&json).unwrap()),
        None => Body::empty(),
    };
    into_parts(send(app, method, uri, body).await).await
}

pub async fn into_parts(response: Response<Body>) -> (StatusCode, String, serde_json::Value) {
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, content_type, json)
}
