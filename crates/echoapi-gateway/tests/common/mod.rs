//! In-process request helpers shared by HTTP tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use echoapi_gateway::{app_state::AppState, config::ServerConfig, router};

/// Fresh state + router pair; each test owns its own counters.
pub fn app() -> (AppState, Router) {
    let state = AppState::new(ServerConfig::default()).expect("default config is valid");
    let app = router::build_router(state.clone());
    (state, app)
}

pub fn request(method: Method, uri: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut b = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        b = b.header(CONTENT_TYPE, ct);
    }
    b.body(Body::from(body.to_string())).expect("valid request")
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let resp = app.clone().oneshot(req).await.expect("router is infallible");
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

/// Read one `api_requests_total` sample out of `/metrics` text.
pub fn sample(metrics: &str, method: &str) -> Option<u64> {
    let prefix = format!("api_requests_total{{method=\"{method}\",endpoint=\"/api\"}} ");
    metrics
        .lines()
        .find_map(|l| l.strip_prefix(prefix.as_str()))
        .and_then(|v| v.trim().parse().ok())
}
