#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use axum::http::{Method, StatusCode};
use futures_util::future::join_all;

use common::{app, request, sample, send};

#[tokio::test]
async fn metrics_endpoint_uses_exposition_content_type() {
    let (_, app) = app();
    let (status, headers, body) = send(&app, request(Method::GET, "/metrics", None, "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-type").unwrap().to_str().unwrap(),
        "text/plain; version=0.0.4"
    );
    assert!(body.contains("# HELP api_requests_total Total API requests"));
    assert!(body.contains("# TYPE api_requests_total counter"));
    assert!(body.contains("process_start_time_seconds "));
    assert_eq!(sample(&body, "POST"), None);
}

#[tokio::test]
async fn counts_per_method_are_independent() {
    let (_, app) = app();
    for _ in 0..5 {
        send(&app, request(Method::POST, "/api", None, "x")).await;
    }
    for _ in 0..2 {
        send(&app, request(Method::GET, "/api", None, "")).await;
    }
    send(&app, request(Method::DELETE, "/api", None, "")).await;

    let (_, _, body) = send(&app, request(Method::GET, "/metrics", None, "")).await;
    assert!(body.contains("api_requests_total{method=\"POST\",endpoint=\"/api\"} 5\n"));
    assert_eq!(sample(&body, "POST"), Some(5));
    assert_eq!(sample(&body, "GET"), Some(2));
    assert_eq!(sample(&body, "DELETE"), Some(1));
    assert_eq!(sample(&body, "PUT"), None);
}

#[tokio::test]
async fn scraping_does_not_count() {
    let (state, app) = app();
    send(&app, request(Method::GET, "/metrics", None, "")).await;
    send(&app, request(Method::GET, "/metrics", None, "")).await;
    assert_eq!(state.metrics().requests("GET", "/metrics"), 0);
    assert_eq!(state.metrics().requests("GET", "/api"), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_posts_lose_no_increments() {
    const N: u64 = 128;
    let (state, app) = app();

    let tasks = (0..N).map(|i| {
        let app = app.clone();
        tokio::spawn(async move {
            let body = format!(r#"{{"n":{i}}}"#);
            let (status, _, _) =
                send(&app, request(Method::POST, "/api", Some("application/json"), &body)).await;
            status
        })
    });
    for status in join_all(tasks).await {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    assert_eq!(state.metrics().requests("POST", "/api"), N);
    let (_, _, body) = send(&app, request(Method::GET, "/metrics", None, "")).await;
    assert_eq!(sample(&body, "POST"), Some(N));
}
