#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use counters_server::{app_state::AppState, config::ServiceConfig, router};

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = router::build_router(AppState::new(ServiceConfig::default()));
    let (status, body) = call(&app, Method::GET, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn readyz_flips_when_draining() {
    let state = AppState::new(ServiceConfig::default());
    let app = router::build_router(state.clone());

    let (status, body) = call(&app, Method::GET, "/readyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ready");

    state.set_draining();
    let (status, body) = call(&app, Method::GET, "/readyz").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, "draining");
}

#[tokio::test]
async fn metrics_report_requests_and_live_counters() {
    let app = router::build_router(AppState::new(ServiceConfig::default()));
    call(&app, Method::POST, "/counters/a").await;
    call(&app, Method::POST, "/counters/a").await;
    call(&app, Method::PUT, "/counters/missing").await;

    let (status, body) = call(&app, Method::GET, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("counters_requests_total{op=\"create\",status=\"201\"} 1"));
    assert!(body.contains("counters_requests_total{op=\"create\",status=\"409\"} 1"));
    assert!(body.contains("counters_requests_total{op=\"update\",status=\"404\"} 1"));
    assert!(body.contains("counters_live 1"));
    assert!(body.contains("counters_draining 0"));
}
