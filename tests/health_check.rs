use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use pharmacist_service::startup::build_router;
use pharmacist_service::AppState;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok() {
    let app = build_router(AppState::new(None));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["service"], "pharmacist-service");
}

#[tokio::test]
async fn unknown_route_falls_through_to_static_serving() {
    let app = build_router(AppState::new(None));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/no-such-page")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key("x-request-id"));
}
