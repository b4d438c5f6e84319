//! Integration tests for the AspectLens HTTP boundary

use aspectlens_server::{build_app, AppState, ModelKind, ServerConfig};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

fn config(model: ModelKind) -> ServerConfig {
    ServerConfig {
        model,
        ..ServerConfig::default()
    }
}

fn predict_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = AppState::new(&config(ModelKind::Lexicon)).unwrap();
    let app = build_app(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_predict_rejects_empty_text() {
    let state = AppState::new(&config(ModelKind::Lexicon)).unwrap();
    let app = build_app(state);

    let response = app
        .oneshot(predict_request(r#"{"text": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "No text provided");
}

#[tokio::test]
async fn test_predict_without_model_is_unavailable() {
    let state = AppState::new(&config(ModelKind::Disabled)).unwrap();
    let app = build_app(state);

    let response = app
        .oneshot(predict_request(r#"{"text": "Great battery"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_predict_returns_full_analysis() {
    let state = AppState::new(&config(ModelKind::Lexicon)).unwrap();
    let app = build_app(state);

    let response = app
        .oneshot(predict_request(
            r#"{"text": "The battery life is amazing! I used it for two full days without charging."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    assert_eq!(body["sentiment"], "Positive");
    assert_eq!(body["heuristic_sentiment"], "Positive");
    assert_eq!(body["aspects"]["battery"], "Positive");
    // Every aspect in the fixed set appears exactly once.
    assert_eq!(body["aspects"].as_object().unwrap().len(), 9);
    assert_eq!(body["aspects"]["camera"], "Not Mentioned");
}

#[tokio::test]
async fn test_predict_mixed_review_is_neutral() {
    let state = AppState::new(&config(ModelKind::Lexicon)).unwrap();
    let app = build_app(state);

    let response = app
        .oneshot(predict_request(
            r#"{"text": "Good camera but overpriced. Sound quality could be better."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    // One positive aspect against two negative ones: the fusion policy
    // overrides whatever the model said.
    assert_eq!(body["sentiment"], "Neutral");
    assert_eq!(body["aspects"]["camera"], "Positive");
    assert_eq!(body["aspects"]["price"], "Negative");
    assert_eq!(body["aspects"]["sound"], "Negative");
}
