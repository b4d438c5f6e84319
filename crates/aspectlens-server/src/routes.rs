//! HTTP request handlers

use crate::state::AppState;
use aspectlens_core::clean_text;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub text: String,
}

/// Analyze one review text.
///
/// The model prediction runs on the normalized text; the heuristic engine
/// sees the raw text because punctuation drives clause segmentation.
pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> impl IntoResponse {
    let Some(model) = state.model.clone() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "error": "Model not loaded" })),
        )
            .into_response();
    };

    if req.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "No text provided" })),
        )
            .into_response();
    }

    let cleaned = clean_text(&req.text);
    let model_sentiment = match model.predict(&cleaned).await {
        Ok(prediction) => {
            tracing::debug!(
                model = model.name(),
                label = %prediction.label,
                score = prediction.score,
                latency_us = prediction.latency_us,
                "model prediction"
            );
            prediction.label
        }
        Err(e) => {
            tracing::error!(error = %e, "model prediction failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Prediction failed" })),
            )
                .into_response();
        }
    };

    let analysis = state.engine.analyze(&req.text, model_sentiment);
    Json(analysis).into_response()
}
