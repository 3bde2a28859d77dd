use super::types::{EmotionResponse, ErrorResponse, ImageRequest, TextRequest};
use crate::{
    Error,
    model::{FaceAnalyzer, TextClassifier},
    predict,
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::{path::PathBuf, sync::Arc};
use tracing::{error, info, warn};

/// Collaborators built once at startup and shared read-only by every request.
#[derive(Clone)]
pub struct AppState {
    pub text_classifier: Arc<dyn TextClassifier>,
    pub face_analyzer: Arc<dyn FaceAnalyzer>,
    pub scratch_dir: Arc<PathBuf>,
}

pub type HandlerError = (StatusCode, Json<ErrorResponse>);

fn rejected(rejection: JsonRejection) -> HandlerError {
    warn!("Rejected request body: {}", rejection.body_text());
    (
        rejection.status(),
        Json(ErrorResponse {
            detail: rejection.body_text(),
        }),
    )
}

fn failed(e: Error) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: e.to_string(),
        }),
    )
}

pub async fn predict_text(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<EmotionResponse>, HandlerError> {
    let Json(request) = payload.map_err(rejected)?;
    info!(
        "Received text prediction request ({} chars)",
        request.text.chars().count()
    );

    match predict::predict_text(state.text_classifier.as_ref(), &request.text).await {
        Ok(emotion) => {
            info!(
                "Text emotion: {} ({:.2}%)",
                emotion.label, emotion.confidence
            );
            Ok(Json(emotion.into()))
        }
        Err(e) => {
            error!("Text prediction failed: {}", e);
            Err(failed(e))
        }
    }
}

pub async fn predict_image(
    State(state): State<AppState>,
    payload: Result<Json<ImageRequest>, JsonRejection>,
) -> Result<Json<EmotionResponse>, HandlerError> {
    let Json(request) = payload.map_err(rejected)?;
    info!(
        "Received image prediction request ({} base64 chars)",
        request.image.len()
    );

    match predict::predict_image(
        state.face_analyzer.as_ref(),
        &state.scratch_dir,
        &request.image,
    )
    .await
    {
        Ok(emotion) => {
            info!(
                "Face emotion: {} ({:.2}%)",
                emotion.label, emotion.confidence
            );
            Ok(Json(emotion.into()))
        }
        Err(e) => {
            error!("Image prediction failed: {}", e);
            Err(failed(e))
        }
    }
}

/// `/predict` kept for older clients; identical to `/predict-text`.
pub async fn legacy_predict(
    state: State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<EmotionResponse>, HandlerError> {
    predict_text(state, payload).await
}
