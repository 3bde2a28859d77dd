pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    model::{DeepFaceClient, HuggingFaceClassifier},
};
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route("/predict-text", post(handlers::predict_text))
        .route("/predict-image", post(handlers::predict_image))
        .route("/predict", post(handlers::legacy_predict))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let text_classifier = HuggingFaceClassifier::new(config.text_model.clone());
    info!("Text model ready at {}", text_classifier.endpoint());

    let face_analyzer = DeepFaceClient::new(config.face_model.clone());
    info!("Face model ready at {}", face_analyzer.endpoint());

    let scratch_dir = config.scratch.resolve_dir();
    tokio::fs::create_dir_all(&scratch_dir).await?;
    info!("Scratch images go to {}", scratch_dir.display());

    let app_state = AppState {
        text_classifier: Arc::new(text_classifier),
        face_analyzer: Arc::new(face_analyzer),
        scratch_dir: Arc::new(scratch_dir),
    };

    let app = router(app_state, config.server.body_limit_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
