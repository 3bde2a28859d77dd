mod face;
mod text;
mod types;

pub use face::{DeepFaceClient, FaceAnalyzer};
pub use text::{HuggingFaceClassifier, TextClassifier};
pub use types::*;

use crate::Error;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct BackendError {
    error: String,
}

/// Turns a non-success backend reply into a model error, preferring the
/// backend's own `error` message over the raw body.
pub(crate) async fn backend_failure(response: reqwest::Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if let Ok(parsed) = serde_json::from_str::<BackendError>(&body) {
        return Error::model(parsed.error);
    }

    if body.trim().is_empty() {
        Error::model(format!("model backend returned {}", status))
    } else {
        Error::model(body)
    }
}
