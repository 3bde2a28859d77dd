use super::{AnalyzeRequest, FaceAnalysis, backend_failure};
use crate::{Result, config::FaceModelConfig};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

#[async_trait]
pub trait FaceAnalyzer: Send + Sync {
    /// Analyzes the image stored at `request.img_path`, one entry per detected face.
    async fn analyze(&self, request: AnalyzeRequest) -> Result<Vec<FaceAnalysis>>;
}

/// Face analyzer served over the DeepFace REST protocol.
pub struct DeepFaceClient {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    results: Vec<FaceAnalysis>,
}

impl DeepFaceClient {
    pub fn new(config: FaceModelConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/analyze", config.base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FaceAnalyzer for DeepFaceClient {
    async fn analyze(&self, request: AnalyzeRequest) -> Result<Vec<FaceAnalysis>> {
        debug!(
            "Analyzing {} for {:?} via {}",
            request.img_path, request.actions, self.endpoint
        );

        let response = self.client.post(&self.endpoint).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(backend_failure(response).await);
        }

        let body = response.bytes().await?;
        let results = serde_json::from_slice::<AnalyzeResponse>(&body)?.results;

        debug!("Face model returned {} results", results.len());

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = DeepFaceClient::new(FaceModelConfig {
            base_url: "http://127.0.0.1:5005/".to_string(),
        });

        assert_eq!(client.endpoint(), "http://127.0.0.1:5005/analyze");
    }
}
