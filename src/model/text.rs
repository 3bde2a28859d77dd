use super::{Prediction, backend_failure};
use crate::{Result, config::TextModelConfig};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Classifies `text`, returning candidates ordered by descending score.
    async fn classify(&self, text: &str) -> Result<Vec<Prediction>>;
}

/// Text classifier served over the Hugging Face inference protocol.
pub struct HuggingFaceClassifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

// The hosted API wraps the candidates of a single input in an outer list,
// while local pipelines return them flat.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Batched(Vec<Vec<Prediction>>),
    Flat(Vec<Prediction>),
}

impl ClassifyResponse {
    fn into_predictions(self) -> Vec<Prediction> {
        let mut predictions = match self {
            Self::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Flat(predictions) => predictions,
        };
        predictions.sort_by(|a, b| b.score.total_cmp(&a.score));
        predictions
    }
}

impl HuggingFaceClassifier {
    pub fn new(config: TextModelConfig) -> Self {
        let endpoint = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.model.trim_start_matches('/')
        );

        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key: config.api_key.filter(|key| !key.is_empty()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextClassifier for HuggingFaceClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<Prediction>> {
        debug!("Classifying {} chars via {}", text.len(), self.endpoint);

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&ClassifyRequest { inputs: text });

        if let Some(ref api_key) = self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(backend_failure(response).await);
        }

        let body = response.bytes().await?;
        let predictions = serde_json::from_slice::<ClassifyResponse>(&body)?.into_predictions();

        debug!("Text model returned {} candidates", predictions.len());

        Ok(predictions)
    }
}
