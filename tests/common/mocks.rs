use async_trait::async_trait;
use emotion_api::{
    Error, Result,
    model::{AnalyzeRequest, FaceAnalysis, FaceAnalyzer, Prediction, TextClassifier},
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock text classifier returning a fixed prediction list
#[derive(Debug, Default)]
pub struct MockTextClassifier {
    pub predictions: Vec<Prediction>,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockTextClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prediction(mut self, label: &str, score: f64) -> Self {
        self.predictions.push(Prediction {
            label: label.to_string(),
            score,
        });
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextClassifier for MockTextClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<Prediction>> {
        self.requests.lock().unwrap().push(text.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::model(error.clone()));
        }

        Ok(self.predictions.clone())
    }
}

/// Mock face analyzer.
///
/// Unless fixed results are configured, it reads the image file and treats its
/// contents as the dominant emotion label, so each caller can check that it was
/// handed its own file.
#[derive(Debug, Default)]
pub struct MockFaceAnalyzer {
    pub results: Option<Vec<FaceAnalysis>>,
    pub requests: Arc<Mutex<Vec<AnalyzeRequest>>>,
    pub error: Option<String>,
}

impl MockFaceAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(mut self, results: Vec<FaceAnalysis>) -> Self {
        self.results = Some(results);
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<AnalyzeRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FaceAnalyzer for MockFaceAnalyzer {
    async fn analyze(&self, request: AnalyzeRequest) -> Result<Vec<FaceAnalysis>> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(ref error) = self.error {
            return Err(Error::model(error.clone()));
        }

        if let Some(ref results) = self.results {
            return Ok(results.clone());
        }

        let label = tokio::fs::read_to_string(Path::new(&request.img_path)).await?;
        Ok(vec![face(&label, 87.654)])
    }
}

/// A single-face analysis where `label` dominates with `score` percent
pub fn face(label: &str, score: f64) -> FaceAnalysis {
    FaceAnalysis {
        dominant_emotion: label.to_string(),
        emotion: HashMap::from([
            (label.to_string(), score),
            ("neutral_rest".to_string(), 100.0 - score),
        ]),
    }
}
