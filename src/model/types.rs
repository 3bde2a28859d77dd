use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};

/// One candidate label from the text classifier, `score` in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

/// Arguments for a face analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub img_path: String,
    pub actions: Vec<String>,
    pub enforce_detection: bool,
}

impl AnalyzeRequest {
    /// Emotion analysis only, without failing when no face is confidently detected.
    pub fn emotion_only(img_path: &Path) -> Self {
        Self {
            img_path: img_path.to_string_lossy().into_owned(),
            actions: vec!["emotion".to_string()],
            enforce_detection: false,
        }
    }
}

/// Emotion result for one detected face. Scores are percentages in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceAnalysis {
    pub dominant_emotion: String,
    pub emotion: HashMap<String, f64>,
}

impl FaceAnalysis {
    pub fn dominant_score(&self) -> Option<f64> {
        self.emotion.get(&self.dominant_emotion).copied()
    }
}
