use crate::predict::{Emotion, format_confidence};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    /// Base64-encoded image bytes.
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResponse {
    pub emotion: String,
    pub confidence: String,
}

impl From<Emotion> for EmotionResponse {
    fn from(emotion: Emotion) -> Self {
        Self {
            confidence: format_confidence(emotion.confidence),
            emotion: emotion.label,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
