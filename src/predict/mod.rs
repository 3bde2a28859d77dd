mod format;
mod scratch;

pub use format::{capitalize, format_confidence, round2};
pub use scratch::ScratchImage;

use crate::{
    Error, Result,
    model::{AnalyzeRequest, FaceAnalyzer, TextClassifier},
};
use base64::{
    Engine as _, alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
};
use std::path::Path;
use tracing::debug;

/// Top emotion reported by a model: capitalized label and a percentage
/// rounded to two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct Emotion {
    pub label: String,
    pub confidence: f64,
}

impl Emotion {
    fn new(label: &str, confidence: f64) -> Self {
        Self {
            label: capitalize(label),
            confidence: round2(confidence),
        }
    }
}

pub async fn predict_text(classifier: &dyn TextClassifier, text: &str) -> Result<Emotion> {
    let top = classifier
        .classify(text)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| Error::model("text model returned no predictions"))?;

    debug!("Top text prediction: {} ({})", top.label, top.score);

    Ok(Emotion::new(&top.label, top.score * 100.0))
}

pub async fn predict_image(
    analyzer: &dyn FaceAnalyzer,
    scratch_dir: &Path,
    image: &str,
) -> Result<Emotion> {
    let bytes = decode_image(image)?;
    let scratch = ScratchImage::create(scratch_dir, &bytes).await?;

    let analysis = analyzer
        .analyze(AnalyzeRequest::emotion_only(scratch.path()))
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| Error::model("face model returned no results"))?;

    let score = analysis.dominant_score().ok_or_else(|| {
        Error::model(format!(
            "face model reported no score for dominant emotion '{}'",
            analysis.dominant_emotion
        ))
    })?;

    debug!(
        "Dominant face emotion: {} ({})",
        analysis.dominant_emotion, score
    );

    scratch.remove().await?;

    Ok(Emotion::new(&analysis.dominant_emotion, score))
}

// Padded standard alphabet; stray bits in the final symbol are tolerated.
const IMAGE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decodes padded base64, ignoring ASCII whitespace such as line breaks.
pub fn decode_image(image: &str) -> Result<Vec<u8>> {
    let compact: String = image.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(IMAGE_ENGINE.decode(compact)?)
}
