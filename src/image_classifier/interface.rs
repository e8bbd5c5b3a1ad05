use image::DynamicImage;
use thiserror::Error;

#[cfg(test)]
pub const WASTE_LABELS: [&str; 6] = ["cardboard", "glass", "metal", "paper", "plastic", "trash"];

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    /// Top-class probability as a percentage in [0, 100].
    pub confidence: f32,
}

impl Classification {
    pub fn confidence_display(&self) -> String {
        format!("{:.2}%", self.confidence)
    }
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to load model from {path}: {reason}")]
    Load { path: String, reason: String },
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("model produced no scores")]
    EmptyOutput,
    #[error("model produced {scores} scores for {labels} labels")]
    LabelMismatch { scores: usize, labels: usize },
}

pub trait ImageClassifier: Send + Sync {
    fn classify(&self, image: &DynamicImage) -> Result<Classification, ClassifierError>;
    fn labels(&self) -> Vec<String>;
}

/// Picks the highest scoring class. Ties go to the lowest index.
pub fn top_classification(
    probabilities: &[f32],
    labels: &[String],
) -> Result<Classification, ClassifierError> {
    if probabilities.is_empty() {
        return Err(ClassifierError::EmptyOutput);
    }

    if probabilities.len() != labels.len() {
        return Err(ClassifierError::LabelMismatch {
            scores: probabilities.len(),
            labels: labels.len(),
        });
    }

    let mut best = 0;
    for (index, probability) in probabilities.iter().enumerate() {
        if *probability > probabilities[best] || probabilities[best].is_nan() {
            best = index;
        }
    }

    let probability = probabilities[best];
    let confidence = if probability.is_finite() {
        (probability * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    Ok(Classification {
        label: labels[best].clone(),
        confidence,
    })
}

pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|logit| (logit - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.iter().map(|exp| exp / sum).collect()
}
