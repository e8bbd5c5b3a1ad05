use crate::image_classifier::interface::Classification;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const HEADER: [&str; 4] = ["DateTime", "Location", "Waste Type", "Confidence"];

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged disposal. Never mutated after it is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisposalRecord {
    #[serde(rename = "DateTime")]
    pub timestamp: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Waste Type")]
    pub waste_type: String,
    /// Formatted as `NN.NN%`.
    #[serde(rename = "Confidence")]
    pub confidence: String,
}

impl DisposalRecord {
    pub fn new(at: NaiveDateTime, location: &str, classification: &Classification) -> Self {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            location: location.to_string(),
            waste_type: classification.label.clone(),
            confidence: classification.confidence_display(),
        }
    }
}
