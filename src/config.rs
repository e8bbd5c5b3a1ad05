use crate::image_classifier::models::model_config::ModelConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Fixed pauses of the simulated bin sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActuationTimings {
    pub analyzing: Duration,
    pub activating: Duration,
    pub opened: Duration,
}

impl Default for ActuationTimings {
    fn default() -> Self {
        Self {
            analyzing: Duration::from_millis(1500),
            activating: Duration::from_secs(2),
            opened: Duration::from_secs(6),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub logger_timezone: chrono::FixedOffset,
    pub model: ModelConfig,
    pub history_path: PathBuf,
    pub timings: ActuationTimings,
    pub accepted_image_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_timezone: local_offset(),
            model: ModelConfig {
                onnx_model_path: "./models/waste_classifier.onnx".to_string(),
                labels_path: "./models/waste_classifier.labels".to_string(),
                input_shape: (224, 224),
                output_is_logits: false,
            },
            history_path: PathBuf::from("history.csv"),
            timings: ActuationTimings::default(),
            accepted_image_extensions: vec!["jpg".to_string(), "png".to_string(), "jpeg".to_string()],
        }
    }
}

fn local_offset() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
