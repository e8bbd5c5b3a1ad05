use crate::image_classifier::interface::{
    softmax, top_classification, Classification, ClassifierError, ImageClassifier,
};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::center_crop_to_tensor;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifierError> {
        let logger = logger.with_namespace("image_classifier").with_namespace("tract_onnx");

        let labels = read_labels(&config.labels_path)?;

        let (height, width) = config.input_shape;
        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    f32::fact([1, 3, height as usize, width as usize]).into(),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ClassifierError::Load {
                path: config.onnx_model_path.clone(),
                reason: e.to_string(),
            })?;

        let _ = logger.info(&format!(
            "Loaded {} with {} labels",
            config.onnx_model_path,
            labels.len()
        ));

        Ok(Self {
            model,
            labels,
            config,
            logger,
        })
    }
}

fn read_labels(path: &str) -> Result<Vec<String>, ClassifierError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ClassifierError::Load {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let labels: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if labels.is_empty() {
        return Err(ClassifierError::Load {
            path: path.to_string(),
            reason: "no labels".to_string(),
        });
    }

    Ok(labels)
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(&self, image: &DynamicImage) -> Result<Classification, ClassifierError> {
        let (height, width) = self.config.input_shape;
        let input = center_crop_to_tensor(image, width, height);

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or(ClassifierError::EmptyOutput)?
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let scores: Vec<f32> = output.iter().copied().collect();

        let probabilities = if self.config.output_is_logits {
            softmax(&scores)
        } else {
            scores
        };

        let classification = top_classification(&probabilities, &self.labels)?;

        let _ = self.logger.info(&format!("Classification: {:?}", classification));

        Ok(classification)
    }

    fn labels(&self) -> Vec<String> {
        self.labels.clone()
    }
}
