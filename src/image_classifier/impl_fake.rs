use crate::image_classifier::interface::{
    Classification, ClassifierError, ImageClassifier, WASTE_LABELS,
};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    fixed: Option<Classification>,
}

impl ImageClassifierFake {
    /// Answers with a random waste label and confidence.
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            fixed: None,
        }
    }

    pub fn with_result(logger: Arc<dyn Logger + Send + Sync>, label: &str, confidence: f32) -> Self {
        Self {
            fixed: Some(Classification {
                label: label.to_string(),
                confidence,
            }),
            ..Self::new(logger)
        }
    }

    fn random(&self) -> Result<Classification, ClassifierError> {
        let mut rng = rand::rng();

        let index_dist = Uniform::new(0, WASTE_LABELS.len())
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let confidence_dist = Uniform::new_inclusive(0.0f32, 100.0)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        Ok(Classification {
            label: WASTE_LABELS[index_dist.sample(&mut rng)].to_string(),
            confidence: confidence_dist.sample(&mut rng),
        })
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, image: &DynamicImage) -> Result<Classification, ClassifierError> {
        let _ = self.logger.info(&format!(
            "Classifying {}x{} image with fake classifier...",
            image.width(),
            image.height()
        ));

        match &self.fixed {
            Some(classification) => Ok(classification.clone()),
            None => self.random(),
        }
    }

    fn labels(&self) -> Vec<String> {
        match &self.fixed {
            Some(classification) if !WASTE_LABELS.contains(&classification.label.as_str()) => {
                vec![classification.label.clone()]
            }
            _ => WASTE_LABELS.iter().map(|label| label.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;

    fn logger() -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()))
    }

    #[test]
    fn test_random_label_is_from_label_set() {
        let classifier = ImageClassifierFake::new(logger());
        let image = DynamicImage::new_rgb8(8, 8);

        for _ in 0..20 {
            let result = classifier.classify(&image).unwrap();
            assert!(classifier.labels().contains(&result.label));
            assert!((0.0..=100.0).contains(&result.confidence));
        }
    }

    #[test]
    fn test_fixed_result() {
        let classifier = ImageClassifierFake::with_result(logger(), "plastic", 92.31);

        let result = classifier.classify(&DynamicImage::new_rgb8(8, 8)).unwrap();

        assert_eq!(result.label, "plastic");
        assert_eq!(result.confidence, 92.31);
    }
}
