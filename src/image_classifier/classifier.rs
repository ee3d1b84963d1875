use crate::image_classifier::engine::impl_tract::InferenceEngineTract;
use crate::image_classifier::engine::interface::InferenceEngine;
use crate::image_classifier::error::{InferenceError, ModelLoadError};
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::labels::LabelSet;
use crate::image_classifier::model_config::{ModelConfig, RGB_CHANNELS};
use crate::image_classifier::pixel_source::PixelSource;
use crate::image_classifier::preprocess::preprocess;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub enum ClassifierState<E> {
    Loaded(E),
    Released,
}

/// Resize, normalize, one forward pass, argmax.
pub struct Classifier<E: InferenceEngine> {
    state: ClassifierState<E>,
    labels: LabelSet,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Classifier<InferenceEngineTract> {
    pub fn load(
        config: &ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ModelLoadError> {
        let labels = LabelSet::new(config.labels.clone())?;
        let logger = logger.with_namespace("image_classifier");
        let engine =
            InferenceEngineTract::load(&config.model_path, config.input_shape, logger.clone())?;
        Self::new(engine, labels, logger)
    }
}

impl<E: InferenceEngine> Classifier<E> {
    pub fn new(
        engine: E,
        labels: LabelSet,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ModelLoadError> {
        let channels = engine.input_shape().channels;
        if channels != RGB_CHANNELS {
            return Err(ModelLoadError::UnsupportedChannels { channels });
        }

        if engine.output_len() != labels.len() {
            return Err(ModelLoadError::LabelMismatch {
                labels: labels.len(),
                outputs: engine.output_len(),
            });
        }

        Ok(Self {
            state: ClassifierState::Loaded(engine),
            labels,
            logger,
        })
    }
}

impl<E: InferenceEngine> ImageClassifier for Classifier<E> {
    fn classify(&mut self, image: &dyn PixelSource) -> Result<Classification, InferenceError> {
        let engine = match &mut self.state {
            ClassifierState::Loaded(engine) => engine,
            ClassifierState::Released => return Err(InferenceError::Released),
        };

        if image.width() == 0 || image.height() == 0 {
            return Err(InferenceError::EmptyImage {
                width: image.width(),
                height: image.height(),
            });
        }

        let input = preprocess(image, engine.input_shape());
        let scores = engine.run(&input)?;

        if scores.len() != self.labels.len() {
            return Err(InferenceError::OutputShape {
                expected: self.labels.len(),
                actual: scores.len(),
            });
        }

        let index = argmax(&scores)?;
        let label = self
            .labels
            .get(index)
            .ok_or(InferenceError::OutputShape {
                expected: self.labels.len(),
                actual: scores.len(),
            })?
            .to_string();

        let _ = self
            .logger
            .info(&format!("Classified as {} ({})", label, scores[index]));

        Ok(Classification {
            label,
            confidence: scores[index],
        })
    }

    fn release(&mut self) {
        if let ClassifierState::Loaded(engine) =
            std::mem::replace(&mut self.state, ClassifierState::Released)
        {
            drop(engine);
            let _ = self.logger.info("Released inference engine");
        }
    }

    fn is_loaded(&self) -> bool {
        matches!(self.state, ClassifierState::Loaded(_))
    }
}

/// Index of the largest score; the lowest index wins ties.
pub fn argmax(scores: &[f32]) -> Result<usize, InferenceError> {
    if scores.is_empty() {
        return Err(InferenceError::OutputShape {
            expected: 1,
            actual: 0,
        });
    }
    if let Some(index) = scores.iter().position(|s| s.is_nan()) {
        return Err(InferenceError::NanScore { index });
    }

    let mut best = 0;
    for (index, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = index;
        }
    }

    Ok(best)
}
