use crate::image_classifier::engine::interface::InferenceEngine;
use crate::image_classifier::error::InferenceError;
use crate::image_classifier::model_config::InputShape;
use std::sync::{Arc, Mutex};

/// Answers every forward pass with the same scores.
pub struct InferenceEngineFake {
    input_shape: InputShape,
    scores: Vec<f32>,
    last_input: Arc<Mutex<Option<Vec<f32>>>>,
}

impl InferenceEngineFake {
    pub fn new(input_shape: InputShape, scores: Vec<f32>) -> Self {
        Self {
            input_shape,
            scores,
            last_input: Arc::new(Mutex::new(None)),
        }
    }

    /// Handle onto the most recent input tensor, still readable after the
    /// engine has been moved into a classifier.
    #[cfg(test)]
    pub fn last_input(&self) -> Arc<Mutex<Option<Vec<f32>>>> {
        self.last_input.clone()
    }
}

impl InferenceEngine for InferenceEngineFake {
    fn input_shape(&self) -> InputShape {
        self.input_shape
    }

    fn output_len(&self) -> usize {
        self.scores.len()
    }

    fn run(&mut self, input: &[f32]) -> Result<Vec<f32>, InferenceError> {
        let expected = self.input_shape.len();
        if input.len() != expected {
            return Err(InferenceError::InputShape {
                expected,
                actual: input.len(),
            });
        }

        if let Ok(mut last_input) = self.last_input.lock() {
            *last_input = Some(input.to_vec());
        }

        Ok(self.scores.clone())
    }
}
