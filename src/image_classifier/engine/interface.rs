use crate::image_classifier::error::InferenceError;
use crate::image_classifier::model_config::InputShape;

/// One loaded model, ready for forward passes.
pub trait InferenceEngine: Send {
    fn input_shape(&self) -> InputShape;
    fn output_len(&self) -> usize;
    /// `input` holds `input_shape().len()` values; anything else is rejected.
    fn run(&mut self, input: &[f32]) -> Result<Vec<f32>, InferenceError>;
}
