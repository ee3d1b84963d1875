use crate::image_classifier::error::InferenceError;
use crate::image_classifier::pixel_source::PixelSource;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    /// Raw model score for `label`, not renormalized.
    pub confidence: f32,
}

/// Not internally synchronized: callers sharing a classifier across threads
/// must serialize access, e.g. behind a `Mutex`.
pub trait ImageClassifier {
    fn classify(&mut self, image: &dyn PixelSource) -> Result<Classification, InferenceError>;
    fn release(&mut self);
    fn is_loaded(&self) -> bool;
}
