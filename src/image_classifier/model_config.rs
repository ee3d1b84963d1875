use std::path::PathBuf;

/// Preprocessing always produces interleaved R, G, B.
pub const RGB_CHANNELS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputShape {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl InputShape {
    pub fn len(&self) -> usize {
        self.height * self.width * self.channels
    }

    /// NHWC with a batch of one.
    pub fn dims(&self) -> [usize; 4] {
        [1, self.height, self.width, self.channels]
    }
}

impl Default for InputShape {
    fn default() -> Self {
        Self {
            height: 150,
            width: 150,
            channels: RGB_CHANNELS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub model_path: PathBuf,
    pub input_shape: InputShape,
    /// Positionally aligned with the model's output scores. Ships with the
    /// model file; change both together.
    pub labels: Vec<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("assets/model/fruits_classifier.onnx"),
            input_shape: InputShape::default(),
            labels: ["Apple", "Banana", "Lemon", "Onion", "Potato", "Watermelon"]
                .iter()
                .map(|label| label.to_string())
                .collect(),
        }
    }
}
