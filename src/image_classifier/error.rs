use std::path::PathBuf;
use thiserror::Error;

/// Raised while constructing a classifier. The model artifact is static, so
/// none of these are worth retrying.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("failed to read model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model file {path} is empty")]
    Empty { path: PathBuf },
    #[error("model {path} has an unsupported or corrupt format: {reason}")]
    Format { path: PathBuf, reason: String },
    #[error("model output shape is not fully known")]
    UnknownOutputShape,
    #[error("label set has {labels} entries but the model produces {outputs} scores")]
    LabelMismatch { labels: usize, outputs: usize },
    #[error("label set is empty")]
    NoLabels,
    #[error("model expects {channels} input channels, only RGB (3) is supported")]
    UnsupportedChannels { channels: usize },
}

/// Raised by a single `classify` call.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("classifier has been released")]
    Released,
    #[error("image must be non-empty, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
    #[error("input tensor has {actual} values, expected {expected}")]
    InputShape { expected: usize, actual: usize },
    #[error("model produced {actual} scores, expected {expected}")]
    OutputShape { expected: usize, actual: usize },
    #[error("model produced NaN at score index {index}")]
    NanScore { index: usize },
    #[error("inference engine failed: {0}")]
    Engine(String),
}
