pub mod classifier;
pub mod engine;
pub mod error;
pub mod interface;
pub mod labels;
pub mod model_config;
pub mod pixel_source;
pub mod preprocess;
