use crate::device_camera::impl_fake::DeviceCameraFakeConfig;
use crate::image_classifier::model_config::ModelConfig;
use chrono::Offset;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub camera: DeviceCameraFakeConfig,
    pub logger_timezone: chrono::FixedOffset,
    /// How long a result or error stays on screen before the next image.
    pub result_hold: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            camera: DeviceCameraFakeConfig::default(),
            logger_timezone: utc(),
            result_hold: Duration::from_secs(2),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
