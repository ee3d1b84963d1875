use crate::config::Config;
use crate::device_camera::impl_fake::{DeviceCameraFake, DeviceCameraFakeConfig};
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::image_classifier::classifier::Classifier;
use crate::image_classifier::engine::impl_fake::InferenceEngineFake;
use crate::image_classifier::labels::LabelSet;
use crate::library::logger::impl_fake::LoggerFake;
use crate::recognition_screen::main::RecognitionScreen;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

static CAPTURE_ID: AtomicUsize = AtomicUsize::new(0);

pub struct Fixture {
    pub logger: LoggerFake,
    pub device_display: DeviceDisplayFake,
    pub recognition_screen: RecognitionScreen,
}

impl Fixture {
    pub fn new(scores: Vec<f32>) -> Self {
        let mut config = Config::default();
        config.result_hold = Duration::ZERO;
        config.camera = DeviceCameraFakeConfig {
            capture_path: std::env::temp_dir().join(format!(
                "fruit_classifier_screen_capture_{}_{}.png",
                std::process::id(),
                CAPTURE_ID.fetch_add(1, Ordering::SeqCst)
            )),
            resolution_width: 64,
            resolution_height: 48,
            shutter_delay: Duration::ZERO,
        };

        let logger = LoggerFake::new();
        let device_camera = Arc::new(DeviceCameraFake::new(
            config.camera.clone(),
            Arc::new(logger.clone()),
        ));
        let device_display = DeviceDisplayFake::new();
        let engine = InferenceEngineFake::new(config.model.input_shape, scores);
        let labels = LabelSet::new(config.model.labels.clone()).unwrap();
        let image_classifier =
            Classifier::new(engine, labels, Arc::new(logger.clone())).unwrap();

        let recognition_screen = RecognitionScreen::new(
            config,
            Arc::new(logger.clone()),
            device_camera,
            Arc::new(Mutex::new(device_display.clone())),
            Arc::new(Mutex::new(image_classifier)),
        );

        Self {
            logger,
            device_display,
            recognition_screen,
        }
    }
}
