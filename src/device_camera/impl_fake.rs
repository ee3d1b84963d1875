use crate::device_camera::interface::DeviceCamera;
use crate::image_classifier::pixel_source::{ArgbPixels, PixelSource};
use crate::image_classifier::preprocess::resize_exact;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DeviceCameraFakeConfig {
    pub capture_path: PathBuf,
    pub resolution_width: u32,
    pub resolution_height: u32,
    pub shutter_delay: Duration,
}

impl Default for DeviceCameraFakeConfig {
    fn default() -> Self {
        Self {
            capture_path: std::env::temp_dir().join("fruit_classifier_capture.png"),
            resolution_width: 640,
            resolution_height: 480,
            shutter_delay: Duration::from_millis(200),
        }
    }
}

/// Paints a few random color blocks into a packed ARGB frame, writes it to the
/// capture file and decodes the file back, the way a real camera app hands
/// over a photo.
pub struct DeviceCameraFake {
    config: DeviceCameraFakeConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(config: DeviceCameraFakeConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }

    fn draw(&self) -> Result<ArgbPixels, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();
        let block = 40;
        let (width, height) = (self.config.resolution_width, self.config.resolution_height);
        let columns = width.div_ceil(block);
        let colors: Vec<u32> = (0..columns * height.div_ceil(block))
            .map(|_| 0xFF00_0000 | rng.random_range(0..0x0100_0000u32))
            .collect();

        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| colors[((y / block) * columns + x / block) as usize])
            .collect();

        ArgbPixels::new(width, height, pixels)
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn capture(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Capturing picture...")?;
        std::thread::sleep(self.config.shutter_delay);

        let frame = self.draw()?;
        resize_exact(&frame, frame.width(), frame.height()).save(&self.config.capture_path)?;
        let image = image::open(&self.config.capture_path)?;

        self.logger.info(&format!(
            "Picture captured to {}",
            self.config.capture_path.display()
        ))?;
        Ok(image)
    }
}

impl Drop for DeviceCameraFake {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.config.capture_path);
    }
}
