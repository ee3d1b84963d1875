use image::DynamicImage;

pub trait DeviceCamera {
    /// Takes one picture and hands back the decoded image.
    fn capture(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>>;
}
