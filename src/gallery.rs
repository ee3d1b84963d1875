use image::DynamicImage;
use std::path::Path;

/// Decodes a picture the user picked from disk.
pub fn load_image(path: &Path) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
    let image = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage};

    #[test]
    fn test_load_png() {
        let path = std::env::temp_dir()
            .join(format!("fruit_classifier_gallery_{}.png", std::process::id()));
        RgbImage::from_pixel(12, 7, Rgb([255, 200, 0]))
            .save(&path)
            .unwrap();

        let image = load_image(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(image.dimensions(), (12, 7));
        assert_eq!(image.get_pixel(3, 3).0, [255, 200, 0, 255]);
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("fruit_classifier_gallery_missing.jpg");
        assert!(load_image(&path).is_err());
    }

    #[test]
    fn test_not_an_image() {
        let path = std::env::temp_dir()
            .join(format!("fruit_classifier_gallery_{}.txt", std::process::id()));
        std::fs::write(&path, "apple").unwrap();

        let result = load_image(&path);
        let _ = std::fs::remove_file(&path);

        assert!(result.is_err());
    }
}
