use crate::image_classifier::model_config::{InputShape, RGB_CHANNELS};
use crate::image_classifier::pixel_source::PixelSource;
use image::{imageops, Rgb, RgbImage};

/// Stretches `source` to exactly `width`x`height`, ignoring aspect ratio. A
/// source already at the target size is copied without resampling.
pub fn resize_exact(source: &dyn PixelSource, width: u32, height: u32) -> RgbImage {
    let rgb = RgbImage::from_fn(source.width(), source.height(), |x, y| {
        Rgb(source.rgb_at(x, y))
    });

    if rgb.dimensions() == (width, height) {
        rgb
    } else {
        imageops::resize(&rgb, width, height, imageops::FilterType::Triangle)
    }
}

/// Row-major, channel-interleaved RGB floats in [0, 1].
pub fn image_to_tensor(image: &RgbImage) -> Vec<f32> {
    let mut tensor = Vec::with_capacity(image.width() as usize * image.height() as usize * RGB_CHANNELS);

    for pixel in image.pixels() {
        for channel in pixel.0 {
            tensor.push(channel as f32 / 255.0);
        }
    }

    tensor
}

pub fn preprocess(source: &dyn PixelSource, shape: InputShape) -> Vec<f32> {
    let resized = resize_exact(source, shape.width as u32, shape.height as u32);
    image_to_tensor(&resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, Rgba};
    use rand::Rng;

    fn shape() -> InputShape {
        InputShape::default()
    }

    #[test]
    fn test_solid_red_tensor() {
        let image = RgbImage::from_pixel(150, 150, Rgb([255, 0, 0]));

        let tensor = preprocess(&image, shape());
        assert_eq!(tensor.len(), 150 * 150 * 3);

        for pixel in tensor.chunks(3) {
            assert_eq!(pixel, &[1.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_rectangle_is_stretched_not_padded() {
        // Padding would leave black bars at the top and bottom rows.
        let image = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(300, 60, Rgb([255, 0, 0])));

        let tensor = preprocess(&image, shape());
        assert_eq!(tensor.len(), 150 * 150 * 3);
        assert_eq!(&tensor[0..3], &[1.0, 0.0, 0.0]);
        let last = tensor.len() - 3;
        assert_eq!(&tensor[last..], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_target_size_input_is_not_resampled() {
        let mut rng = rand::rng();
        let image = RgbImage::from_fn(150, 150, |_, _| {
            Rgb([rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>()])
        });

        let tensor = preprocess(&image, shape());
        let direct: Vec<f32> = image
            .pixels()
            .flat_map(|p| p.0.map(|c| c as f32 / 255.0))
            .collect();

        assert_eq!(tensor, direct);
    }

    #[test]
    fn test_channel_order_is_rgb_interleaved() {
        let mut image = RgbImage::from_pixel(150, 150, Rgb([0, 0, 0]));
        image.put_pixel(1, 0, Rgb([0, 255, 0]));
        image.put_pixel(0, 1, Rgb([0, 0, 255]));

        let tensor = preprocess(&image, shape());
        // pixel (1, 0) is the second pixel of the first row
        assert_eq!(&tensor[3..6], &[0.0, 1.0, 0.0]);
        // pixel (0, 1) starts the second row
        let row = 150 * 3;
        assert_eq!(&tensor[row..row + 3], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_normalization_stays_in_unit_range() {
        let mut rng = rand::rng();
        let width = rng.random_range(1..=320);
        let height = rng.random_range(1..=320);
        let image = ImageBuffer::from_fn(width, height, |_, _| {
            Rgba([
                rng.random::<u8>(),
                rng.random::<u8>(),
                rng.random::<u8>(),
                rng.random::<u8>(),
            ])
        });

        let tensor = preprocess(&image, shape());
        assert_eq!(tensor.len(), 150 * 150 * 3);
        assert!(tensor.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_gray_normalization() {
        let image = RgbImage::from_pixel(40, 90, Rgb([128, 128, 128]));

        let tensor = preprocess(&image, shape());
        let expected = 128.0 / 255.0;
        assert!(tensor.iter().all(|v| (v - expected).abs() < 0.0001));
    }

    #[test]
    fn test_single_pixel_upscales() {
        let image = RgbImage::from_pixel(1, 1, Rgb([0, 51, 255]));

        let tensor = preprocess(&image, shape());
        assert_eq!(tensor.len(), 150 * 150 * 3);
        assert!((tensor[1] - 0.2).abs() < 0.0001);
        assert_eq!(tensor[2], 1.0);
    }
}
