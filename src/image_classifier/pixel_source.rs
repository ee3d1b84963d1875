use image::{DynamicImage, GenericImageView, RgbImage, RgbaImage};

/// Anything that can hand out 8-bit RGB samples by coordinate. Alpha, where a
/// format has it, is dropped.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// `x < width()` and `y < height()`.
    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3];
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b, _] = self.get_pixel(x, y).0;
        [r, g, b]
    }
}

impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b, _] = GenericImageView::get_pixel(self, x, y).0;
        [r, g, b]
    }
}

/// Row-major packed `0xAARRGGBB` pixels, the layout mobile bitmaps hand out.
#[derive(Debug, Clone)]
pub struct ArgbPixels {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl ArgbPixels {
    pub fn new(
        width: u32,
        height: u32,
        pixels: Vec<u32>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(format!(
                "expected {} pixels for {}x{}, got {}",
                expected,
                width,
                height,
                pixels.len()
            )
            .into());
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

impl PixelSource for ArgbPixels {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let pixel = self.pixels[y as usize * self.width as usize + x as usize];
        [
            ((pixel >> 16) & 0xFF) as u8,
            ((pixel >> 8) & 0xFF) as u8,
            (pixel & 0xFF) as u8,
        ]
    }
}
