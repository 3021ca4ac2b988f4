//! Pixel sampling: extracting a 2D color grid from a decoded image.

use image::RgbaImage;

/// One sampled pixel, four 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Pixel { r, g, b, a }
    }
}

/// A row-major grid of sampled pixels.
///
/// `get(row, col)` addresses the pixel at image coordinate (col, row):
/// the grid has one row per image scanline. Channel values are copied
/// verbatim from the source image; no color-space conversion happens here.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    pixels: Vec<Pixel>,
    width: u32,
    height: u32,
}

impl PixelGrid {
    /// Sample every pixel of an image into a grid.
    ///
    /// A zero-area image yields an empty grid.
    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));

        for y in 0..height {
            for x in 0..width {
                let [r, g, b, a] = image.get_pixel(x, y).0;
                pixels.push(Pixel::new(r, g, b, a));
            }
        }

        PixelGrid { pixels, width, height }
    }

    /// Number of columns (image width).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows (image height).
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the pixel at (row, col).
    ///
    /// Panics if the coordinate is out of bounds, like slice indexing.
    pub fn get(&self, row: u32, col: u32) -> Pixel {
        assert!(row < self.height && col < self.width, "pixel ({}, {}) out of bounds", row, col);
        self.pixels[(row * self.width + col) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_from_image_dimensions() {
        let img = RgbaImage::new(3, 2);
        let grid = PixelGrid::from_image(&img);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_from_image_zero_area() {
        let grid = PixelGrid::from_image(&RgbaImage::new(0, 0));
        assert!(grid.is_empty());

        let grid = PixelGrid::from_image(&RgbaImage::new(5, 0));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_channels_copied_verbatim() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 4]));
        img.put_pixel(1, 0, Rgba([250, 251, 252, 253]));

        let grid = PixelGrid::from_image(&img);
        assert_eq!(grid.get(0, 0), Pixel::new(1, 2, 3, 4));
        assert_eq!(grid.get(0, 1), Pixel::new(250, 251, 252, 253));
    }

    #[test]
    fn test_row_major_addressing() {
        // Image coordinate (x, y) lands at grid (row = y, col = x).
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(1, 0, Rgba([9, 9, 9, 255]));

        let grid = PixelGrid::from_image(&img);
        assert_eq!(grid.get(0, 1).r, 9);
        assert_eq!(grid.get(1, 0).r, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let grid = PixelGrid::from_image(&RgbaImage::new(1, 1));
        grid.get(1, 0);
    }
}
