//! Region averaging: partitioning the pixel grid into blocks, one averaged
//! color per block.

use crate::error::AsciifyError;
use crate::sampler::{Pixel, PixelGrid};

/// Block dimensions used to partition the pixel grid.
///
/// Constructed through [`BlockSize::new`], which rejects zero dimensions,
/// so a value of this type is always usable as a divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSize {
    width: u32,
    height: u32,
}

impl BlockSize {
    /// Validate and build a block size. Both dimensions must be positive.
    pub fn new(width: u32, height: u32) -> Result<Self, AsciifyError> {
        if width == 0 || height == 0 {
            return Err(AsciifyError::InvalidBlockSize { width, height });
        }
        Ok(BlockSize { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// A rectangular sub-block of the pixel grid, reduced to one averaged pixel.
///
/// Only the block's top-left grid position is recorded; the dimensions are
/// uniform across the grid and live in the [`BlockSize`] that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    /// Grid row of the block's top-left corner
    pub row: u32,
    /// Grid column of the block's top-left corner
    pub col: u32,
    /// Channel-wise mean of every pixel in the block
    pub average: Pixel,
}

/// The 2D region grid produced by partitioning a pixel grid.
///
/// The outer axis walks the grid's rows in steps of the block *width*, and
/// the inner axis walks the grid's columns in steps of the block *height*.
/// This indexing convention is load-bearing: one text row is emitted per
/// outer entry, so `outer_len == floor(grid_rows / block_width)` and each
/// row holds `floor(grid_cols / block_height)` characters. Callers must not
/// reorder it.
#[derive(Debug, Clone)]
pub struct RegionGrid {
    rows: Vec<Vec<Region>>,
}

impl RegionGrid {
    /// Partition a pixel grid into averaged regions.
    ///
    /// Each region's color is the per-channel mean over the full
    /// `block.width() * block.height()` pixel block, accumulated in 64-bit
    /// sums and truncated back to 8 bits. Trailing pixels that do not fill
    /// a whole block are dropped; the partition assumes the image
    /// dimensions are exact multiples of the block size.
    pub fn partition(grid: &PixelGrid, block: BlockSize) -> Self {
        let outer_count = grid.height() / block.width();
        let inner_count = grid.width() / block.height();
        let area = u64::from(block.width()) * u64::from(block.height());

        let mut rows = Vec::with_capacity(outer_count as usize);
        for i in 0..outer_count {
            let region_row = i * block.width();
            let mut row = Vec::with_capacity(inner_count as usize);

            for j in 0..inner_count {
                let region_col = j * block.height();
                let mut sum_r = 0u64;
                let mut sum_g = 0u64;
                let mut sum_b = 0u64;
                let mut sum_a = 0u64;

                for bi in 0..block.width() {
                    for bj in 0..block.height() {
                        let px = grid.get(region_row + bi, region_col + bj);
                        sum_r += u64::from(px.r);
                        sum_g += u64::from(px.g);
                        sum_b += u64::from(px.b);
                        sum_a += u64::from(px.a);
                    }
                }

                row.push(Region {
                    row: region_row,
                    col: region_col,
                    average: Pixel::new(
                        (sum_r / area) as u8,
                        (sum_g / area) as u8,
                        (sum_b / area) as u8,
                        (sum_a / area) as u8,
                    ),
                });
            }
            rows.push(row);
        }

        RegionGrid { rows }
    }

    /// Outer entries, one per eventual text row.
    pub fn outer(&self) -> &[Vec<Region>] {
        &self.rows
    }

    pub fn outer_len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(color))
    }

    #[test]
    fn test_block_size_rejects_zero() {
        assert!(matches!(
            BlockSize::new(0, 2),
            Err(AsciifyError::InvalidBlockSize { width: 0, height: 2 })
        ));
        assert!(matches!(
            BlockSize::new(2, 0),
            Err(AsciifyError::InvalidBlockSize { .. })
        ));
        assert!(BlockSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_partition_counts() {
        // 6 wide, 4 tall image, 2x2 blocks: outer = 4/2 = 2, inner = 6/2 = 3.
        let img = solid_image(6, 4, [10, 20, 30, 255]);
        let grid = PixelGrid::from_image(&img);
        let regions = RegionGrid::partition(&grid, BlockSize::new(2, 2).unwrap());
        assert_eq!(regions.outer_len(), 2);
        assert_eq!(regions.outer()[0].len(), 3);
        assert_eq!(regions.outer()[1].len(), 3);
    }

    #[test]
    fn test_outer_axis_is_row_axis() {
        // Non-square block on a non-square image pins the axis convention:
        // block width divides the grid's rows, block height its columns.
        // 6 wide, 4 tall, block (2, 3): outer = 4/2 = 2, inner = 6/3 = 2.
        let img = solid_image(6, 4, [0, 0, 0, 255]);
        let grid = PixelGrid::from_image(&img);
        let regions = RegionGrid::partition(&grid, BlockSize::new(2, 3).unwrap());
        assert_eq!(regions.outer_len(), 2);
        assert_eq!(regions.outer()[0].len(), 2);
    }

    #[test]
    fn test_region_origin_positions() {
        let img = solid_image(4, 4, [0, 0, 0, 255]);
        let grid = PixelGrid::from_image(&img);
        let regions = RegionGrid::partition(&grid, BlockSize::new(2, 2).unwrap());

        let first = regions.outer()[0][1];
        assert_eq!((first.row, first.col), (0, 2));
        let second = regions.outer()[1][0];
        assert_eq!((second.row, second.col), (2, 0));
    }

    #[test]
    fn test_uniform_image_average_is_exact() {
        let img = solid_image(8, 8, [137, 42, 200, 255]);
        let grid = PixelGrid::from_image(&img);
        let regions = RegionGrid::partition(&grid, BlockSize::new(4, 4).unwrap());

        for row in regions.outer() {
            for region in row {
                assert_eq!(region.average, Pixel::new(137, 42, 200, 255));
            }
        }
    }

    #[test]
    fn test_average_covers_whole_block() {
        // Top half black, bottom half white in a single 2x2 block:
        // the mean must see all four pixels, not just one line.
        let mut img = solid_image(2, 2, [0, 0, 0, 255]);
        img.put_pixel(0, 1, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 1, Rgba([255, 255, 255, 255]));

        let grid = PixelGrid::from_image(&img);
        let regions = RegionGrid::partition(&grid, BlockSize::new(2, 2).unwrap());
        let avg = regions.outer()[0][0].average;
        assert_eq!(avg, Pixel::new(127, 127, 127, 255));
    }

    #[test]
    fn test_average_truncates() {
        // Three black pixels and one (1,1,1): sum 1, area 4, truncates to 0.
        let mut img = solid_image(2, 2, [0, 0, 0, 255]);
        img.put_pixel(1, 1, Rgba([1, 1, 1, 255]));

        let grid = PixelGrid::from_image(&img);
        let regions = RegionGrid::partition(&grid, BlockSize::new(2, 2).unwrap());
        assert_eq!(regions.outer()[0][0].average, Pixel::new(0, 0, 0, 255));
    }

    #[test]
    fn test_partial_trailing_blocks_dropped() {
        // 5x5 image with 2x2 blocks: the fifth row and column never form
        // a full block and are discarded.
        let img = solid_image(5, 5, [50, 50, 50, 255]);
        let grid = PixelGrid::from_image(&img);
        let regions = RegionGrid::partition(&grid, BlockSize::new(2, 2).unwrap());
        assert_eq!(regions.outer_len(), 2);
        assert_eq!(regions.outer()[0].len(), 2);
    }

    #[test]
    fn test_block_larger_than_grid_yields_empty() {
        let img = solid_image(2, 2, [0, 0, 0, 255]);
        let grid = PixelGrid::from_image(&img);
        let regions = RegionGrid::partition(&grid, BlockSize::new(4, 4).unwrap());
        assert!(regions.is_empty());
    }

    #[test]
    fn test_empty_grid_yields_empty_regions() {
        let grid = PixelGrid::from_image(&RgbaImage::new(0, 0));
        let regions = RegionGrid::partition(&grid, BlockSize::new(1, 1).unwrap());
        assert!(regions.is_empty());
    }
}
