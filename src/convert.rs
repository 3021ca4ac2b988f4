//! The conversion pipeline and its public entry points.
//!
//! Conversions run strictly sequentially: sample, average, map, assemble,
//! then either join to text or render and post-scale to art. Every stage
//! owns its output until the next stage consumes it; nothing is shared
//! between concurrent conversions.

use image::{Rgba, RgbaImage};
use log::debug;

use crate::error::AsciifyError;
use crate::palette::Palette;
use crate::region::{BlockSize, RegionGrid};
use crate::render::{render_text, FontSpec};
use crate::sampler::PixelGrid;
use crate::scale::scale_image;
use crate::text::{assemble_rows, join_rows};

/// Run sampling through text assembly on an image, returning the row list.
fn ascii_rows(source: &RgbaImage, block: BlockSize, palette: Palette) -> Vec<String> {
    let grid = PixelGrid::from_image(source);
    let regions = RegionGrid::partition(&grid, block);
    debug!(
        "sampled {}x{} grid into {} region rows",
        grid.width(),
        grid.height(),
        regions.outer_len()
    );
    assemble_rows(&regions, palette.chars(), false)
}

/// Convert an image to its joined ASCII text form.
///
/// The source is pre-scaled by `pre_scale` (bicubic) before sampling, then
/// partitioned with `block` and mapped through the default palette.
///
/// # Errors
/// Scale preconditions are validated before any pipeline work; see
/// [`scale_image`].
pub fn convert_to_ascii_text(
    source: &RgbaImage,
    block: BlockSize,
    pre_scale: f64,
) -> Result<String, AsciifyError> {
    let scaled = scale_image(source, pre_scale)?;
    let rows = ascii_rows(&scaled, block, Palette::default());
    Ok(join_rows(&rows))
}

/// Convert an image to ASCII art rendered back onto a raster canvas.
///
/// The full-resolution source is sampled directly (no pre-scale), the
/// assembled text is rasterized with `font` in `color` on a transparent
/// canvas, and the canvas is post-scaled by `post_scale`.
///
/// # Errors
/// Propagates scale and canvas precondition failures; see [`render_text`]
/// and [`scale_image`].
pub fn convert_to_ascii_image(
    source: &RgbaImage,
    block: BlockSize,
    font: &FontSpec,
    color: Rgba<u8>,
    post_scale: f64,
) -> Result<RgbaImage, AsciifyError> {
    let rows = ascii_rows(source, block, Palette::default());
    let art = render_text(&join_rows(&rows), font, color)?;
    scale_image(&art, post_scale)
}

/// An image-to-ASCII converter with per-instance memoized results.
///
/// Inputs are supplied at construction or through setters; the derived
/// text and art are computed on first access and cached on the instance.
/// Accessing a result before the source image is set fails with
/// [`AsciifyError::NotInitialized`]. Each converter is independent, so
/// separate conversions can run on separate threads without interference.
pub struct Asciifier {
    source: Option<RgbaImage>,
    block: Option<BlockSize>,
    palette: Palette,
    font: Option<FontSpec>,
    color: Rgba<u8>,
    scale: f64,
    text: Option<String>,
    art: Option<RgbaImage>,
}

impl Default for Asciifier {
    fn default() -> Self {
        Asciifier {
            source: None,
            block: None,
            palette: Palette::default(),
            font: None,
            color: Rgba([255, 255, 255, 255]),
            scale: 1.0,
            text: None,
            art: None,
        }
    }
}

impl Asciifier {
    /// Build a converter with all core inputs supplied up front.
    pub fn new(source: RgbaImage, block: BlockSize, scale: f64) -> Self {
        Asciifier {
            source: Some(source),
            block: Some(block),
            scale,
            ..Asciifier::default()
        }
    }

    /// Set the source image, invalidating any cached results.
    pub fn set_source(&mut self, source: RgbaImage) {
        self.source = Some(source);
        self.invalidate();
    }

    /// Set the block size, invalidating any cached results.
    pub fn set_block_size(&mut self, block: BlockSize) {
        self.block = Some(block);
        self.invalidate();
    }

    /// Set the character palette, invalidating any cached results.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.invalidate();
    }

    /// Set the font used for art rendering, invalidating cached art.
    pub fn set_font(&mut self, font: FontSpec) {
        self.font = Some(font);
        self.art = None;
    }

    /// Set the foreground color for art rendering, invalidating cached art.
    pub fn set_color(&mut self, color: Rgba<u8>) {
        self.color = color;
        self.art = None;
    }

    /// Set the scale factor (text pre-scale, art post-scale),
    /// invalidating any cached results.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.text = None;
        self.art = None;
    }

    fn core_inputs(&self) -> Result<(&RgbaImage, BlockSize), AsciifyError> {
        match (&self.source, self.block) {
            (Some(source), Some(block)) => Ok((source, block)),
            _ => Err(AsciifyError::NotInitialized),
        }
    }

    /// The ASCII text form, computed once per input set.
    ///
    /// # Errors
    /// [`AsciifyError::NotInitialized`] when the source image or block
    /// size has not been supplied; otherwise scale precondition failures.
    pub fn ascii_text(&mut self) -> Result<&str, AsciifyError> {
        if self.text.is_none() {
            let (source, block) = self.core_inputs()?;
            let scaled = scale_image(source, self.scale)?;
            let rows = ascii_rows(&scaled, block, self.palette);
            self.text = Some(join_rows(&rows));
        }
        self.text.as_deref().ok_or(AsciifyError::NotInitialized)
    }

    /// The rendered ASCII art form, computed once per input set.
    ///
    /// # Errors
    /// [`AsciifyError::NotInitialized`] when the source image, block size,
    /// or font has not been supplied; otherwise render/scale failures.
    pub fn ascii_image(&mut self) -> Result<&RgbaImage, AsciifyError> {
        if self.art.is_none() {
            let (source, block) = self.core_inputs()?;
            let font = self.font.as_ref().ok_or(AsciifyError::NotInitialized)?;
            let rows = ascii_rows(source, block, self.palette);
            let art = render_text(&join_rows(&rows), font, self.color)?;
            self.art = Some(scale_image(&art, self.scale)?);
        }
        self.art.as_ref().ok_or(AsciifyError::NotInitialized)
    }
}
