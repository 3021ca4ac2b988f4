//! General-purpose image scaling used before sampling and after rendering.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::debug;

use crate::error::AsciifyError;

/// Largest per-axis canvas dimension the pipeline will allocate.
pub const MAX_CANVAS_DIM: u32 = 32_768;

/// Resize an image by a scale factor with bicubic resampling.
///
/// New dimensions are `ceil(width * factor)` by `ceil(height * factor)`.
/// The factor may be fractional and either side of 1.0.
///
/// # Errors
/// * [`AsciifyError::InvalidScaleFactor`] for a non-positive or non-finite
///   factor
/// * [`AsciifyError::DegenerateCanvas`] when the result would have a zero
///   dimension (only possible from a zero-area source)
/// * [`AsciifyError::CanvasTooLarge`] when a dimension exceeds
///   [`MAX_CANVAS_DIM`]; checked before any allocation
pub fn scale_image(image: &RgbaImage, factor: f64) -> Result<RgbaImage, AsciifyError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(AsciifyError::InvalidScaleFactor { factor });
    }

    let width = (f64::from(image.width()) * factor).ceil() as u64;
    let height = (f64::from(image.height()) * factor).ceil() as u64;

    if width > u64::from(MAX_CANVAS_DIM) || height > u64::from(MAX_CANVAS_DIM) {
        return Err(AsciifyError::CanvasTooLarge { width, height, max: MAX_CANVAS_DIM });
    }
    if width == 0 || height == 0 {
        return Err(AsciifyError::DegenerateCanvas {
            width: width as u32,
            height: height as u32,
        });
    }

    debug!(
        "scaling {}x{} by {} to {}x{}",
        image.width(),
        image.height(),
        factor,
        width,
        height
    );

    Ok(imageops::resize(image, width as u32, height as u32, FilterType::CatmullRom))
}
