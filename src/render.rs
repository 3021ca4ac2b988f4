//! Art rendering: rasterizing assembled text onto a transparent canvas.

use fontdue::{Font, FontSettings};
use image::{Rgba, RgbaImage};
use log::debug;

use crate::error::AsciifyError;
use crate::scale::MAX_CANVAS_DIM;

/// Padding added around the measured text (5 pixels on each side).
pub const CANVAS_PADDING: u32 = 10;

/// Offset of the text's top-left corner inside the canvas.
pub const TEXT_OFFSET: f32 = 5.0;

/// A parsed font plus the pixel size to render at.
pub struct FontSpec {
    font: Font,
    px: f32,
}

impl FontSpec {
    /// Parse font data (TTF/OTF) and pair it with a rendering size.
    ///
    /// # Errors
    /// [`AsciifyError::FontError`] when the size is not positive or the
    /// font data cannot be parsed.
    pub fn from_bytes(data: &[u8], px: f32) -> Result<Self, AsciifyError> {
        if !px.is_finite() || px <= 0.0 {
            return Err(AsciifyError::FontError(format!(
                "font size must be positive, got {}",
                px
            )));
        }
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| AsciifyError::FontError(e.to_string()))?;
        Ok(FontSpec { font, px })
    }

    pub fn px(&self) -> f32 {
        self.px
    }

    /// Vertical distance between consecutive baselines.
    fn line_height(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.px)
            .map(|m| m.new_line_size)
            .unwrap_or(self.px)
    }

    /// Distance from the top of a line to its baseline.
    fn ascent(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.px)
            .map(|m| m.ascent)
            .unwrap_or(self.px)
    }

    /// Measure the rendered size of a multi-line text.
    ///
    /// Width is the widest line's summed glyph advances; height is the
    /// line count times the font's line height. Both are ceilinged to
    /// whole pixels. An empty trailing line still counts toward height,
    /// matching the assembled row list's trailing flush entry.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let mut max_width = 0f32;
        let mut lines = 0u32;

        for line in text.split('\n') {
            lines += 1;
            let width: f32 = line
                .chars()
                .map(|c| self.font.metrics(c, self.px).advance_width)
                .sum();
            max_width = max_width.max(width);
        }

        (
            max_width.ceil() as u32,
            (lines as f32 * self.line_height()).ceil() as u32,
        )
    }
}

/// Rasterize text onto a new transparent canvas.
///
/// The canvas is sized from the measured text plus [`CANVAS_PADDING`], and
/// the text is drawn starting at ([`TEXT_OFFSET`], [`TEXT_OFFSET`]) in the
/// given foreground color. Glyph coverage from the rasterizer lands in the
/// alpha channel, so edges stay anti-aliased over the transparent
/// background.
///
/// # Errors
/// [`AsciifyError::CanvasTooLarge`] when the padded canvas would exceed
/// [`MAX_CANVAS_DIM`] on either axis; checked before allocation.
pub fn render_text(
    text: &str,
    font: &FontSpec,
    color: Rgba<u8>,
) -> Result<RgbaImage, AsciifyError> {
    let (measured_w, measured_h) = font.measure(text);
    let width = u64::from(measured_w) + u64::from(CANVAS_PADDING);
    let height = u64::from(measured_h) + u64::from(CANVAS_PADDING);

    if width > u64::from(MAX_CANVAS_DIM) || height > u64::from(MAX_CANVAS_DIM) {
        return Err(AsciifyError::CanvasTooLarge { width, height, max: MAX_CANVAS_DIM });
    }

    debug!("rendering {}x{} art canvas", width, height);

    let mut canvas = RgbaImage::new(width as u32, height as u32);
    let [r, g, b, a] = color.0;
    let line_height = font.line_height();
    let ascent = font.ascent();

    for (line_index, line) in text.split('\n').enumerate() {
        let baseline = TEXT_OFFSET + ascent + line_index as f32 * line_height;
        let mut pen_x = TEXT_OFFSET;

        for ch in line.chars() {
            let (metrics, bitmap) = font.font.rasterize(ch, font.px);

            let glyph_x = (pen_x + metrics.xmin as f32).floor() as i64;
            let glyph_y = (baseline - metrics.ymin as f32 - metrics.height as f32).floor() as i64;

            for sy in 0..metrics.height {
                for sx in 0..metrics.width {
                    let coverage = bitmap[sy * metrics.width + sx];
                    if coverage == 0 {
                        continue;
                    }

                    let tx = glyph_x + sx as i64;
                    let ty = glyph_y + sy as i64;
                    if tx < 0 || ty < 0 || tx >= canvas.width() as i64 || ty >= canvas.height() as i64
                    {
                        continue;
                    }

                    let alpha = (u16::from(coverage) * u16::from(a) / 255) as u8;
                    let existing = canvas.get_pixel(tx as u32, ty as u32).0[3];
                    canvas.put_pixel(
                        tx as u32,
                        ty as u32,
                        Rgba([r, g, b, alpha.max(existing)]),
                    );
                }
            }

            pen_x += metrics.advance_width;
        }
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let result = FontSpec::from_bytes(&[0u8; 16], 16.0);
        assert!(matches!(result, Err(AsciifyError::FontError(_))));
    }

    #[test]
    fn test_from_bytes_rejects_bad_size() {
        for px in [0.0f32, -4.0, f32::NAN] {
            let result = FontSpec::from_bytes(&[0u8; 16], px);
            match result {
                Err(AsciifyError::FontError(msg)) => {
                    assert!(msg.contains("font size"), "unexpected message: {}", msg)
                }
                other => panic!("expected FontError, got {:?}", other.map(|_| ())),
            }
        }
    }
}
