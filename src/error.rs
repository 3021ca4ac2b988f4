//! Error types shared across the conversion pipeline.

/// Errors that can occur during an ASCII conversion.
#[derive(Debug, thiserror::Error)]
pub enum AsciifyError {
    #[error("Block size must be positive, got {width}x{height}")]
    InvalidBlockSize {
        /// Requested block width
        width: u32,
        /// Requested block height
        height: u32,
    },

    #[error("Scale factor must be a positive finite number, got {factor}")]
    InvalidScaleFactor {
        /// The rejected scale factor
        factor: f64,
    },

    #[error("Scaling produced an empty {width}x{height} canvas")]
    DegenerateCanvas { width: u32, height: u32 },

    #[error("Canvas {width}x{height} exceeds the maximum raster dimension {max}")]
    CanvasTooLarge { width: u64, height: u64, max: u32 },

    #[error("Converter not initialized: set a source image and block size first")]
    NotInitialized,

    #[error("Failed to load font: {0}")]
    FontError(String),
}
