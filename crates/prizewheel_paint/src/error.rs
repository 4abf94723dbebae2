//! Paint error types

use thiserror::Error;

/// Errors that can occur while drawing or encoding a canvas
#[derive(Error, Debug)]
pub enum PaintError {
    /// tiny-skia refused the pixmap size
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data that does not match its declared size
    #[error("Invalid image data: {0}")]
    InvalidImage(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, PaintError>;
