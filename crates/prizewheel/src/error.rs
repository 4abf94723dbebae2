//! Error types for prizewheel

use prizewheel_core::CoreError;
use prizewheel_image::ImageError;
use prizewheel_paint::PaintError;
use prizewheel_text::TextError;
use thiserror::Error;

/// Errors that can occur while building or running a renderer
#[derive(Error, Debug)]
pub enum WheelError {
    /// A wheel needs at least one segment
    #[error("Cannot render a wheel without segments")]
    NoSegments,

    /// Style failed validation or parsing
    #[error("Invalid style: {0}")]
    InvalidStyle(#[from] CoreError),

    /// A bundled or on-disk asset is missing or unreadable
    #[error("Asset loading failed: {0}")]
    Asset(String),

    #[error("Text error: {0}")]
    Text(#[from] TextError),

    #[error("Drawing failed: {0}")]
    Paint(#[from] PaintError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),
}

/// Result type for prizewheel operations
pub type Result<T> = std::result::Result<T, WheelError>;
