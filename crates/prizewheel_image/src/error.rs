//! Image loading errors

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading or decoding an image
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to load file: {0}")]
    FileLoad(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Image load timed out after {0:?}")]
    Timeout(Duration),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Invalid base64 data: {0}")]
    Base64(String),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl From<base64::DecodeError> for ImageError {
    fn from(err: base64::DecodeError) -> Self {
        ImageError::Base64(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ImageError>;
