//! Core error types

use thiserror::Error;

/// Errors raised while building wheel styles and geometry
#[derive(Error, Debug)]
pub enum CoreError {
    /// A color string that is not `#RGB`, `#RRGGBB` or `#RRGGBBAA`
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Style values that cannot produce a drawable wheel
    #[error("Invalid wheel style: {0}")]
    InvalidStyle(String),

    /// TOML style document could not be parsed
    #[error("Failed to parse wheel style: {0}")]
    StyleParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
