//! Text support for the prize wheel renderer
//!
//! This crate provides:
//! - Font loading and parsing (TTF/OTF via ttf-parser)
//! - Text shaping and measurement (HarfBuzz via rustybuzz)
//! - A process-wide registry of named fonts
//! - Label layout (greedy word wrap, vertical centering)

pub mod font;
pub mod layout;
pub mod registry;
pub mod shaper;

pub use font::{FontFace, FontMetrics, FontStyle, FontWeight};
pub use layout::{
    line_offsets, wrap_lines, LayoutLine, LayoutOptions, SizedFace, TextLayout, TextMeasure,
};
pub use registry::{global_registry, register_global, FontRegistry};
pub use shaper::{ShapedGlyph, ShapedText, TextShaper};

use thiserror::Error;

/// Text rendering errors
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("Font not registered: {0}")]
    FontNotRegistered(String),

    #[error("Font registry has not been initialized")]
    RegistryUninitialized,
}

pub type Result<T> = std::result::Result<T, TextError>;
