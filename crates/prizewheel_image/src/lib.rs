//! Prize wheel image loading
//!
//! Decodes avatar and asset images from files, `data:` URIs, raw bytes or
//! `http(s)` URLs into straight-alpha RGBA8 pixels.
//!
//! ```
//! use prizewheel_image::ImageSource;
//!
//! assert!(matches!(ImageSource::parse("https://example.com/me.png"), ImageSource::Url(_)));
//! assert!(matches!(ImageSource::parse("assets/me.png"), ImageSource::File(_)));
//! ```

mod error;
mod loader;
mod source;

pub use error::{ImageError, Result};
pub use loader::ImageData;
pub use source::ImageSource;
