//! Prize wheel renderer
//!
//! Renders a wheel of labeled segments to PNG. The winning segment is turned
//! under the pointer, an avatar fills the hub and a bezel frames the face.
//!
//! # Example
//!
//! ```no_run
//! use prizewheel::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = CompositeRenderer::bundled()?;
//! let segments = vec![
//!     Segment::new("Free coffee"),
//!     Segment::winner("Grand prize"),
//!     Segment::new("Try again"),
//! ];
//! let png = renderer.render(&segments, "https://example.com/me.png").await?;
//! std::fs::write("wheel.png", png)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Runtime
//!
//! [`CompositeRenderer::render`] and [`AvatarLoader::load`] must be awaited
//! inside a tokio runtime with the time and IO drivers enabled (for example
//! `#[tokio::main]`). Avatar loading is bounded by `tokio::time::timeout`
//! and fetches URLs with reqwest, so polling these futures from another
//! executor panics, even for `data:` URIs and file paths. Callers without a
//! runtime can load the avatar themselves and use the synchronous
//! [`CompositeRenderer::compose`] with [`AvatarLoader::fallback`] or their
//! own [`AvatarImage`].
//!
//! The wheel face alone, without avatar or pointer:
//!
//! ```
//! use prizewheel::prelude::*;
//!
//! let renderer = SegmentRenderer::bundled().unwrap();
//! let output = renderer
//!     .render(&[Segment::new("A"), Segment::new("B")], OutputMode::Png)
//!     .unwrap();
//! assert!(matches!(output, WheelOutput::Png(_)));
//! ```

mod assets;
mod avatar;
mod composite;
mod error;
mod segments;

#[cfg(test)]
mod tests;

pub use assets::{register_bundled_fonts, WheelAssets, BOLD_FONT_NAME, REGULAR_FONT_NAME};
pub use avatar::{AvatarImage, AvatarLoader, AvatarOrigin};
pub use composite::CompositeRenderer;
pub use error::{Result, WheelError};
pub use segments::{OutputMode, SegmentRenderer, WheelOutput};

pub use prizewheel_paint::Canvas;

/// Common imports
pub mod prelude {
    pub use crate::{
        AvatarImage, AvatarOrigin, CompositeRenderer, OutputMode, SegmentRenderer, WheelAssets,
        WheelError, WheelOutput,
    };
    pub use prizewheel_core::{Color, ColorStopPair, Segment, WheelStyle};
}
