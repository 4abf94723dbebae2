//! Prize wheel canvas
//!
//! A small immediate-mode 2D API over a tiny-skia pixmap: paths with arcs,
//! solid and gradient fills, strokes with soft shadows, clipping, scaled
//! images and text drawn from glyph outlines.
//!
//! # Example
//!
//! ```
//! use prizewheel_core::{Color, Point};
//! use prizewheel_paint::Canvas;
//!
//! let mut canvas = Canvas::new(100, 100).unwrap();
//! canvas.with_state(|c| {
//!     c.translate(50.0, 50.0);
//!     c.fill_circle(Point::ZERO, 20.0, Color::RED);
//! });
//! let png = canvas.encode_png().unwrap();
//! assert!(!png.is_empty());
//! ```

mod brush;
mod canvas;
mod error;
mod path;
mod raster;
mod shadow;
mod text;

pub use brush::Brush;
pub use canvas::Canvas;
pub use error::{PaintError, Result};
pub use path::{circle, wedge, PathBuilder};
pub use raster::RasterImage;
pub use text::TextAlign;

/// Built path type, re-exported so callers need not depend on tiny-skia
pub use tiny_skia::Path;
