//! Prize wheel core types
//!
//! This crate provides the backend-independent pieces of the wheel renderer:
//!
//! - **Colors and gradients**: RGBA colors with hex parsing, gradient descriptions
//! - **Segments**: labeled wedges and winner rotation
//! - **Geometry**: segment spans and label placement
//! - **Style**: the serde-configurable look of a wheel
//!
//! # Example
//!
//! ```rust
//! use prizewheel_core::{rotate_to_winner, Segment, SegmentSpan};
//!
//! let segments = vec![Segment::new("A"), Segment::new("B"), Segment::winner("C")];
//! let rotated = rotate_to_winner(&segments);
//! assert_eq!(rotated[0].label, "C");
//!
//! let span = SegmentSpan::of(0, rotated.len());
//! assert!((span.start + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod segment;
pub mod style;

pub use color::Color;
pub use error::{CoreError, Result};
pub use geometry::{angle_step, Point, SegmentSpan, WheelGeometry};
pub use gradient::{palette_entry, ColorStopPair, Gradient, GradientStop, GradientStops};
pub use segment::{rotate_to_winner, winner_index, Segment};
pub use style::{
    AvatarStyle, BezelStyle, LabelStyle, LabelWeight, PointerStyle, ShadowStyle, StrokeStyle,
    WheelStyle,
};
