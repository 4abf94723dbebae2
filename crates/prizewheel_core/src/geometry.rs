//! Wheel geometry
//!
//! Angles are in radians, measured clockwise from the positive x axis in
//! screen space (y grows downward), the same convention as a 2D canvas arc.
//! Segment 0 starts at 12 o'clock.

use std::f32::consts::{FRAC_PI_2, TAU};

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `angle`
    pub fn polar(self, radius: f32, angle: f32) -> Point {
        Point::new(self.x + angle.cos() * radius, self.y + angle.sin() * radius)
    }
}

/// Angle covered by each of `count` equal segments.
///
/// `count` must be at least 1.
pub fn angle_step(count: usize) -> f32 {
    debug_assert!(count > 0, "a wheel needs at least one segment");
    TAU / count as f32
}

/// Angular extent of one wedge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentSpan {
    pub start: f32,
    pub end: f32,
}

impl SegmentSpan {
    /// Span of segment `index` out of `count`, starting at 12 o'clock
    pub fn of(index: usize, count: usize) -> Self {
        let step = angle_step(count);
        let start = index as f32 * step - FRAC_PI_2;
        Self {
            start,
            end: start + step,
        }
    }

    pub fn sweep(&self) -> f32 {
        self.end - self.start
    }

    /// Angle halfway through the wedge
    pub fn bisector(&self) -> f32 {
        self.start + self.sweep() / 2.0
    }
}

/// Placement of the wheel on its canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelGeometry {
    pub center: Point,
    pub outer_radius: f32,
    pub inner_radius: f32,
}

impl WheelGeometry {
    /// Wheel centered on a `width` x `height` canvas
    pub fn centered(width: u32, height: u32, outer_radius: f32, inner_radius: f32) -> Self {
        Self {
            center: Point::new(width as f32 / 2.0, height as f32 / 2.0),
            outer_radius,
            inner_radius,
        }
    }

    /// Iterate the spans of all `count` segments in wheel order
    pub fn spans(count: usize) -> impl Iterator<Item = SegmentSpan> {
        (0..count).map(move |i| SegmentSpan::of(i, count))
    }

    /// Gradient axis of a wedge: inner radius along the start edge to outer
    /// radius along the end edge
    pub fn gradient_axis(&self, span: &SegmentSpan) -> (Point, Point) {
        (
            self.center.polar(self.inner_radius, span.start),
            self.center.polar(self.outer_radius, span.end),
        )
    }

    /// Label anchor in the wedge's rotated frame: halfway between hub and rim
    pub fn label_anchor(&self) -> Point {
        Point::new((self.outer_radius + self.inner_radius) / 2.0, 0.0)
    }

    /// Radial room left for label text after `padding` is taken off
    pub fn label_width(&self, padding: f32) -> f32 {
        self.outer_radius - self.inner_radius - padding
    }
}
