//! Path building
//!
//! PathBuilder provides a fluent, canvas-like API on top of tiny-skia's
//! builder, adding circular arcs (approximated with cubic beziers).

use prizewheel_core::Point;
use std::f32::consts::FRAC_PI_2;

/// Builder for constructing paths with fluent API
pub struct PathBuilder {
    inner: tiny_skia::PathBuilder,
    current: Option<Point>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            inner: tiny_skia::PathBuilder::new(),
            current: None,
        }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.inner.move_to(x, y);
        self.current = Some(Point::new(x, y));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.inner.line_to(x, y);
        self.current = Some(Point::new(x, y));
        self
    }

    /// Clockwise arc around `center` from `start` to `end` (radians).
    ///
    /// Like a canvas `arc`, a straight line joins the current point to the
    /// arc's start; with no current point the arc starts a new contour.
    pub fn arc(mut self, center: Point, radius: f32, start: f32, end: f32) -> Self {
        let from = center.polar(radius, start);
        match self.current {
            Some(_) => self.inner.line_to(from.x, from.y),
            None => self.inner.move_to(from.x, from.y),
        }

        let sweep = end - start;
        let pieces = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
        let step = sweep / pieces as f32;
        // Control point distance for a cubic spanning `step` radians
        let k = 4.0 / 3.0 * (step / 4.0).tan() * radius;

        let mut a0 = start;
        for _ in 0..pieces {
            let a1 = a0 + step;
            let p0 = center.polar(radius, a0);
            let p3 = center.polar(radius, a1);
            let c1 = Point::new(p0.x - k * a0.sin(), p0.y + k * a0.cos());
            let c2 = Point::new(p3.x + k * a1.sin(), p3.y - k * a1.cos());
            self.inner.cubic_to(c1.x, c1.y, c2.x, c2.y, p3.x, p3.y);
            a0 = a1;
        }

        self.current = Some(center.polar(radius, end));
        self
    }

    pub fn close(mut self) -> Self {
        self.inner.close();
        self
    }

    /// Finish the path; `None` if it is empty or degenerate
    pub fn build(self) -> Option<tiny_skia::Path> {
        self.inner.finish()
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Full circle
pub fn circle(center: Point, radius: f32) -> Option<tiny_skia::Path> {
    tiny_skia::PathBuilder::from_circle(center.x, center.y, radius)
}

/// Pie slice: center, arc along the rim, back to center
pub fn wedge(center: Point, radius: f32, start: f32, end: f32) -> Option<tiny_skia::Path> {
    PathBuilder::new()
        .move_to(center.x, center.y)
        .arc(center, radius, start, end)
        .close()
        .build()
}
