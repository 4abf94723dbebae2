//! Gradient descriptions
//!
//! These are backend-independent; the paint crate turns them into shaders.

use crate::color::Color;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

pub type GradientStops = SmallVec<[GradientStop; 4]>;

/// Gradient type
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    /// Linear gradient between two points, padded with the end colors
    Linear {
        start: Point,
        end: Point,
        stops: GradientStops,
    },
    /// Radial gradient between two concentric circles.
    ///
    /// Inside `inner_radius` the first stop color is used.
    Radial {
        center: Point,
        inner_radius: f32,
        outer_radius: f32,
        stops: GradientStops,
    },
}

impl Gradient {
    /// Create a simple linear gradient with two colors
    pub fn linear(start: Point, end: Point, from: Color, to: Color) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: smallvec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    /// Create a two-color radial gradient running from `inner_radius` to `outer_radius`
    pub fn radial(
        center: Point,
        inner_radius: f32,
        outer_radius: f32,
        from: Color,
        to: Color,
    ) -> Self {
        Gradient::Radial {
            center,
            inner_radius,
            outer_radius,
            stops: smallvec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } | Gradient::Radial { stops, .. } => stops,
        }
    }
}

/// One palette entry: the two colors of a wedge gradient
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStopPair {
    pub from: Color,
    pub to: Color,
}

impl ColorStopPair {
    pub const fn new(from: Color, to: Color) -> Self {
        Self { from, to }
    }

    /// Linear gradient along `start -> end` using this pair
    pub fn linear(&self, start: Point, end: Point) -> Gradient {
        Gradient::linear(start, end, self.from, self.to)
    }
}

/// Palette entry for segment `index`, cycling through `palette`
pub fn palette_entry(palette: &[ColorStopPair], index: usize) -> Option<&ColorStopPair> {
    if palette.is_empty() {
        None
    } else {
        palette.get(index % palette.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles_by_index() {
        let red = ColorStopPair::new(Color::RED, Color::BLACK);
        let white = ColorStopPair::new(Color::WHITE, Color::BLACK);
        let palette = [red, white];

        assert_eq!(palette_entry(&palette, 0), Some(&red));
        assert_eq!(palette_entry(&palette, 1), Some(&white));
        assert_eq!(palette_entry(&palette, 4), Some(&red));
        assert_eq!(palette_entry(&[], 3), None);
    }

    #[test]
    fn test_stop_offsets_are_clamped() {
        let stop = GradientStop::new(1.5, Color::RED);
        assert_eq!(stop.offset, 1.0);
    }

    #[test]
    fn test_pair_builds_two_stop_linear() {
        let pair = ColorStopPair::new(Color::RED, Color::BLACK);
        let gradient = pair.linear(Point::ZERO, Point::new(10.0, 0.0));
        let stops = gradient.stops();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].color, Color::RED);
        assert_eq!(stops[1].offset, 1.0);
    }
}
