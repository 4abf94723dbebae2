//! Fills - solid colors and gradients converted to tiny-skia paints

use prizewheel_core::{Color, Gradient, GradientStop};
use tiny_skia::{Paint, Shader, SpreadMode, Transform};

/// What to fill a shape with
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Gradient(Gradient),
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<Gradient> for Brush {
    fn from(gradient: Gradient) -> Self {
        Brush::Gradient(gradient)
    }
}

pub(crate) fn to_skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn to_skia_stops(stops: impl IntoIterator<Item = GradientStop>) -> Vec<tiny_skia::GradientStop> {
    stops
        .into_iter()
        .map(|stop| tiny_skia::GradientStop::new(stop.offset, to_skia_color(stop.color)))
        .collect()
}

impl Brush {
    /// Build the paint for this brush; `None` when the gradient is unusable
    pub(crate) fn to_paint(&self) -> Option<Paint<'static>> {
        let mut paint = Paint {
            anti_alias: true,
            ..Paint::default()
        };
        paint.shader = match self {
            Brush::Solid(color) => Shader::SolidColor(to_skia_color(*color)),
            Brush::Gradient(gradient) => gradient_shader(gradient)?,
        };
        Some(paint)
    }
}

fn gradient_shader(gradient: &Gradient) -> Option<Shader<'static>> {
    match gradient {
        Gradient::Linear { start, end, stops } => tiny_skia::LinearGradient::new(
            tiny_skia::Point::from_xy(start.x, start.y),
            tiny_skia::Point::from_xy(end.x, end.y),
            to_skia_stops(stops.iter().copied()),
            SpreadMode::Pad,
            Transform::identity(),
        ),
        Gradient::Radial {
            center,
            inner_radius,
            outer_radius,
            stops,
        } => {
            // tiny-skia radial gradients start at the center, so stops are
            // remapped onto the inner..outer band and the first color fills
            // the inner disc.
            if *outer_radius <= 0.0 {
                return None;
            }
            let inner = (inner_radius / outer_radius).clamp(0.0, 1.0);
            let first = stops.first()?;
            let remapped = std::iter::once(GradientStop::new(0.0, first.color)).chain(
                stops
                    .iter()
                    .map(|s| GradientStop::new(inner + s.offset * (1.0 - inner), s.color)),
            );
            let c = tiny_skia::Point::from_xy(center.x, center.y);
            tiny_skia::RadialGradient::new(
                c,
                c,
                *outer_radius,
                to_skia_stops(remapped),
                SpreadMode::Pad,
                Transform::identity(),
            )
        }
    }
}
