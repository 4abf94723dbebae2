//! Wheel style configuration
//!
//! Every field has a default, so a style document only needs the values it
//! overrides:
//!
//! ```toml
//! outer_radius = 220.0
//!
//! [[palette]]
//! from = "#1E88E5"
//! to = "#0D47A1"
//!
//! [label]
//! font_size = 16.0
//! ```

use crate::color::Color;
use crate::error::{CoreError, Result};
use crate::geometry::WheelGeometry;
use crate::gradient::ColorStopPair;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete visual description of a wheel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelStyle {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Radius of the segment disc
    pub outer_radius: f32,
    /// Radius of the hub
    pub inner_radius: f32,
    /// Extra radius of the backing plate and bezel beyond `outer_radius`
    pub plate_margin: f32,
    /// Wedge gradients, cycled by segment index
    pub palette: Vec<ColorStopPair>,
    pub plate_color: Color,
    pub hub_color: Color,
    /// Gloss color at the hub edge; it fades to transparent at the rim
    pub gloss_color: Color,
    pub segment_stroke: StrokeStyle,
    pub label: LabelStyle,
    pub bezel: BezelStyle,
    pub avatar: AvatarStyle,
    pub pointer: PointerStyle,
}

/// Stroke with an optional soft shadow
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub shadow: Option<ShadowStyle>,
}

/// Blurred shadow, no offset
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowStyle {
    pub color: Color,
    pub blur: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelWeight {
    Regular,
    #[default]
    Bold,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub font_size: f32,
    pub weight: LabelWeight,
    pub color: Color,
    pub line_height: f32,
    /// Radial space kept free between hub, label block and rim
    pub padding: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BezelStyle {
    /// Outer ring, drawn at `outer_radius + plate_margin`
    pub ring: StrokeStyle,
    /// Hub ring, drawn at `inner_radius - hub_ring_inset`
    pub hub_ring: StrokeStyle,
    pub hub_ring_inset: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarStyle {
    /// Avatar circle radius is `inner_radius - inset`
    pub inset: f32,
    /// Fill behind the avatar, visible through transparent pixels
    pub background: Color,
    pub edge: StrokeStyle,
    /// Upper bound on fetching a remote avatar, in milliseconds
    pub timeout_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerStyle {
    /// Pointer is drawn as a `size` x `size` square centered horizontally
    pub size: f32,
    /// Distance from the top of the pointer box to the rim
    pub rise: f32,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            outer_radius: 200.0,
            inner_radius: 50.0,
            plate_margin: 20.0,
            palette: vec![ColorStopPair::new(Color::from_hex(0xFF0000), Color::from_hex(0x000000))],
            plate_color: Color::from_hex(0x333333),
            hub_color: Color::from_hex(0x222222),
            gloss_color: Color::rgba8(255, 255, 255, 0.15),
            segment_stroke: StrokeStyle::default(),
            label: LabelStyle::default(),
            bezel: BezelStyle::default(),
            avatar: AvatarStyle::default(),
            pointer: PointerStyle::default(),
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::rgba8(255, 255, 255, 0.7),
            width: 2.0,
            shadow: Some(ShadowStyle {
                color: Color::rgba8(0, 0, 0, 0.3),
                blur: 4.0,
            }),
        }
    }
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            shadow: None,
        }
    }

    pub fn with_shadow(mut self, color: Color, blur: f32) -> Self {
        self.shadow = Some(ShadowStyle { color, blur });
        self
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 18.0,
            weight: LabelWeight::Bold,
            color: Color::WHITE,
            line_height: 24.0,
            padding: 40.0,
        }
    }
}

impl Default for BezelStyle {
    fn default() -> Self {
        Self {
            ring: StrokeStyle::solid(Color::BLACK, 10.0)
                .with_shadow(Color::rgba8(0, 0, 0, 0.4), 10.0),
            hub_ring: StrokeStyle::solid(Color::BLACK, 5.0),
            hub_ring_inset: 10.0,
        }
    }
}

impl Default for AvatarStyle {
    fn default() -> Self {
        Self {
            inset: 15.0,
            background: Color::from_hex(0x333333),
            edge: StrokeStyle::solid(Color::BLACK, 5.0),
            timeout_ms: 10_000,
        }
    }
}

impl Default for PointerStyle {
    fn default() -> Self {
        Self {
            size: 80.0,
            rise: 60.0,
        }
    }
}

impl AvatarStyle {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl WheelStyle {
    /// Parse a TOML style document; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let style: WheelStyle = toml::from_str(source)?;
        style.validate()?;
        Ok(style)
    }

    pub fn geometry(&self) -> WheelGeometry {
        WheelGeometry::centered(self.width, self.height, self.outer_radius, self.inner_radius)
    }

    /// Radius of the clipped avatar circle
    pub fn avatar_radius(&self) -> f32 {
        self.inner_radius - self.avatar.inset
    }

    /// Check that the style describes a drawable wheel
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(CoreError::InvalidStyle(msg)) };

        if self.width == 0 || self.height == 0 {
            return invalid(format!("canvas must be non-empty, got {}x{}", self.width, self.height));
        }
        if !(self.inner_radius > 0.0 && self.inner_radius < self.outer_radius) {
            return invalid(format!(
                "need 0 < inner_radius < outer_radius, got {} and {}",
                self.inner_radius, self.outer_radius
            ));
        }
        let room = self.width.min(self.height) as f32 / 2.0;
        if self.outer_radius + self.plate_margin > room {
            return invalid(format!(
                "plate radius {} does not fit a {}x{} canvas",
                self.outer_radius + self.plate_margin,
                self.width,
                self.height
            ));
        }
        if self.palette.is_empty() {
            return invalid("palette must have at least one entry".to_string());
        }
        if self.label.font_size <= 0.0 || self.label.line_height <= 0.0 {
            return invalid("label font_size and line_height must be positive".to_string());
        }
        if self.avatar_radius() <= 0.0 {
            return invalid(format!(
                "avatar inset {} leaves no room inside the hub",
                self.avatar.inset
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_valid() {
        let style = WheelStyle::default();
        style.validate().unwrap();
        assert_eq!(style.avatar_radius(), 35.0);
        assert_eq!(style.geometry().label_width(style.label.padding), 110.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let style = WheelStyle::from_toml_str(
            r##"
            outer_radius = 220.0

            [[palette]]
            from = "#1E88E5"
            to = "#0D47A1"

            [label]
            font_size = 16.0
            weight = "regular"
            "##,
        )
        .unwrap();

        assert_eq!(style.outer_radius, 220.0);
        assert_eq!(style.inner_radius, 50.0);
        assert_eq!(style.palette[0].from, Color::from_hex(0x1E88E5));
        assert_eq!(style.label.font_size, 16.0);
        assert_eq!(style.label.weight, LabelWeight::Regular);
        assert_eq!(style.label.line_height, 24.0);
        assert_eq!(style.bezel.ring.width, 10.0);
    }

    #[test]
    fn test_rejects_oversized_wheel() {
        let err = WheelStyle::from_toml_str("outer_radius = 290.0").unwrap_err();
        assert!(matches!(err, CoreError::InvalidStyle(_)));
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = WheelStyle::from_toml_str(r##"hub_color = "#nothex""##).unwrap_err();
        assert!(matches!(err, CoreError::StyleParse(_)));
    }

    #[test]
    fn test_rejects_empty_palette() {
        let style = WheelStyle {
            palette: Vec::new(),
            ..WheelStyle::default()
        };
        assert!(style.validate().is_err());
    }
}
