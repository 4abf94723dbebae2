//! Text shaping using rustybuzz (HarfBuzz)
//!
//! Converts text strings into positioned glyph sequences with kerning and
//! ligatures applied. Label widths are measured from the shaped advances so
//! wrapping and drawing agree on every pixel.

use crate::font::FontFace;
use rustybuzz::{Face, UnicodeBuffer};

/// A shaped glyph with position information (font units)
#[derive(Debug, Clone, Copy)]
pub struct ShapedGlyph {
    pub glyph_id: u16,
    pub x_offset: i32,
    pub y_offset: i32,
    pub x_advance: i32,
    /// Byte index in the original string
    pub cluster: u32,
}

/// Result of shaping a text string
#[derive(Debug, Clone)]
pub struct ShapedText {
    /// Shaped glyphs in visual order
    pub glyphs: Vec<ShapedGlyph>,
    /// Total advance width in font units
    pub total_advance: i32,
    pub font_size: f32,
    pub units_per_em: u16,
}

impl ShapedText {
    /// Total width in pixels
    pub fn width_px(&self) -> f32 {
        self.scale(self.total_advance)
    }

    /// Scale a font-unit value to pixels
    pub fn scale(&self, value: i32) -> f32 {
        value as f32 * self.font_size / self.units_per_em as f32
    }
}

/// Text shaper using HarfBuzz via rustybuzz
#[derive(Debug, Default, Clone, Copy)]
pub struct TextShaper;

impl TextShaper {
    pub fn new() -> Self {
        Self
    }

    /// Shape a text string using the given font
    pub fn shape(&self, text: &str, font_face: &FontFace, font_size: f32) -> ShapedText {
        let face = match Face::from_slice(font_face.data(), font_face.face_index()) {
            Some(f) => f,
            None => return self.fallback_shape(text, font_face, font_size),
        };

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);

        let output = rustybuzz::shape(&face, &[], buffer);

        let mut glyphs = Vec::with_capacity(output.len());
        let mut total_advance = 0i32;

        for (info, pos) in output.glyph_infos().iter().zip(output.glyph_positions()) {
            glyphs.push(ShapedGlyph {
                glyph_id: info.glyph_id as u16,
                x_offset: pos.x_offset,
                y_offset: pos.y_offset,
                x_advance: pos.x_advance,
                cluster: info.cluster,
            });
            total_advance += pos.x_advance;
        }

        ShapedText {
            glyphs,
            total_advance,
            font_size,
            units_per_em: font_face.metrics().units_per_em,
        }
    }

    /// Per-character advances, used when rustybuzz cannot load the face
    fn fallback_shape(&self, text: &str, font_face: &FontFace, font_size: f32) -> ShapedText {
        tracing::debug!(
            family = font_face.family_name(),
            "rustybuzz rejected face, using unshaped advances"
        );

        let mut glyphs = Vec::new();
        let mut total_advance = 0i32;

        for (cluster, c) in text.char_indices() {
            let glyph_id = font_face.glyph_id(c).unwrap_or(0);
            let advance = font_face.glyph_advance(glyph_id).unwrap_or(500) as i32;

            glyphs.push(ShapedGlyph {
                glyph_id,
                x_offset: 0,
                y_offset: 0,
                x_advance: advance,
                cluster: cluster as u32,
            });

            total_advance += advance;
        }

        ShapedText {
            glyphs,
            total_advance,
            font_size,
            units_per_em: font_face.metrics().units_per_em,
        }
    }

    /// Width of `text` in pixels
    pub fn measure(&self, text: &str, font_face: &FontFace, font_size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.shape(text, font_face, font_size).width_px()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::tests::BOLD_FONT;

    #[test]
    fn test_width_grows_with_text() {
        let face = FontFace::from_data(BOLD_FONT.to_vec()).unwrap();
        let shaper = TextShaper::new();

        let short = shaper.measure("Win", &face, 18.0);
        let long = shaper.measure("Win a prize", &face, 18.0);
        assert!(short > 0.0);
        assert!(long > short);
        assert_eq!(shaper.measure("", &face, 18.0), 0.0);
    }

    #[test]
    fn test_width_scales_with_size() {
        let face = FontFace::from_data(BOLD_FONT.to_vec()).unwrap();
        let shaper = TextShaper::new();

        let small = shaper.measure("Jackpot", &face, 10.0);
        let large = shaper.measure("Jackpot", &face, 20.0);
        assert!((large - 2.0 * small).abs() < 0.01);
    }

    #[test]
    fn test_shaped_glyph_per_character_for_latin() {
        let face = FontFace::from_data(BOLD_FONT.to_vec()).unwrap();
        let shaped = TextShaper::new().shape("ABC", &face, 18.0);
        assert_eq!(shaped.glyphs.len(), 3);
        assert_eq!(shaped.glyphs[2].cluster, 2);
    }
}
