//! Font loading
//!
//! Provides font parsing via ttf-parser and font metric extraction.

use crate::{Result, TextError};
use std::sync::Arc;

/// Font weight variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    Thin = 100,
    Light = 300,
    #[default]
    Regular = 400,
    Medium = 500,
    SemiBold = 600,
    Bold = 700,
    Black = 900,
}

impl FontWeight {
    /// Convert from numeric weight (100-900)
    pub fn from_number(weight: u16) -> Self {
        match weight {
            0..=199 => FontWeight::Thin,
            200..=349 => FontWeight::Light,
            350..=449 => FontWeight::Regular,
            450..=549 => FontWeight::Medium,
            550..=649 => FontWeight::SemiBold,
            650..=799 => FontWeight::Bold,
            _ => FontWeight::Black,
        }
    }

    pub fn to_number(self) -> u16 {
        self as u16
    }
}

/// Font style (normal or italic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// Font metrics in font units
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// Units per em (typically 1000 or 2048)
    pub units_per_em: u16,
    /// Distance from baseline to top of tallest glyph
    pub ascender: i16,
    /// Distance from baseline to bottom, typically negative
    pub descender: i16,
    pub line_gap: i16,
}

/// A parsed font face
pub struct FontFace {
    /// Raw font data (kept alive for ttf-parser and rustybuzz)
    data: Arc<Vec<u8>>,
    /// Face index within the font file (for TTC files)
    face_index: u32,
    metrics: FontMetrics,
    family_name: String,
    weight: FontWeight,
    style: FontStyle,
}

impl FontFace {
    /// Load a font from raw TTF/OTF data (uses face index 0)
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_with_index(data, 0)
    }

    /// Load a font from raw TTF/OTF data with a specific face index
    pub fn from_data_with_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let data = Arc::new(data);

        let face = ttf_parser::Face::parse(&data, face_index)
            .map_err(|e| TextError::FontParseError(format!("{:?}", e)))?;

        let metrics = FontMetrics {
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
            line_gap: face.line_gap(),
        };

        // The first FAMILY record may be a Mac Roman entry ttf-parser cannot decode
        let family_name = face
            .names()
            .into_iter()
            .filter(|n| n.name_id == ttf_parser::name_id::FAMILY)
            .find_map(|n| n.to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        let weight = FontWeight::from_number(face.weight().to_number());

        let style = if face.is_italic() {
            FontStyle::Italic
        } else if face.is_oblique() {
            FontStyle::Oblique
        } else {
            FontStyle::Normal
        };

        Ok(Self {
            data,
            face_index,
            metrics,
            family_name,
            weight,
            style,
        })
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Raw font data for shaping
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    /// Re-parses on every call; the parse is a table directory lookup
    fn as_ttf_face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, self.face_index).ok()
    }

    /// Get glyph ID for a character
    pub fn glyph_id(&self, c: char) -> Option<u16> {
        self.as_ttf_face()
            .and_then(|face| face.glyph_index(c))
            .map(|id| id.0)
    }

    /// Horizontal advance for a glyph in font units
    pub fn glyph_advance(&self, glyph_id: u16) -> Option<u16> {
        self.as_ttf_face()
            .and_then(|face| face.glyph_hor_advance(ttf_parser::GlyphId(glyph_id)))
    }

    /// Feed the glyph outline (font units, y up) into `builder`.
    ///
    /// Returns false for glyphs without an outline, such as spaces.
    pub fn outline_glyph(
        &self,
        glyph_id: u16,
        builder: &mut dyn ttf_parser::OutlineBuilder,
    ) -> bool {
        self.as_ttf_face()
            .and_then(|face| face.outline_glyph(ttf_parser::GlyphId(glyph_id), builder))
            .is_some()
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family_name", &self.family_name)
            .field("weight", &self.weight)
            .field("style", &self.style)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const BOLD_FONT: &[u8] =
        include_bytes!("../../prizewheel/assets/fonts/DejaVuSans-Bold.ttf");
    pub(crate) const REGULAR_FONT: &[u8] =
        include_bytes!("../../prizewheel/assets/fonts/DejaVuSans.ttf");

    #[test]
    fn test_parse_bundled_faces() {
        let bold = FontFace::from_data(BOLD_FONT.to_vec()).unwrap();
        assert_eq!(bold.family_name(), "DejaVu Sans");
        assert_eq!(bold.weight(), FontWeight::Bold);
        assert_eq!(bold.style(), FontStyle::Normal);

        let regular = FontFace::from_data(REGULAR_FONT.to_vec()).unwrap();
        assert_eq!(regular.weight(), FontWeight::Regular);
        assert!(regular.metrics().units_per_em > 0);
    }

    #[test]
    fn test_invalid_data_is_rejected() {
        let err = FontFace::from_data(vec![0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, TextError::FontParseError(_)));
    }

    #[test]
    fn test_space_has_advance_but_no_outline() {
        struct Count(usize);
        impl ttf_parser::OutlineBuilder for Count {
            fn move_to(&mut self, _: f32, _: f32) {
                self.0 += 1;
            }
            fn line_to(&mut self, _: f32, _: f32) {}
            fn quad_to(&mut self, _: f32, _: f32, _: f32, _: f32) {}
            fn curve_to(&mut self, _: f32, _: f32, _: f32, _: f32, _: f32, _: f32) {}
            fn close(&mut self) {}
        }

        let face = FontFace::from_data(BOLD_FONT.to_vec()).unwrap();
        let space = face.glyph_id(' ').unwrap();
        assert!(face.glyph_advance(space).unwrap() > 0);

        let mut count = Count(0);
        assert!(!face.outline_glyph(space, &mut count));

        let a = face.glyph_id('A').unwrap();
        assert!(face.outline_glyph(a, &mut count));
        assert!(count.0 > 0);
    }

    #[test]
    fn test_weight_buckets() {
        assert_eq!(FontWeight::from_number(400), FontWeight::Regular);
        assert_eq!(FontWeight::from_number(700), FontWeight::Bold);
        assert_eq!(FontWeight::Bold.to_number(), 700);
    }
}
