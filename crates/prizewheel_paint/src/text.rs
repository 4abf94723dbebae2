//! Text as filled glyph outlines
//!
//! Glyphs are shaped with rustybuzz, then each outline is appended to one
//! tiny-skia path in pixel space. Font units point up, canvas y points down.

use prizewheel_text::{FontFace, TextShaper};
use ttf_parser::OutlineBuilder;

/// Horizontal placement of a text run relative to its anchor x
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Collects glyph outlines into a single path
struct GlyphPathBuilder {
    builder: tiny_skia::PathBuilder,
    origin_x: f32,
    origin_y: f32,
    scale: f32,
}

impl GlyphPathBuilder {
    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x * self.scale, self.origin_y - y * self.scale)
    }
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Outline of `text` with its alphabetic baseline at `y`.
///
/// Returns `None` when nothing would be drawn (empty text, whitespace only).
pub(crate) fn text_path(
    text: &str,
    face: &FontFace,
    font_size: f32,
    x: f32,
    y: f32,
    align: TextAlign,
) -> Option<tiny_skia::Path> {
    if text.is_empty() {
        return None;
    }
    let shaped = TextShaper::new().shape(text, face, font_size);
    let width = shaped.width_px();
    let left = match align {
        TextAlign::Left => x,
        TextAlign::Center => x - width / 2.0,
        TextAlign::Right => x - width,
    };

    let mut glyphs = GlyphPathBuilder {
        builder: tiny_skia::PathBuilder::new(),
        origin_x: left,
        origin_y: y,
        scale: shaped.scale(1),
    };

    let mut pen = 0i32;
    for glyph in &shaped.glyphs {
        glyphs.origin_x = left + shaped.scale(pen + glyph.x_offset);
        glyphs.origin_y = y - shaped.scale(glyph.y_offset);
        face.outline_glyph(glyph.glyph_id, &mut glyphs);
        pen += glyph.x_advance;
    }

    glyphs.builder.finish()
}
