//! Canvas - a 2D drawing surface with a scoped state stack
//!
//! Canvas wraps a tiny-skia pixmap with a familiar immediate-mode API:
//! transforms, clipping and shadows are part of the current state, and
//! [`Canvas::save`] / [`Canvas::restore`] push and pop that state. Prefer
//! [`Canvas::with_state`], which restores even when the closure returns early.

use crate::brush::{to_skia_color, Brush};
use crate::error::{PaintError, Result};
use crate::path::circle;
use crate::raster::RasterImage;
use crate::shadow::{blur_radius, blur_rgba};
use crate::text::{text_path, TextAlign};
use prizewheel_core::{Color, Point, ShadowStyle};
use prizewheel_text::FontFace;
use std::io::Cursor;
use tiny_skia::{
    FillRule, FilterQuality, Mask, Paint, Path, Pixmap, PixmapPaint, Shader, Stroke, Transform,
};

/// Drawing state saved and restored as a unit
#[derive(Clone)]
struct CanvasState {
    transform: Transform,
    clip: Option<Mask>,
    shadow: Option<ShadowStyle>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            clip: None,
            shadow: None,
        }
    }
}

/// A raster drawing surface
pub struct Canvas {
    pixmap: Pixmap,
    state: CanvasState,
    stack: Vec<CanvasState>,
}

impl Canvas {
    /// Create a fully transparent canvas
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(PaintError::InvalidDimensions { width, height })?;
        Ok(Self {
            pixmap,
            state: CanvasState::default(),
            stack: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // State stack
    // ═══════════════════════════════════════════════════════════════════════════

    /// Push a copy of the current state
    pub fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    /// Pop the most recently saved state; unbalanced restores are ignored
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    /// Number of saved states
    pub fn state_depth(&self) -> usize {
        self.stack.len()
    }

    /// Run `f` between a save and its matching restore
    pub fn with_state<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save();
        let result = f(self);
        self.restore();
        result
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Transform, clip, shadow
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn translate(&mut self, x: f32, y: f32) {
        self.state.transform = self.state.transform.pre_translate(x, y);
    }

    /// Rotate clockwise by `angle` radians around the current origin
    pub fn rotate(&mut self, angle: f32) {
        self.state.transform = self.state.transform.pre_rotate(angle.to_degrees());
    }

    pub fn transform(&self) -> Transform {
        self.state.transform
    }

    /// Shadow applied to every fill and stroke until changed or restored
    pub fn set_shadow(&mut self, shadow: Option<ShadowStyle>) {
        self.state.shadow = shadow;
    }

    /// Intersect the clip region with `path` under the current transform
    pub fn clip_path(&mut self, path: &Path) {
        let transform = self.state.transform;
        match self.state.clip.as_mut() {
            Some(mask) => mask.intersect_path(path, FillRule::Winding, true, transform),
            None => {
                let Some(mut mask) = Mask::new(self.width(), self.height()) else {
                    return;
                };
                mask.fill_path(path, FillRule::Winding, true, transform);
                self.state.clip = Some(mask);
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Drawing
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn fill_path(&mut self, path: &Path, brush: impl Into<Brush>) {
        let brush = brush.into();
        let Some(paint) = brush.to_paint() else {
            tracing::trace!("Skipping fill with degenerate brush {:?}", brush);
            return;
        };
        self.draw_shadow(|pixmap, paint, transform| {
            pixmap.fill_path(path, paint, FillRule::Winding, transform, None);
        });
        let transform = self.state.transform;
        self.pixmap.fill_path(
            path,
            &paint,
            FillRule::Winding,
            transform,
            self.state.clip.as_ref(),
        );
    }

    pub fn stroke_path(&mut self, path: &Path, color: Color, width: f32) {
        if width <= 0.0 {
            return;
        }
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.draw_shadow(|pixmap, paint, transform| {
            pixmap.stroke_path(path, paint, &stroke, transform, None);
        });
        let Some(paint) = Brush::Solid(color).to_paint() else {
            return;
        };
        let transform = self.state.transform;
        self.pixmap
            .stroke_path(path, &paint, &stroke, transform, self.state.clip.as_ref());
    }

    pub fn fill_circle(&mut self, center: Point, radius: f32, brush: impl Into<Brush>) {
        if let Some(path) = circle(center, radius) {
            self.fill_path(&path, brush);
        }
    }

    pub fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        if let Some(path) = circle(center, radius) {
            self.stroke_path(&path, color, width);
        }
    }

    /// Draw `text` with its baseline at `y`, aligned on `x`
    #[allow(clippy::too_many_arguments)]
    pub fn fill_text(
        &mut self,
        text: &str,
        face: &FontFace,
        font_size: f32,
        x: f32,
        y: f32,
        align: TextAlign,
        color: Color,
    ) {
        if let Some(path) = text_path(text, face, font_size, x, y, align) {
            self.fill_path(&path, color);
        }
    }

    /// Draw `image` scaled into the `width` x `height` box at (x, y)
    pub fn draw_image(&mut self, image: &RasterImage, x: f32, y: f32, width: f32, height: f32) {
        let sx = width / image.width() as f32;
        let sy = height / image.height() as f32;
        let transform = self.state.transform.pre_translate(x, y).pre_scale(sx, sy);
        let paint = PixmapPaint {
            quality: FilterQuality::Bicubic,
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            image.pixmap().as_ref(),
            &paint,
            transform,
            self.state.clip.as_ref(),
        );
    }

    /// Draw another canvas at (x, y), unscaled
    pub fn draw_canvas(&mut self, other: &Canvas, x: f32, y: f32) {
        let transform = self.state.transform.pre_translate(x, y);
        self.pixmap.draw_pixmap(
            0,
            0,
            other.pixmap.as_ref(),
            &PixmapPaint::default(),
            transform,
            self.state.clip.as_ref(),
        );
    }

    /// Render the current shadow of a shape drawn by `draw`
    fn draw_shadow(&mut self, draw: impl FnOnce(&mut Pixmap, &Paint, Transform)) {
        let Some(shadow) = self.state.shadow else {
            return;
        };
        if shadow.color.a <= 0.0 {
            return;
        }
        let Some(mut layer) = Pixmap::new(self.width(), self.height()) else {
            return;
        };
        let mut paint = Paint {
            anti_alias: true,
            ..Paint::default()
        };
        paint.shader = Shader::SolidColor(to_skia_color(shadow.color));
        draw(&mut layer, &paint, self.state.transform);

        let (width, height) = (layer.width(), layer.height());
        blur_rgba(layer.data_mut(), width, height, blur_radius(&shadow));

        self.pixmap.draw_pixmap(
            0,
            0,
            layer.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            self.state.clip.as_ref(),
        );
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Output
    // ═══════════════════════════════════════════════════════════════════════════

    /// Straight-alpha color at (x, y), `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // tiny-skia only bounds-checks the flat index
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// All pixels as straight-alpha RGBA8, row-major
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Encode the canvas as PNG
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let (width, height) = (self.width(), self.height());
        let image = image::RgbaImage::from_raw(width, height, self.to_rgba8())
            .ok_or(PaintError::InvalidDimensions { width, height })?;

        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        tracing::debug!("Encoded {}x{} canvas to {} PNG bytes", width, height, bytes.len());
        Ok(bytes)
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("state_depth", &self.state_depth())
            .finish()
    }
}
