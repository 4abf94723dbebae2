//! Segment renderer
//!
//! Draws the wheel face: backing plate, one gradient wedge per segment with a
//! wrapped label along its bisector, the hub, and a radial gloss.

use crate::assets::WheelAssets;
use crate::error::{Result, WheelError};
use prizewheel_core::{angle_step, palette_entry, Gradient, Segment, WheelGeometry, WheelStyle};
use prizewheel_paint::{wedge, Canvas, TextAlign};
use prizewheel_text::{LayoutOptions, SizedFace, TextLayout};
use std::sync::Arc;

/// How [`SegmentRenderer::render`] hands back its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Keep the canvas for further compositing
    Surface,
    /// Encode to PNG
    #[default]
    Png,
}

/// A rendered wheel face
#[derive(Debug)]
pub enum WheelOutput {
    Surface(Canvas),
    Png(Vec<u8>),
}

impl WheelOutput {
    /// PNG bytes, encoding the surface if needed
    pub fn into_png(self) -> Result<Vec<u8>> {
        match self {
            WheelOutput::Surface(canvas) => Ok(canvas.encode_png()?),
            WheelOutput::Png(bytes) => Ok(bytes),
        }
    }

    /// The live canvas, if this output holds one
    pub fn into_surface(self) -> Option<Canvas> {
        match self {
            WheelOutput::Surface(canvas) => Some(canvas),
            WheelOutput::Png(_) => None,
        }
    }
}

/// Renders segments into a wheel face
#[derive(Debug, Clone)]
pub struct SegmentRenderer {
    style: WheelStyle,
    assets: Arc<WheelAssets>,
}

impl SegmentRenderer {
    /// Build a renderer; fails if `style` does not describe a drawable wheel
    pub fn new(style: WheelStyle, assets: Arc<WheelAssets>) -> Result<Self> {
        style.validate()?;
        Ok(Self { style, assets })
    }

    /// Default style with the bundled assets
    pub fn bundled() -> Result<Self> {
        Self::new(WheelStyle::default(), Arc::new(WheelAssets::bundled()?))
    }

    pub fn style(&self) -> &WheelStyle {
        &self.style
    }

    pub fn assets(&self) -> &Arc<WheelAssets> {
        &self.assets
    }

    /// Render `segments` in wheel order, segment 0 starting at 12 o'clock
    pub fn render(&self, segments: &[Segment], mode: OutputMode) -> Result<WheelOutput> {
        let canvas = self.draw(segments)?;
        match mode {
            OutputMode::Surface => Ok(WheelOutput::Surface(canvas)),
            OutputMode::Png => Ok(WheelOutput::Png(canvas.encode_png()?)),
        }
    }

    /// Draw the wheel face onto a fresh transparent canvas
    pub fn draw(&self, segments: &[Segment]) -> Result<Canvas> {
        if segments.is_empty() {
            return Err(WheelError::NoSegments);
        }
        let style = &self.style;
        let geometry = style.geometry();
        let mut canvas = Canvas::new(style.width, style.height)?;

        tracing::debug!(
            "Rendering {} segments on a {}x{} canvas",
            segments.len(),
            style.width,
            style.height
        );

        canvas.fill_circle(
            geometry.center,
            geometry.outer_radius + style.plate_margin,
            style.plate_color,
        );

        for (index, (segment, span)) in segments
            .iter()
            .zip(WheelGeometry::spans(segments.len()))
            .enumerate()
        {
            let Some(path) = wedge(geometry.center, geometry.outer_radius, span.start, span.end)
            else {
                continue;
            };

            if let Some(colors) = palette_entry(&style.palette, index) {
                let (start, end) = geometry.gradient_axis(&span);
                canvas.fill_path(&path, colors.linear(start, end));
            }

            let stroke = &style.segment_stroke;
            canvas.with_state(|c| {
                c.set_shadow(stroke.shadow);
                c.stroke_path(&path, stroke.color, stroke.width);
            });

            canvas.with_state(|c| {
                c.translate(geometry.center.x, geometry.center.y);
                c.rotate(span.bisector());
                self.draw_label(c, &geometry, &segment.label);
            });
        }

        canvas.fill_circle(geometry.center, geometry.inner_radius, style.hub_color);
        canvas.fill_circle(
            geometry.center,
            geometry.outer_radius,
            Gradient::radial(
                geometry.center,
                geometry.inner_radius,
                geometry.outer_radius,
                style.gloss_color,
                style.gloss_color.with_alpha(0.0),
            ),
        );

        Ok(canvas)
    }

    /// Wrapped label centered on the wedge's mid radius, in the rotated frame
    fn draw_label(&self, canvas: &mut Canvas, geometry: &WheelGeometry, text: &str) {
        let label = &self.style.label;
        let face = self.assets.font(label.weight);
        let anchor = geometry.label_anchor();
        let layout = TextLayout::new(
            text,
            anchor.y,
            LayoutOptions {
                max_width: geometry.label_width(label.padding),
                line_height: label.line_height,
            },
            &SizedFace {
                face,
                size: label.font_size,
            },
        );

        for line in layout.visible_lines() {
            canvas.fill_text(
                &line.text,
                face,
                label.font_size,
                anchor.x,
                line.baseline,
                TextAlign::Center,
                label.color,
            );
        }
    }
}

/// Angle each of `count` segments covers, or [`WheelError::NoSegments`]
pub(crate) fn segment_step(count: usize) -> Result<f32> {
    if count == 0 {
        return Err(WheelError::NoSegments);
    }
    Ok(angle_step(count))
}
