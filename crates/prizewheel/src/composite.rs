//! Composite renderer
//!
//! Turns the winner to the top of the wheel and dresses the face with a bezel,
//! the avatar hub and the pointer.

use crate::assets::WheelAssets;
use crate::avatar::{AvatarImage, AvatarLoader};
use crate::error::{Result, WheelError};
use crate::segments::{segment_step, SegmentRenderer};
use prizewheel_core::{rotate_to_winner, Point, Segment, StrokeStyle, WheelStyle};
use prizewheel_paint::{circle, Canvas};
use std::sync::Arc;

/// Renders the finished wheel image
#[derive(Debug, Clone)]
pub struct CompositeRenderer {
    segments: SegmentRenderer,
    avatars: AvatarLoader,
}

impl CompositeRenderer {
    pub fn new(style: WheelStyle, assets: Arc<WheelAssets>) -> Result<Self> {
        let avatars = AvatarLoader::new(Arc::clone(&assets), style.avatar.timeout());
        Ok(Self {
            segments: SegmentRenderer::new(style, assets)?,
            avatars,
        })
    }

    /// Default style with the bundled assets
    pub fn bundled() -> Result<Self> {
        Self::new(WheelStyle::default(), Arc::new(WheelAssets::bundled()?))
    }

    pub fn style(&self) -> &WheelStyle {
        self.segments.style()
    }

    pub fn segment_renderer(&self) -> &SegmentRenderer {
        &self.segments
    }

    pub fn avatar_loader(&self) -> &AvatarLoader {
        &self.avatars
    }

    /// Render the wheel with the winner under the pointer, as PNG.
    ///
    /// `avatar` may be an `http(s)` URL, a `data:` URI or a file path. A
    /// broken avatar is replaced by the bundled fallback, never an error.
    pub async fn render(&self, segments: &[Segment], avatar: &str) -> Result<Vec<u8>> {
        if segments.is_empty() {
            return Err(WheelError::NoSegments);
        }
        let avatar = self.avatars.load(avatar).await;
        let canvas = self.compose(segments, &avatar)?;
        Ok(canvas.encode_png()?)
    }

    /// Draw the full image with an already loaded avatar
    pub fn compose(&self, segments: &[Segment], avatar: &AvatarImage) -> Result<Canvas> {
        let step = segment_step(segments.len())?;
        let style = self.style();
        let geometry = style.geometry();
        let center = geometry.center;

        let rotated = rotate_to_winner(segments);
        let face = self.segments.draw(&rotated)?;

        let mut canvas = Canvas::new(style.width, style.height)?;

        // Center the first wedge on 12 o'clock
        canvas.with_state(|c| {
            c.translate(center.x, center.y);
            c.rotate(-step / 2.0);
            c.translate(-center.x, -center.y);
            c.draw_canvas(&face, 0.0, 0.0);
        });

        let bezel = &style.bezel;
        stroke_ring(
            &mut canvas,
            center,
            geometry.outer_radius + style.plate_margin,
            &bezel.ring,
        );
        stroke_ring(
            &mut canvas,
            center,
            geometry.inner_radius - bezel.hub_ring_inset,
            &bezel.hub_ring,
        );

        let radius = style.avatar_radius();
        if let Some(clip) = circle(center, radius) {
            canvas.with_state(|c| {
                c.clip_path(&clip);
                c.fill_path(&clip, style.avatar.background);
                c.draw_image(
                    &avatar.image,
                    center.x - radius,
                    center.y - radius,
                    radius * 2.0,
                    radius * 2.0,
                );
            });
        }
        stroke_ring(&mut canvas, center, radius, &style.avatar.edge);

        let pointer = &style.pointer;
        canvas.with_state(|c| {
            c.translate(
                center.x - pointer.size / 2.0,
                center.y - geometry.outer_radius - pointer.rise,
            );
            c.draw_image(self.segments.assets().pointer(), 0.0, 0.0, pointer.size, pointer.size);
        });

        tracing::debug!(
            "Composited {} segments, winner '{}'",
            segments.len(),
            rotated.first().map_or("", |s| s.label.as_str())
        );
        Ok(canvas)
    }
}

/// Stroke a circle with the style's optional shadow scoped to this stroke
fn stroke_ring(canvas: &mut Canvas, center: Point, radius: f32, stroke: &StrokeStyle) {
    canvas.with_state(|c| {
        c.set_shadow(stroke.shadow);
        c.stroke_circle(center, radius, stroke.color, stroke.width);
    });
}
