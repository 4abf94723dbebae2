//! Decoded raster images ready to be drawn

use crate::error::{PaintError, Result};
use tiny_skia::{ColorU8, Pixmap};

/// An RGBA image stored premultiplied, the way tiny-skia composites it
#[derive(Clone)]
pub struct RasterImage {
    pixmap: Pixmap,
}

impl RasterImage {
    /// Build from straight (non-premultiplied) RGBA8 pixels, row-major
    pub fn from_rgba(pixels: &[u8], width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(PaintError::InvalidImage(format!(
                "expected {} bytes for {}x{}, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        let mut pixmap =
            Pixmap::new(width, height).ok_or(PaintError::InvalidDimensions { width, height })?;

        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(pixels.chunks_exact(4)) {
            *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
        }

        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub(crate) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

impl std::fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_buffer() {
        let err = RasterImage::from_rgba(&[0; 12], 2, 2).unwrap_err();
        assert!(matches!(err, PaintError::InvalidImage(_)));
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = RasterImage::from_rgba(&[], 0, 0).unwrap_err();
        assert!(matches!(err, PaintError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_premultiplies() {
        let image = RasterImage::from_rgba(&[255, 0, 0, 128], 1, 1).unwrap();
        let px = image.pixmap().pixels()[0];
        assert_eq!(px.alpha(), 128);
        assert_eq!(px.red(), 128);
        assert_eq!(image.width(), 1);
    }
}
