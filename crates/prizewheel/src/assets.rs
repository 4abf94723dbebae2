//! Bundled assets
//!
//! The label fonts, the pointer graphic and the fallback avatar are compiled
//! into the binary. [`WheelAssets::from_dir`] loads the same files from an
//! asset directory with the bundled layout instead.

use crate::error::{Result, WheelError};
use prizewheel_core::LabelWeight;
use prizewheel_image::ImageData;
use prizewheel_paint::RasterImage;
use prizewheel_text::{register_global, FontFace, FontRegistry};
use std::path::Path;
use std::sync::Arc;

/// Logical name of the bold label font
pub const BOLD_FONT_NAME: &str = "WheelSans-Bold";
/// Logical name of the regular label font
pub const REGULAR_FONT_NAME: &str = "WheelSans-Regular";

const BOLD_FONT_FILE: &str = "fonts/DejaVuSans-Bold.ttf";
const REGULAR_FONT_FILE: &str = "fonts/DejaVuSans.ttf";
const POINTER_FILE: &str = "pointer.png";
const FALLBACK_AVATAR_FILE: &str = "fallback.png";

static BOLD_FONT: &[u8] = include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf");
static REGULAR_FONT: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");
static POINTER_PNG: &[u8] = include_bytes!("../assets/pointer.png");
static FALLBACK_AVATAR_PNG: &[u8] = include_bytes!("../assets/fallback.png");

/// Register the bundled label fonts in the process-wide registry.
///
/// Safe to call any number of times; only the first call does any work.
pub fn register_bundled_fonts() -> Result<&'static FontRegistry> {
    Ok(register_global([
        (BOLD_FONT_NAME, BOLD_FONT),
        (REGULAR_FONT_NAME, REGULAR_FONT),
    ])?)
}

/// Decoded fonts and images the renderers draw with
#[derive(Debug, Clone)]
pub struct WheelAssets {
    bold: Arc<FontFace>,
    regular: Arc<FontFace>,
    pointer: RasterImage,
    fallback_avatar: RasterImage,
}

impl WheelAssets {
    /// Assets compiled into the crate; fonts come from the global registry
    pub fn bundled() -> Result<Self> {
        let registry = register_bundled_fonts()?;
        let assets = Self {
            bold: registry.require(BOLD_FONT_NAME)?,
            regular: registry.require(REGULAR_FONT_NAME)?,
            pointer: decode_raster(POINTER_PNG, POINTER_FILE)?,
            fallback_avatar: decode_raster(FALLBACK_AVATAR_PNG, FALLBACK_AVATAR_FILE)?,
        };
        tracing::debug!("Loaded bundled wheel assets");
        Ok(assets)
    }

    /// Load assets from `dir`, laid out like the bundled `assets/` directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read(&path)
                .map_err(|e| WheelError::Asset(format!("{}: {}", path.display(), e)))
        };

        let assets = Self {
            bold: Arc::new(FontFace::from_data(read(BOLD_FONT_FILE)?)?),
            regular: Arc::new(FontFace::from_data(read(REGULAR_FONT_FILE)?)?),
            pointer: decode_raster(&read(POINTER_FILE)?, POINTER_FILE)?,
            fallback_avatar: decode_raster(&read(FALLBACK_AVATAR_FILE)?, FALLBACK_AVATAR_FILE)?,
        };
        tracing::debug!("Loaded wheel assets from {}", dir.display());
        Ok(assets)
    }

    /// Label font for `weight`
    pub fn font(&self, weight: LabelWeight) -> &FontFace {
        match weight {
            LabelWeight::Bold => &self.bold,
            LabelWeight::Regular => &self.regular,
        }
    }

    pub fn pointer(&self) -> &RasterImage {
        &self.pointer
    }

    pub fn fallback_avatar(&self) -> &RasterImage {
        &self.fallback_avatar
    }
}

/// Decode an encoded image into a drawable raster
pub(crate) fn decode_raster(bytes: &[u8], name: &str) -> Result<RasterImage> {
    let data = ImageData::from_bytes(bytes)
        .map_err(|e| WheelError::Asset(format!("{}: {}", name, e)))?;
    let (width, height) = data.dimensions();
    Ok(RasterImage::from_rgba(data.pixels(), width, height)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prizewheel_text::FontWeight;

    #[test]
    fn test_bundled_assets_decode() {
        let assets = WheelAssets::bundled().unwrap();
        assert_eq!(assets.pointer().width(), 80);
        assert_eq!(assets.pointer().height(), 80);
        assert_eq!(assets.fallback_avatar().width(), 128);
        assert_eq!(assets.font(LabelWeight::Bold).weight(), FontWeight::Bold);
        assert_eq!(assets.font(LabelWeight::Regular).weight(), FontWeight::Regular);
    }

    #[test]
    fn test_bundled_fonts_registered_once() {
        let first = register_bundled_fonts().unwrap();
        let second = register_bundled_fonts().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(first.get(BOLD_FONT_NAME).is_some());
        assert!(first.get(REGULAR_FONT_NAME).is_some());
    }

    #[test]
    fn test_from_dir_matches_bundled_layout() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let assets = WheelAssets::from_dir(&dir).unwrap();
        assert_eq!(assets.pointer().width(), 80);
    }

    #[test]
    fn test_from_dir_missing_file() {
        let err = WheelAssets::from_dir("/nonexistent/wheel-assets").unwrap_err();
        assert!(matches!(err, WheelError::Asset(msg) if msg.contains("DejaVuSans-Bold.ttf")));
    }

    #[test]
    fn test_decode_raster_rejects_garbage() {
        assert!(matches!(
            decode_raster(b"not a png", "broken.png"),
            Err(WheelError::Asset(_))
        ));
    }
}
