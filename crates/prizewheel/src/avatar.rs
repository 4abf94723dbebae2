//! Avatar loading with fallback
//!
//! Loading never fails: any problem with the requested source is logged and
//! the bundled fallback avatar is returned in its place.

use crate::assets::WheelAssets;
use crate::error::Result;
use prizewheel_image::{ImageData, ImageSource};
use prizewheel_paint::RasterImage;
use std::sync::Arc;
use std::time::Duration;

/// Where the avatar pixels came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarOrigin {
    /// Loaded from the requested source (its description)
    Remote(String),
    /// The bundled fallback image
    Fallback,
}

/// A drawable avatar, always usable
#[derive(Debug, Clone)]
pub struct AvatarImage {
    pub image: RasterImage,
    pub origin: AvatarOrigin,
}

impl AvatarImage {
    pub fn is_fallback(&self) -> bool {
        self.origin == AvatarOrigin::Fallback
    }
}

/// Loads avatars from URLs, data URIs or files
#[derive(Debug, Clone)]
pub struct AvatarLoader {
    assets: Arc<WheelAssets>,
    timeout: Duration,
}

impl AvatarLoader {
    pub fn new(assets: Arc<WheelAssets>, timeout: Duration) -> Self {
        Self { assets, timeout }
    }

    /// The bundled fallback avatar
    pub fn fallback(&self) -> AvatarImage {
        AvatarImage {
            image: self.assets.fallback_avatar().clone(),
            origin: AvatarOrigin::Fallback,
        }
    }

    /// Load `reference`, substituting the fallback on any failure
    pub async fn load(&self, reference: &str) -> AvatarImage {
        let source = ImageSource::parse(reference);
        let description = source.describe();

        match self.try_load(source).await {
            Ok(image) => {
                tracing::debug!(
                    "Loaded avatar {} ({}x{})",
                    description,
                    image.width(),
                    image.height()
                );
                AvatarImage {
                    image,
                    origin: AvatarOrigin::Remote(description),
                }
            }
            Err(e) => {
                tracing::warn!("Failed to load avatar {}, using fallback: {}", description, e);
                self.fallback()
            }
        }
    }

    async fn try_load(&self, source: ImageSource) -> Result<RasterImage> {
        let data = ImageData::load_async(source, self.timeout).await?;
        let (width, height) = data.dimensions();
        Ok(RasterImage::from_rgba(data.pixels(), width, height)?)
    }
}
