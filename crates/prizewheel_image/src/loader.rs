//! Image loading and data management

use crate::error::{ImageError, Result};
use crate::source::ImageSource;
use base64::Engine;
use image::{DynamicImage, GenericImageView};
use std::time::Duration;

/// Decoded image data, straight-alpha RGBA8
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pixels: Vec<u8>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl ImageData {
    /// Create ImageData from raw RGBA pixels
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected_len = width as usize * height as usize * 4;
        if pixels.len() != expected_len {
            return Err(ImageError::Decode(format!(
                "Invalid pixel data length: expected {}, got {}",
                expected_len,
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Load an image from a source (synchronous)
    ///
    /// URL sources fail here; use [`ImageData::load_async`] for them.
    pub fn load(source: ImageSource) -> Result<Self> {
        match source {
            ImageSource::File(path) => {
                let data = std::fs::read(&path)
                    .map_err(|e| ImageError::FileLoad(format!("{}: {}", path.display(), e)))?;
                Self::from_bytes(&data)
            }

            ImageSource::Base64(data) => Self::from_base64(&data),

            ImageSource::Bytes(data) => Self::from_bytes(&data),

            ImageSource::Url(url) => Err(ImageError::Network(format!(
                "URL sources need load_async: {}",
                url
            ))),
        }
    }

    /// Load an image from any source, giving up after `timeout`
    pub async fn load_async(source: ImageSource, timeout: Duration) -> Result<Self> {
        tokio::time::timeout(timeout, Self::load_async_inner(source, timeout))
            .await
            .map_err(|_| ImageError::Timeout(timeout))?
    }

    async fn load_async_inner(source: ImageSource, timeout: Duration) -> Result<Self> {
        match source {
            ImageSource::Url(url) => {
                let client = reqwest::Client::builder()
                    .timeout(timeout)
                    .build()
                    .map_err(|e| ImageError::Network(e.to_string()))?;

                let response = client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| ImageError::Network(e.to_string()))?;

                if !response.status().is_success() {
                    return Err(ImageError::Network(format!(
                        "HTTP error: {}",
                        response.status()
                    )));
                }

                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| ImageError::Network(e.to_string()))?;

                tracing::debug!("Fetched {} bytes from {}", bytes.len(), url);
                Self::from_bytes(&bytes)
            }

            ImageSource::File(path) => {
                let data = tokio::fs::read(&path)
                    .await
                    .map_err(|e| ImageError::FileLoad(format!("{}: {}", path.display(), e)))?;
                Self::from_bytes(&data)
            }

            // In-memory sources decode without suspending
            other => Self::load(other),
        }
    }

    /// Decode image from raw bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)?;
        Ok(Self::from_dynamic_image(img))
    }

    /// Decode image from base64 string
    ///
    /// Supports both plain base64 and data URIs like:
    /// - `iVBORw0KGgo...` (plain base64)
    /// - `data:image/png;base64,iVBORw0KGgo...` (data URI)
    ///
    /// The URI scheme and the `;base64,` marker match case-insensitively.
    pub fn from_base64(data: &str) -> Result<Self> {
        let data = data.trim();
        let is_data_uri = data
            .get(..5)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"));

        let base64_data = if is_data_uri {
            // ASCII lowercasing keeps byte offsets
            data.to_ascii_lowercase()
                .find(";base64,")
                .map(|pos| &data[pos + 8..])
                .ok_or_else(|| ImageError::Base64("Invalid data URI format".to_string()))?
        } else {
            data
        };

        let bytes = base64::engine::general_purpose::STANDARD.decode(base64_data.trim())?;
        Self::from_bytes(&bytes)
    }

    fn from_dynamic_image(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.to_rgba8().into_raw();

        Self {
            pixels,
            width,
            height,
        }
    }

    /// Get the raw RGBA pixel data
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get image dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // 1x1 red PNG as base64
    const RED_PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";

    fn red_pixel_png() -> Vec<u8> {
        base64::engine::general_purpose::STANDARD
            .decode(RED_PIXEL)
            .unwrap()
    }

    /// Serve one HTTP response on a random local port
    async fn serve_once(status: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let head = format!(
                "HTTP/1.1 {}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}/avatar.png", addr)
    }

    #[test]
    fn test_from_rgba() {
        let pixels = [255, 0, 0, 255].repeat(4);
        let data = ImageData::from_rgba(pixels, 2, 2).unwrap();
        assert_eq!(data.dimensions(), (2, 2));
        assert_eq!(data.pixels().len(), 16);
    }

    #[test]
    fn test_invalid_rgba_length() {
        let result = ImageData::from_rgba(vec![255, 0, 0, 255], 2, 2);
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }

    #[test]
    fn test_base64_data_uri() {
        let data_uri = format!("data:image/png;base64,{}", RED_PIXEL);
        let img = ImageData::from_base64(&data_uri).unwrap();
        assert_eq!(img.dimensions(), (1, 1));
        assert_eq!(&img.pixels()[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_data_uri_prefix_is_case_insensitive() {
        for prefix in ["DATA:image/png;base64,", "Data:image/png;BASE64,"] {
            let data_uri = format!("{}{}", prefix, RED_PIXEL);
            let source = ImageSource::parse(&data_uri);
            assert!(matches!(source, ImageSource::Base64(_)));

            let img = ImageData::load(source).unwrap();
            assert_eq!(&img.pixels()[..4], &[255, 0, 0, 255]);
        }
    }

    #[test]
    fn test_invalid_base64() {
        assert!(matches!(
            ImageData::from_base64("data:image/png,notbase64"),
            Err(ImageError::Base64(_))
        ));
        assert!(matches!(
            ImageData::from_base64("!!!"),
            Err(ImageError::Base64(_))
        ));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        assert!(matches!(
            ImageData::from_bytes(b"definitely not an image"),
            Err(ImageError::Image(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = ImageData::load(ImageSource::parse("/nonexistent/avatar.png"));
        assert!(matches!(result, Err(ImageError::FileLoad(_))));
    }

    #[test]
    fn test_sync_load_rejects_url() {
        let result = ImageData::load(ImageSource::parse("https://example.com/a.png"));
        assert!(matches!(result, Err(ImageError::Network(_))));
    }

    #[tokio::test]
    async fn test_load_url() {
        let url = serve_once("200 OK", red_pixel_png()).await;
        let img = ImageData::load_async(ImageSource::parse(&url), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(img.dimensions(), (1, 1));
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let url = serve_once("404 Not Found", Vec::new()).await;
        let result = ImageData::load_async(ImageSource::parse(&url), Duration::from_secs(5)).await;
        assert!(matches!(result, Err(ImageError::Network(msg)) if msg.contains("404")));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let result = ImageData::load_async(
            ImageSource::parse("http://127.0.0.1:1/avatar.png"),
            Duration::from_secs(5),
        )
        .await;
        assert!(matches!(result, Err(ImageError::Network(_))));
    }

    #[tokio::test]
    async fn test_timeout() {
        // Accepts the connection but never answers
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let result = ImageData::load_async(
            ImageSource::parse(&format!("http://{}/slow.png", addr)),
            Duration::from_millis(200),
        )
        .await;
        assert!(result.is_err());
    }
}
