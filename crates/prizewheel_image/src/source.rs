//! Where an image comes from

use std::path::PathBuf;

/// Image source, usually parsed from a user-supplied string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// `http://` or `https://` URL
    Url(String),
    /// Path on the local filesystem
    File(PathBuf),
    /// Plain base64 or a `data:` URI
    Base64(String),
    /// Encoded image bytes already in memory
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Classify a reference string.
    ///
    /// `http(s)://` becomes [`ImageSource::Url`], `data:` becomes
    /// [`ImageSource::Base64`], anything else is treated as a file path.
    pub fn parse(reference: &str) -> Self {
        let trimmed = reference.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageSource::Url(trimmed.to_string())
        } else if lower.starts_with("data:") {
            ImageSource::Base64(trimmed.to_string())
        } else {
            ImageSource::File(PathBuf::from(trimmed))
        }
    }

    /// Short description for log messages; never includes inline data
    pub fn describe(&self) -> String {
        match self {
            ImageSource::Url(url) => url.clone(),
            ImageSource::File(path) => path.display().to_string(),
            ImageSource::Base64(data) => format!("<base64, {} chars>", data.len()),
            ImageSource::Bytes(data) => format!("<{} bytes>", data.len()),
        }
    }
}

impl From<&str> for ImageSource {
    fn from(reference: &str) -> Self {
        ImageSource::parse(reference)
    }
}

impl From<String> for ImageSource {
    fn from(reference: String) -> Self {
        ImageSource::parse(&reference)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(data: Vec<u8>) -> Self {
        ImageSource::Bytes(data)
    }
}
