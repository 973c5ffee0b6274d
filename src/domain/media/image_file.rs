//! Image file value objects

use std::fmt;
use std::str::FromStr;

/// Recognised image MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageMimeType {
    Jpeg,
    Png,
    Webp,
    Gif,
    Heic,
    Heif,
}

impl ImageMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
            Self::Heic => "image/heic",
            Self::Heif => "image/heif",
        }
    }

    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Gif => "gif",
            Self::Heic => "heic",
            Self::Heif => "heif",
        }
    }
}

impl FromStr for ImageMimeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match essence(s).as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Ok(Self::Jpeg),
            "image/png" => Ok(Self::Png),
            "image/webp" => Ok(Self::Webp),
            "image/gif" => Ok(Self::Gif),
            "image/heic" => Ok(Self::Heic),
            "image/heif" => Ok(Self::Heif),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ImageMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ImageMimeType {
    fn default() -> Self {
        Self::Png
    }
}

/// Lower-cased media type without parameters (`image/JPEG; q=1` → `image/jpeg`)
pub fn essence(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Format a byte count for humans
pub fn human_readable_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// An in-memory image file as handed over by the caller.
/// `media_type` is the type the caller declared, not a sniffed one.
#[derive(Debug, Clone)]
pub struct ImageFile {
    name: String,
    media_type: String,
    data: Vec<u8>,
}

impl ImageFile {
    /// Create an image file from raw bytes
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            data,
        }
    }

    /// File name, used in error messages
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared media type
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Get the raw bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        human_readable_size(self.size_bytes())
    }
}
