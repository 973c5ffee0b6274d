//! Transport-ready encoded image

use base64::Engine;

use super::image_file::{essence, ImageMimeType};
use crate::domain::error::MediaValidationError;

/// A base64 payload plus its media type.
///
/// Used both for reference images sent to the model and for the image the
/// model returns. Owns its data; holds no reference to the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    data: String,
    media_type: String,
}

impl EncodedImage {
    /// Wrap an already base64-encoded payload
    pub fn new(data: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            media_type: media_type.into(),
        }
    }

    /// Encode raw bytes
    pub fn from_bytes(bytes: &[u8], media_type: impl Into<String>) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: media_type.into(),
        }
    }

    /// Parse a `data:<type>;base64,<payload>` URL
    pub fn from_data_url(url: &str) -> Result<Self, MediaValidationError> {
        let rest = url
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| MediaValidationError::InvalidDataUrl("missing 'data:' prefix".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| MediaValidationError::InvalidDataUrl("missing ',' separator".to_string()))?;
        let media_type = header.strip_suffix(";base64").ok_or_else(|| {
            MediaValidationError::InvalidDataUrl("only base64 payloads are supported".to_string())
        })?;

        let media_type = if media_type.is_empty() {
            ImageMimeType::default().as_str().to_string()
        } else {
            essence(media_type)
        };

        Ok(Self::new(payload, media_type))
    }

    /// Base64 payload
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Media type
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Render as a data URL
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }

    /// Decode the payload back to raw bytes
    pub fn decode(&self) -> Result<Vec<u8>, MediaValidationError> {
        base64::engine::general_purpose::STANDARD
            .decode(self.data.as_bytes())
            .map_err(|e| MediaValidationError::InvalidDataUrl(e.to_string()))
    }

    /// File extension matching the media type (`png` when unrecognised)
    pub fn extension(&self) -> &'static str {
        self.media_type
            .parse::<ImageMimeType>()
            .unwrap_or_default()
            .extension()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_encodes_base64() {
        let image = EncodedImage::from_bytes(&[1, 2, 3, 4], "image/png");
        assert_eq!(image.data(), "AQIDBA==");
        assert_eq!(image.decode().unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn data_url_rendering() {
        let image = EncodedImage::new("AQID", "image/jpeg");
        assert_eq!(image.to_data_url(), "data:image/jpeg;base64,AQID");
    }

    #[test]
    fn data_url_parsing() {
        let image = EncodedImage::from_data_url("data:image/webp;base64,AQID").unwrap();
        assert_eq!(image.media_type(), "image/webp");
        assert_eq!(image.data(), "AQID");
        assert_eq!(image.extension(), "webp");
    }

    #[test]
    fn data_url_without_type_defaults_to_png() {
        let image = EncodedImage::from_data_url("data:;base64,AQID").unwrap();
        assert_eq!(image.media_type(), "image/png");
    }

    #[test]
    fn invalid_data_urls() {
        assert!(EncodedImage::from_data_url("image/png;base64,AQID").is_err());
        assert!(EncodedImage::from_data_url("data:image/png;base64").is_err());
        assert!(EncodedImage::from_data_url("data:image/png,AQID").is_err());
    }

    #[test]
    fn unknown_media_type_uses_png_extension() {
        let image = EncodedImage::new("AQID", "image/x-unknown");
        assert_eq!(image.extension(), "png");
    }

    #[test]
    fn decode_rejects_bad_payload() {
        let image = EncodedImage::new("not base64!", "image/png");
        assert!(image.decode().is_err());
    }
}
