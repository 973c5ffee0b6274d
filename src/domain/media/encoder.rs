//! Media encoder: validates an image file and encodes it for upload

use super::encoded_image::EncodedImage;
use super::image_file::{essence, human_readable_size, ImageFile};
use crate::domain::error::MediaValidationError;

/// Default upload ceiling (10 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Converts image files into transport-ready payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaEncoder {
    max_bytes: usize,
}

impl MediaEncoder {
    /// Encoder with the default 10 MiB ceiling
    pub const fn new() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    /// Encoder with a custom ceiling
    pub const fn with_max_bytes(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Size ceiling in bytes
    pub const fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Validate and encode a file.
    ///
    /// The declared type must be `image/*` and the file must be non-empty
    /// and within the ceiling. The source is only read.
    pub fn encode(&self, file: &ImageFile) -> Result<EncodedImage, MediaValidationError> {
        let media_type = essence(file.media_type());
        if !media_type.starts_with("image/") || media_type.len() == "image/".len() {
            return Err(MediaValidationError::NotAnImage {
                name: file.name().to_string(),
                media_type: file.media_type().to_string(),
            });
        }

        if file.size_bytes() == 0 {
            return Err(MediaValidationError::Empty {
                name: file.name().to_string(),
            });
        }

        self.check_size(file.name(), file.size_bytes())?;

        Ok(EncodedImage::from_bytes(file.data(), media_type))
    }

    /// Reject a size over the ceiling. Loaders call this before reading.
    pub fn check_size(&self, name: &str, size_bytes: usize) -> Result<(), MediaValidationError> {
        if size_bytes > self.max_bytes {
            return Err(MediaValidationError::TooLarge {
                name: name.to_string(),
                size: human_readable_size(size_bytes),
                limit: human_readable_size(self.max_bytes),
            });
        }
        Ok(())
    }
}

impl Default for MediaEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: usize = 1024 * 1024;

    #[test]
    fn rejects_oversized_image() {
        let file = ImageFile::new("big.jpg", "image/jpeg", vec![0u8; 15 * MIB]);
        let err = MediaEncoder::new().encode(&file).unwrap_err();
        assert!(matches!(err, MediaValidationError::TooLarge { .. }));
        assert!(err.to_string().contains("10.0 MB"));
    }

    #[test]
    fn rejects_non_image() {
        let file = ImageFile::new("notes.txt", "text/plain", b"hello".to_vec());
        let err = MediaEncoder::new().encode(&file).unwrap_err();
        assert_eq!(
            err,
            MediaValidationError::NotAnImage {
                name: "notes.txt".to_string(),
                media_type: "text/plain".to_string(),
            }
        );
    }

    #[test]
    fn rejects_bare_image_prefix_and_empty_file() {
        let bare = ImageFile::new("x", "image/", vec![1]);
        assert!(MediaEncoder::new().encode(&bare).is_err());

        let empty = ImageFile::new("empty.png", "image/png", Vec::new());
        assert!(matches!(
            MediaEncoder::new().encode(&empty),
            Err(MediaValidationError::Empty { .. })
        ));
    }

    #[test]
    fn encodes_valid_jpeg() {
        let file = ImageFile::new("face.jpg", "image/jpeg", vec![7u8; 2 * MIB]);
        let encoded = MediaEncoder::new().encode(&file).unwrap();
        assert_eq!(encoded.media_type(), "image/jpeg");
        assert_eq!(encoded.decode().unwrap().len(), 2 * MIB);
    }

    #[test]
    fn normalizes_declared_type() {
        let file = ImageFile::new("face.PNG", "Image/PNG; charset=binary", vec![1, 2, 3]);
        let encoded = MediaEncoder::new().encode(&file).unwrap();
        assert_eq!(encoded.media_type(), "image/png");
    }

    #[test]
    fn ceiling_is_inclusive() {
        let encoder = MediaEncoder::with_max_bytes(4);
        assert!(encoder.encode(&ImageFile::new("a.png", "image/png", vec![0; 4])).is_ok());
        assert!(encoder.encode(&ImageFile::new("b.png", "image/png", vec![0; 5])).is_err());
    }
}
