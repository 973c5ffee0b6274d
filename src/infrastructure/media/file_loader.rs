//! Reading reference images from disk and writing results back

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::domain::error::MediaValidationError;
use crate::domain::media::{EncodedImage, ImageFile, MediaEncoder};

/// Read an image file and declare its media type from the extension.
///
/// The type is guessed, not sniffed; the encoder rejects anything that is
/// not `image/*`. Files over the encoder's ceiling are rejected from their
/// metadata without being read.
pub async fn load_image_file(
    path: &Path,
    encoder: &MediaEncoder,
) -> Result<ImageFile, MediaValidationError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    let unreadable = |e: std::io::Error| MediaValidationError::Unreadable {
        name: name.clone(),
        message: e.to_string(),
    };

    let len = fs::metadata(path).await.map_err(unreadable)?.len();
    encoder.check_size(&name, usize::try_from(len).unwrap_or(usize::MAX))?;

    let data = fs::read(path).await.map_err(unreadable)?;

    let media_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    debug!(file = %name, %media_type, bytes = data.len(), "loaded image file");

    Ok(ImageFile::new(name, media_type, data))
}

/// Decode a generated image and write it to `path`
pub async fn save_image(image: &EncodedImage, path: &Path) -> Result<(), MediaValidationError> {
    let bytes = image.decode()?;
    let name = path.display().to_string();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| MediaValidationError::Unwritable {
                name: name.clone(),
                message: e.to_string(),
            })?;
    }

    fs::write(path, bytes)
        .await
        .map_err(|e| MediaValidationError::Unwritable {
            name,
            message: e.to_string(),
        })
}
