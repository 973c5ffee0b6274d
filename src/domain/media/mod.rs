//! Media domain module

mod encoded_image;
mod encoder;
mod image_file;
mod reference_set;

pub use encoded_image::EncodedImage;
pub use encoder::{MediaEncoder, DEFAULT_MAX_IMAGE_BYTES};
pub use image_file::{human_readable_size, ImageFile, ImageMimeType};
pub use reference_set::{ReferenceFlags, ReferenceImageSet, ReferenceRole, ReferenceSlot};
