//! Local media adapters

mod file_loader;

pub use file_loader::{load_image_file, save_image};
