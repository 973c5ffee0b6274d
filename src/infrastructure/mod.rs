//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Gemini API and the filesystem.

pub mod config;
pub mod generation;
pub mod media;

// Re-export adapters
pub use config::XdgConfigStore;
pub use generation::GeminiGenerationClient;
pub use media::{load_image_file, save_image};
