//! Domain layer - Core business logic
//!
//! Contains value objects, the prompt composer, the media encoder and
//! domain errors. This layer has no dependencies on external systems.

pub mod config;
pub mod duration;
pub mod error;
pub mod generation;
pub mod media;
pub mod persona;
pub mod prompt;
pub mod scene;
pub mod text;

// Re-export common types
pub use config::AppConfig;
pub use duration::Duration;
pub use error::*;
pub use generation::GenerationResult;
pub use media::{EncodedImage, ImageFile, MediaEncoder, ReferenceFlags, ReferenceImageSet, ReferenceSlot};
pub use persona::PersonaTraits;
pub use prompt::{CaptionPrompt, PromptComposer, PromptText};
pub use scene::SceneConfig;
