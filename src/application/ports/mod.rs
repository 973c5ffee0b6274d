//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod generator;

// Re-export common types
pub use config::ConfigStore;
pub use generator::{classify_remote_error, GenerationClient, GenerationError};
