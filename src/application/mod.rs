//! Application layer - Use cases and port interfaces
//!
//! Contains the generation workflow and the trait definitions
//! for external system interactions.

pub mod generate;
pub mod ports;

// Re-export use cases
pub use generate::{
    GenerateCallbacks, GenerateError, GenerateInput, GenerateOutput, GeneratePersonaUseCase,
};
