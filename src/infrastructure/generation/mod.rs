//! Generation client adapters

mod gemini;

pub use gemini::{GeminiGenerationClient, DEFAULT_BASE_URL};
