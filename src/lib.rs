//! PersonaLens - consistent persona photo generation
//!
//! This crate composes a structured prompt from a persona and a scene,
//! validates and encodes up to three reference images, and asks Google
//! Gemini for a single photorealistic image plus an optional caption.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, lookup tables, the prompt composer, the media encoder and errors
//! - **Application**: The generate use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini REST client, XDG config, filesystem)
//! - **CLI**: Command-line interface, argument parsing and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
