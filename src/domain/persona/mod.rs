//! Persona domain module

mod persona_traits;
pub mod presets;

pub use persona_traits::PersonaTraits;
