//! Persona traits value object

use crate::domain::text::non_blank;

/// The stable descriptive attributes of the synthetic subject.
///
/// Fields are free text. Blank fields are treated as absent by every
/// consumer, which falls back to generic wording instead of interpolating
/// an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaTraits {
    personality: String,
    aesthetic: String,
    environment: String,
}

impl PersonaTraits {
    /// Create persona traits from the three descriptors
    pub fn new(
        personality: impl Into<String>,
        aesthetic: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            personality: personality.into(),
            aesthetic: aesthetic.into(),
            environment: environment.into(),
        }
    }

    /// Personality descriptor, if not blank
    pub fn personality(&self) -> Option<&str> {
        non_blank(&self.personality)
    }

    /// Aesthetic descriptor, if not blank
    pub fn aesthetic(&self) -> Option<&str> {
        non_blank(&self.aesthetic)
    }

    /// Primary environment descriptor, if not blank
    pub fn environment(&self) -> Option<&str> {
        non_blank(&self.environment)
    }

    /// True when no descriptor carries any text
    pub fn is_blank(&self) -> bool {
        self.personality().is_none() && self.aesthetic().is_none() && self.environment().is_none()
    }
}
