//! Prompt text value objects

use std::fmt;

/// The composed image prompt.
///
/// Opaque once built: it is what gets sent to the model and what is shown
/// back to the user, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptText {
    content: String,
}

impl PromptText {
    pub(crate) fn new(content: String) -> Self {
        Self { content }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl fmt::Display for PromptText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl AsRef<str> for PromptText {
    fn as_ref(&self) -> &str {
        &self.content
    }
}
