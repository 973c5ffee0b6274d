//! Generation result entity

use crate::domain::media::EncodedImage;
use crate::domain::prompt::PromptText;

/// Outcome of one successful generation round trip.
///
/// Only ever built from a fresh response, so it never carries an image from
/// an earlier attempt. The caption is filled in later, and only on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    image: EncodedImage,
    prompt: PromptText,
    caption: Option<String>,
}

impl GenerationResult {
    pub fn new(image: EncodedImage, prompt: PromptText) -> Self {
        Self {
            image,
            prompt,
            caption: None,
        }
    }

    /// The generated image
    pub fn image(&self) -> &EncodedImage {
        &self.image
    }

    /// The exact prompt that was sent
    pub fn prompt(&self) -> &PromptText {
        &self.prompt
    }

    /// Caption, once one was generated
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub(crate) fn set_caption(&mut self, caption: String) {
        self.caption = Some(caption);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::ReferenceFlags;
    use crate::domain::persona::PersonaTraits;
    use crate::domain::prompt::PromptComposer;
    use crate::domain::scene::SceneConfig;

    #[test]
    fn new_result_has_no_caption() {
        let prompt = PromptComposer::compose(
            &PersonaTraits::default(),
            &SceneConfig::default(),
            ReferenceFlags::default(),
        );
        let mut result = GenerationResult::new(EncodedImage::new("AQID", "image/png"), prompt.clone());
        assert!(result.caption().is_none());
        assert_eq!(result.prompt(), &prompt);

        result.set_caption("slow mornings".to_string());
        assert_eq!(result.caption(), Some("slow mornings"));
        assert_eq!(result.image().data(), "AQID");
    }
}
