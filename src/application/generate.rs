//! Generate persona image use case

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::error::MediaValidationError;
use crate::domain::generation::GenerationResult;
use crate::domain::media::{
    EncodedImage, ImageFile, MediaEncoder, ReferenceFlags, ReferenceImageSet, ReferenceRole,
};
use crate::domain::persona::PersonaTraits;
use crate::domain::prompt::{CaptionPrompt, PromptComposer, PromptText};
use crate::domain::scene::SceneConfig;

use super::ports::{GenerationClient, GenerationError};

/// Errors from the generate use case
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("A face reference image is required before generating")]
    MissingFaceImage,

    #[error("Invalid {role} reference image: {source}")]
    Validation {
        role: ReferenceRole,
        #[source]
        source: MediaValidationError,
    },

    #[error("Invalid image: {0}")]
    InvalidImage(#[source] MediaValidationError),

    #[error("{0}")]
    Generation(#[from] GenerationError),
}

/// Input parameters for the generate use case
#[derive(Debug, Clone, Default)]
pub struct GenerateInput {
    pub persona: PersonaTraits,
    pub scene: SceneConfig,
    /// Required face/body reference
    pub face: Option<ImageFile>,
    /// Optional location reference
    pub location: Option<ImageFile>,
    /// Optional items/clothing reference
    pub items: Option<ImageFile>,
    /// Request a caption right after the image
    pub with_caption: bool,
}

/// Output from the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOutput {
    pub result: GenerationResult,
    /// Set when a caption was requested and failed; the image is still valid
    pub caption_error: Option<GenerationError>,
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct GenerateCallbacks {
    /// Called after each reference image is encoded with (role, size)
    pub on_encoded: Option<Box<dyn Fn(ReferenceRole, &str) + Send + Sync>>,
    /// Called when the image request is sent
    pub on_generating_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when the image request completes successfully
    pub on_generating_end: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when the caption request is sent
    pub on_captioning_start: Option<Box<dyn Fn() + Send + Sync>>,
}

/// Image generation use case.
///
/// The client is injected, so one instance serves a whole session and tests
/// can substitute a fake.
pub struct GeneratePersonaUseCase<G: GenerationClient> {
    client: G,
    encoder: MediaEncoder,
}

impl<G: GenerationClient> GeneratePersonaUseCase<G> {
    /// Create a new use case instance
    pub fn new(client: G, encoder: MediaEncoder) -> Self {
        Self { client, encoder }
    }

    /// Compose the prompt without sending anything
    pub fn preview_prompt(
        &self,
        persona: &PersonaTraits,
        scene: &SceneConfig,
        flags: ReferenceFlags,
    ) -> PromptText {
        PromptComposer::compose(persona, scene, flags)
    }

    /// Execute the generation workflow
    pub async fn execute(
        &self,
        input: GenerateInput,
        callbacks: GenerateCallbacks,
    ) -> Result<GenerateOutput, GenerateError> {
        let face_file = input.face.as_ref().ok_or(GenerateError::MissingFaceImage)?;

        let face = self.encode_role(ReferenceRole::Face, face_file, &callbacks)?;
        let location = input
            .location
            .as_ref()
            .map(|file| self.encode_role(ReferenceRole::Location, file, &callbacks))
            .transpose()?;
        let items = input
            .items
            .as_ref()
            .map(|file| self.encode_role(ReferenceRole::Items, file, &callbacks))
            .transpose()?;

        let images = ReferenceImageSet::new(face)
            .with_location(location)
            .with_items(items);
        let flags = images.flags();
        let prompt = PromptComposer::compose(&input.persona, &input.scene, flags);

        info!(
            prompt_chars = prompt.content().len(),
            has_location = flags.has_location,
            has_items = flags.has_items,
            "requesting image generation"
        );

        if let Some(ref cb) = callbacks.on_generating_start {
            cb();
        }

        let image = self.client.generate_image(&prompt, &images).await?;

        if let Some(ref cb) = callbacks.on_generating_end {
            cb();
        }

        let mut result = GenerationResult::new(image, prompt);

        let caption_error = if input.with_caption {
            if let Some(ref cb) = callbacks.on_captioning_start {
                cb();
            }
            match self.add_caption(&input.persona, &mut result).await {
                Ok(()) => None,
                Err(GenerateError::Generation(e)) => Some(e),
                Err(e) => Some(GenerationError::UnknownRemote(e.to_string())),
            }
        } else {
            None
        };

        Ok(GenerateOutput {
            result,
            caption_error,
        })
    }

    /// Request a caption for an existing result.
    ///
    /// The result is only touched on success; a failure leaves the image and
    /// any previous caption as they were.
    pub async fn add_caption(
        &self,
        persona: &PersonaTraits,
        result: &mut GenerationResult,
    ) -> Result<(), GenerateError> {
        let caption = self.caption(persona, result.image()).await?;
        result.set_caption(caption);
        Ok(())
    }

    /// Caption an image file that was generated earlier
    pub async fn caption_file(
        &self,
        persona: &PersonaTraits,
        file: &ImageFile,
    ) -> Result<String, GenerateError> {
        let image = self
            .encoder
            .encode(file)
            .map_err(GenerateError::InvalidImage)?;
        self.caption(persona, &image).await
    }

    async fn caption(
        &self,
        persona: &PersonaTraits,
        image: &EncodedImage,
    ) -> Result<String, GenerateError> {
        let prompt = CaptionPrompt::build(persona);
        match self.client.generate_caption(&prompt, image).await {
            Ok(caption) => Ok(caption),
            Err(e) => {
                warn!(error = %e, "caption generation failed");
                Err(e.into())
            }
        }
    }

    fn encode_role(
        &self,
        role: ReferenceRole,
        file: &ImageFile,
        callbacks: &GenerateCallbacks,
    ) -> Result<EncodedImage, GenerateError> {
        let encoded = self
            .encoder
            .encode(file)
            .map_err(|source| GenerateError::Validation { role, source })?;

        debug!(%role, size = file.size_bytes(), media_type = encoded.media_type(), "encoded reference image");

        if let Some(ref cb) = callbacks.on_encoded {
            cb(role, &file.human_readable_size());
        }
        Ok(encoded)
    }
}
