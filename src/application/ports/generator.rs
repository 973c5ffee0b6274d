//! Generation client port interface

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::media::{EncodedImage, ReferenceImageSet};
use crate::domain::prompt::{CaptionPrompt, PromptText};

/// Remote generation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Generation failed: the model produced no image and likely refused the prompt. Try adjusting the prompt.")]
    EmptyResult,

    #[error("The model returned an empty caption")]
    EmptyCaption,

    #[error("Blocked by the content policy: {0}. Modify your inputs and try again.")]
    PolicyRejection(String),

    #[error("The request was rejected: {0}. Check your inputs.")]
    RemoteRequest(String),

    #[error("API error: {0}")]
    UnknownRemote(String),

    #[error("The request timed out after {0:?}")]
    Timeout(Duration),
}

const POLICY_MARKERS: &[&str] = &["safety", "blocked", "policy", "prohibited", "harm"];

const BAD_REQUEST_STATUSES: &[&str] = &["INVALID_ARGUMENT", "FAILED_PRECONDITION"];

/// Classify a remote failure by inspecting its content.
///
/// * mentions of safety or policy → [`GenerationError::PolicyRejection`]
/// * HTTP 400 or an invalid-argument status → [`GenerationError::RemoteRequest`]
/// * anything else → [`GenerationError::UnknownRemote`] with the raw message
pub fn classify_remote_error(
    http_status: Option<u16>,
    api_status: Option<&str>,
    message: &str,
) -> GenerationError {
    let lower = message.to_lowercase();
    if POLICY_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return GenerationError::PolicyRejection(message.to_string());
    }

    let bad_request = http_status == Some(400)
        || api_status.is_some_and(|status| BAD_REQUEST_STATUSES.contains(&status));
    if bad_request {
        return GenerationError::RemoteRequest(message.to_string());
    }

    match http_status {
        Some(status) => GenerationError::UnknownRemote(format!("HTTP {}: {}", status, message)),
        None => GenerationError::UnknownRemote(message.to_string()),
    }
}

/// Port for the multimodal generation endpoint
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generate one image from the prompt and the reference images.
    ///
    /// # Arguments
    /// * `prompt` - The composed prompt, sent as the first part
    /// * `images` - Reference images, sent face first, then location, then items
    ///
    /// # Returns
    /// The first image in the response or an error
    async fn generate_image(
        &self,
        prompt: &PromptText,
        images: &ReferenceImageSet,
    ) -> Result<EncodedImage, GenerationError>;

    /// Write a caption for an already generated image.
    async fn generate_caption(
        &self,
        prompt: &CaptionPrompt,
        image: &EncodedImage,
    ) -> Result<String, GenerationError>;
}
