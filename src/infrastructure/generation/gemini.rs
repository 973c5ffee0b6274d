//! Gemini API generation adapter

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::application::ports::{classify_remote_error, GenerationClient, GenerationError};
use crate::domain::config::{DEFAULT_CAPTION_MODEL, DEFAULT_IMAGE_MODEL};
use crate::domain::duration::DEFAULT_TIMEOUT_SECS;
use crate::domain::error::ConfigError;
use crate::domain::media::{EncodedImage, ReferenceImageSet};
use crate::domain::prompt::{CaptionPrompt, PromptText};

/// Gemini API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Header carrying the API key; the key never appears in a URL
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Used when an inline image part carries no MIME type
const FALLBACK_IMAGE_TYPE: &str = "image/png";

/// Finish reasons that mean the output was withheld by a safety filter
const SAFETY_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "IMAGE_SAFETY",
    "PROHIBITED_CONTENT",
    "BLOCKLIST",
    "SPII",
];

// Request types for Gemini API

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }

    fn image(image: &EncodedImage) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: Some(image.media_type().to_string()),
                data: image.data().to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
}

// Response types for Gemini API

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    prompt_feedback: Option<PromptFeedback>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    status: Option<String>,
    code: Option<u16>,
}

impl GenerateContentResponse {
    fn parts(&self) -> impl Iterator<Item = &ResponsePart> {
        self.candidates
            .iter()
            .flatten()
            .filter_map(|c| c.content.as_ref())
            .filter_map(|c| c.parts.as_ref())
            .flatten()
    }

    /// First inline image across all candidates
    fn first_image(&self) -> Option<EncodedImage> {
        self.parts()
            .filter_map(|p| p.inline_data.as_ref())
            .find(|d| !d.data.is_empty())
            .map(|d| {
                let media_type = d
                    .mime_type
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .unwrap_or(FALLBACK_IMAGE_TYPE);
                EncodedImage::new(d.data.clone(), media_type)
            })
    }

    /// All text parts joined and trimmed
    fn joined_text(&self) -> String {
        self.parts()
            .filter_map(|p| p.text.as_deref())
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Why the model withheld output, if a safety filter did
    fn block_reason(&self) -> Option<String> {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_ref())
        {
            return Some(format!("prompt blocked ({})", reason));
        }

        self.candidates
            .iter()
            .flatten()
            .filter_map(|c| c.finish_reason.as_deref())
            .find(|r| SAFETY_FINISH_REASONS.contains(r))
            .map(|r| format!("output withheld ({})", r))
    }
}

/// Gemini API generation client
pub struct GeminiGenerationClient {
    api_key: String,
    image_model: String,
    caption_model: String,
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl GeminiGenerationClient {
    /// Create a client with the given API key.
    /// A blank key is a configuration error, not a remote one.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            caption_model: DEFAULT_CAPTION_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client: reqwest::Client::new(),
        })
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn with_caption_model(mut self, model: impl Into<String>) -> Self {
        self.caption_model = model.into();
        self
    }

    /// Per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Point the client at another endpoint (tests use a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn api_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    fn build_image_request(prompt: &PromptText, images: &ReferenceImageSet) -> GenerateContentRequest {
        let mut parts = vec![Part::text(prompt.content())];
        parts.extend(images.ordered().into_iter().map(|(_, image)| Part::image(image)));

        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
            }),
        }
    }

    fn build_caption_request(prompt: &CaptionPrompt, image: &EncodedImage) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part::text(prompt.content()), Part::image(image)],
            }],
            generation_config: None,
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout(self.timeout)
        } else {
            GenerationError::UnknownRemote(e.without_url().to_string())
        }
    }

    /// Send one request and decode the success body.
    /// Non-2xx responses and error envelopes are classified here.
    async fn send(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let response = self
            .client
            .post(self.api_url(model))
            .header(API_KEY_HEADER, &self.api_key)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            warn!(model, status = status.as_u16(), "generation request failed");
            return Err(match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(envelope) => classify_remote_error(
                    envelope.error.code.or(Some(status.as_u16())),
                    envelope.error.status.as_deref(),
                    &envelope.error.message,
                ),
                Err(_) => classify_remote_error(Some(status.as_u16()), None, text.trim()),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GenerationError::UnknownRemote(format!("malformed response: {}", e)))?;

        if let Some(error) = parsed.error.as_ref() {
            return Err(classify_remote_error(
                error.code,
                error.status.as_deref(),
                &error.message,
            ));
        }

        Ok(parsed)
    }
}

#[async_trait]
impl GenerationClient for GeminiGenerationClient {
    async fn generate_image(
        &self,
        prompt: &PromptText,
        images: &ReferenceImageSet,
    ) -> Result<EncodedImage, GenerationError> {
        let body = Self::build_image_request(prompt, images);
        debug!(
            model = %self.image_model,
            parts = body.contents[0].parts.len(),
            timeout_secs = self.timeout.as_secs(),
            "sending image request"
        );

        let response = self.send(&self.image_model, &body).await?;

        if let Some(image) = response.first_image() {
            info!(media_type = image.media_type(), "image received");
            return Ok(image);
        }

        match response.block_reason() {
            Some(reason) => Err(GenerationError::PolicyRejection(reason)),
            None => {
                let text = response.joined_text();
                if !text.is_empty() {
                    debug!(%text, "model answered with text instead of an image");
                }
                Err(GenerationError::EmptyResult)
            }
        }
    }

    async fn generate_caption(
        &self,
        prompt: &CaptionPrompt,
        image: &EncodedImage,
    ) -> Result<String, GenerationError> {
        let body = Self::build_caption_request(prompt, image);
        debug!(model = %self.caption_model, "sending caption request");

        let response = self.send(&self.caption_model, &body).await?;

        let caption = response.joined_text();
        if caption.is_empty() {
            return Err(match response.block_reason() {
                Some(reason) => GenerationError::PolicyRejection(reason),
                None => GenerationError::EmptyCaption,
            });
        }

        Ok(caption)
    }
}
