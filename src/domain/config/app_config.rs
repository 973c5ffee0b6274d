//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::duration::Duration;
use crate::domain::media::DEFAULT_MAX_IMAGE_BYTES;

/// Model used for image generation
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Model used for captions
pub const DEFAULT_CAPTION_MODEL: &str = "gemini-2.5-flash";

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub image_model: Option<String>,
    pub caption_model: Option<String>,
    pub timeout: Option<String>,
    pub max_image_mb: Option<u64>,
    pub caption: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            image_model: Some(DEFAULT_IMAGE_MODEL.to_string()),
            caption_model: Some(DEFAULT_CAPTION_MODEL.to_string()),
            timeout: Some(Duration::default_timeout().to_string()),
            max_image_mb: Some(DEFAULT_MAX_IMAGE_BYTES as u64 / BYTES_PER_MB),
            caption: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            image_model: other.image_model.or(self.image_model),
            caption_model: other.caption_model.or(self.caption_model),
            timeout: other.timeout.or(self.timeout),
            max_image_mb: other.max_image_mb.or(self.max_image_mb),
            caption: other.caption.or(self.caption),
        }
    }

    /// API key, if set and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Get the image model, or the default if not set
    pub fn image_model_or_default(&self) -> &str {
        self.image_model.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL)
    }

    /// Get the caption model, or the default if not set
    pub fn caption_model_or_default(&self) -> &str {
        self.caption_model.as_deref().unwrap_or(DEFAULT_CAPTION_MODEL)
    }

    /// Get timeout as parsed Duration, or default if not set/invalid
    pub fn timeout_or_default(&self) -> Duration {
        self.timeout
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_timeout)
    }

    /// Get the upload ceiling in bytes, or 10 MiB if not set or zero
    pub fn max_image_bytes_or_default(&self) -> usize {
        self.max_image_mb
            .filter(|mb| *mb > 0)
            .and_then(|mb| mb.checked_mul(BYTES_PER_MB))
            .and_then(|bytes| usize::try_from(bytes).ok())
            .unwrap_or(DEFAULT_MAX_IMAGE_BYTES)
    }

    /// Get caption setting, or false if not set
    pub fn caption_or_default(&self) -> bool {
        self.caption.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.api_key.is_none());
        assert_eq!(config.image_model.as_deref(), Some("gemini-2.5-flash-image"));
        assert_eq!(config.caption_model.as_deref(), Some("gemini-2.5-flash"));
        assert_eq!(config.timeout.as_deref(), Some("2m"));
        assert_eq!(config.max_image_mb, Some(10));
        assert_eq!(config.caption, Some(false));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.api_key.is_none());
        assert!(config.image_model.is_none());
        assert!(config.timeout.is_none());
        assert!(config.caption.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            api_key: Some("base_key".to_string()),
            timeout: Some("30s".to_string()),
            image_model: Some("base-model".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            api_key: Some("other_key".to_string()),
            timeout: None,
            image_model: Some("other-model".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.api_key, Some("other_key".to_string()));
        assert_eq!(merged.timeout, Some("30s".to_string()));
        assert_eq!(merged.image_model, Some("other-model".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            api_key: Some("key".to_string()),
            caption: Some(true),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.api_key, Some("key".to_string()));
        assert_eq!(merged.caption, Some(true));
    }

    #[test]
    fn blank_api_key_is_absent() {
        let config = AppConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.api_key().is_none());
    }

    #[test]
    fn timeout_or_default_parses_and_falls_back() {
        let config = AppConfig {
            timeout: Some("45s".to_string()),
            ..Default::default()
        };
        assert_eq!(config.timeout_or_default().as_secs(), 45);

        let config = AppConfig {
            timeout: Some("soon".to_string()),
            ..Default::default()
        };
        assert_eq!(config.timeout_or_default().as_secs(), 120);
        assert_eq!(AppConfig::empty().timeout_or_default().as_secs(), 120);
    }

    #[test]
    fn max_image_bytes() {
        let config = AppConfig {
            max_image_mb: Some(4),
            ..Default::default()
        };
        assert_eq!(config.max_image_bytes_or_default(), 4 * 1024 * 1024);

        let zero = AppConfig {
            max_image_mb: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.max_image_bytes_or_default(), DEFAULT_MAX_IMAGE_BYTES);
    }

    #[test]
    fn model_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.image_model_or_default(), DEFAULT_IMAGE_MODEL);
        assert_eq!(config.caption_model_or_default(), DEFAULT_CAPTION_MODEL);
        assert!(!config.caption_or_default());
    }
}
