//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::duration::Duration;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => {
            presenter.output(&store.path().to_string_lossy());
            Ok(())
        }
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;
    store.save(&config).await?;

    let shown = if key == "api_key" {
        mask_api_key(value)
    } else {
        value.to_string()
    };
    presenter.success(&format!("{} = {}", key, shown));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    presenter.output(display_value(&config, key).as_deref().unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;
    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, display_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };
    let trimmed = value.trim();

    match key {
        "api_key" | "image_model" | "caption_model" if trimmed.is_empty() => {
            return Err(invalid("Value must not be empty".to_string()));
        }
        "api_key" => config.api_key = Some(trimmed.to_string()),
        "image_model" => config.image_model = Some(trimmed.to_string()),
        "caption_model" => config.caption_model = Some(trimmed.to_string()),
        "timeout" => {
            let duration: Duration = trimmed.parse().map_err(|e| invalid(format!("{}", e)))?;
            config.timeout = Some(duration.to_string());
        }
        "max_image_mb" => {
            let mb = trimmed
                .parse::<u64>()
                .ok()
                .filter(|mb| *mb > 0)
                .ok_or_else(|| invalid("Value must be a positive whole number of megabytes".to_string()))?;
            config.max_image_mb = Some(mb);
        }
        "caption" => {
            config.caption = Some(
                parse_bool(trimmed)
                    .ok_or_else(|| invalid("Value must be 'true' or 'false'".to_string()))?,
            );
        }
        _ => return Err(invalid("Unknown key".to_string())),
    }
    Ok(())
}

/// Value of `key` as shown to the user; the API key is masked
fn display_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "api_key" => config.api_key.as_deref().map(mask_api_key),
        "image_model" => config.image_model.clone(),
        "caption_model" => config.caption_model.clone(),
        "timeout" => config.timeout.clone(),
        "max_image_mb" => config.max_image_mb.map(|mb| mb.to_string()),
        "caption" => config.caption.map(|b| b.to_string()),
        _ => None,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
