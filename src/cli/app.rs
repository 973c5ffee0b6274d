//! Command runners for generate, prompt, caption and presets

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{debug, warn};

use crate::application::ports::ConfigStore;
use crate::application::{GenerateCallbacks, GenerateError, GenerateInput, GeneratePersonaUseCase};
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::media::{ImageFile, MediaEncoder, ReferenceRole};
use crate::domain::persona::presets::{AESTHETIC_PRESETS, ENVIRONMENT_PRESETS, PERSONALITY_PRESETS};
use crate::domain::prompt::PromptComposer;
use crate::domain::scene::{ALL_ASPECT_RATIOS, ALL_CAMERA_ANGLES, ALL_MOODS, ALL_TIMES_OF_DAY};
use crate::infrastructure::{load_image_file, save_image, GeminiGenerationClient, XdgConfigStore};

use super::args::{CaptionArgs, GenerateArgs, PromptArgs};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default output name, completed with the returned image's extension
const DEFAULT_OUTPUT_STEM: &str = "persona";

/// Run the `generate` subcommand
pub async fn run_generate(args: GenerateArgs) -> ExitCode {
    let mut presenter = Presenter::new();

    let cli_config = AppConfig {
        caption: args.caption.then_some(true),
        ..Default::default()
    };
    let config = load_merged_config(cli_config).await;

    // Credentials first: nothing is read or sent without them
    let client = match build_client(&config) {
        Ok(client) => client,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let encoder = MediaEncoder::with_max_bytes(config.max_image_bytes_or_default());
    let (face, location, items) = match tokio::try_join!(
        load_role(ReferenceRole::Face, Some(args.face.as_path()), &encoder),
        load_role(ReferenceRole::Location, args.location_image.as_deref(), &encoder),
        load_role(ReferenceRole::Items, args.items_image.as_deref(), &encoder),
    ) {
        Ok(files) => files,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let use_case = GeneratePersonaUseCase::new(client, encoder);

    presenter.start_spinner("Preparing reference images...");
    let callbacks = spinner_callbacks(&presenter);

    let input = GenerateInput {
        persona: args.persona.to_persona(),
        scene: args.scene.to_scene(),
        face,
        location,
        items,
        with_caption: config.caption_or_default(),
    };

    let output = match use_case.execute(input, callbacks).await {
        Ok(output) => output,
        Err(e) => {
            presenter.spinner_fail("Generation failed");
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    presenter.spinner_success("Image generated");

    let result = output.result;
    let path = output_path(args.output.as_deref(), result.image().extension());
    if let Err(e) = save_image(result.image(), &path).await {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }
    presenter.success(&format!("Saved to {}", path.display()));

    if args.show_prompt {
        presenter.section("Prompt", result.prompt().content());
    }

    if let Some(caption) = result.caption() {
        presenter.section("Caption", caption);
    }
    if let Some(e) = output.caption_error {
        presenter.warn(&format!("Caption failed, the image was kept: {}", e));
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Run the `prompt` subcommand. Needs no credentials.
pub fn run_prompt(args: PromptArgs) -> ExitCode {
    let presenter = Presenter::new();
    let prompt = PromptComposer::compose(
        &args.persona.to_persona(),
        &args.scene.to_scene(),
        args.flags(),
    );
    presenter.output(prompt.content());
    ExitCode::from(EXIT_SUCCESS)
}

/// Run the `caption` subcommand against an existing image
pub async fn run_caption(args: CaptionArgs) -> ExitCode {
    let mut presenter = Presenter::new();
    let config = load_merged_config(AppConfig::empty()).await;

    let client = match build_client(&config) {
        Ok(client) => client,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let encoder = MediaEncoder::with_max_bytes(config.max_image_bytes_or_default());
    let file = match load_image_file(&args.image, &encoder).await {
        Ok(file) => file,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let use_case = GeneratePersonaUseCase::new(client, encoder);

    presenter.start_spinner("Writing caption...");
    match use_case.caption_file(&args.persona.to_persona(), &file).await {
        Ok(caption) => {
            presenter.spinner_success("Caption ready");
            presenter.output(&caption);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail("Caption failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the `presets` subcommand
pub fn run_presets() -> ExitCode {
    let presenter = Presenter::new();

    presenter.list("Aesthetics", AESTHETIC_PRESETS);
    presenter.list("Personalities", PERSONALITY_PRESETS);
    presenter.list("Environments", ENVIRONMENT_PRESETS);

    let times: Vec<&str> = ALL_TIMES_OF_DAY.iter().map(|t| t.as_str()).collect();
    let moods: Vec<&str> = ALL_MOODS.iter().map(|m| m.as_str()).collect();
    let angles: Vec<&str> = ALL_CAMERA_ANGLES.iter().map(|a| a.as_str()).collect();
    let ratios: Vec<&str> = ALL_ASPECT_RATIOS.iter().map(|r| r.as_str()).collect();

    presenter.list("Times of day", &times);
    presenter.list("Moods", &moods);
    presenter.list("Camera angles", &angles);
    presenter.list("Aspect ratios", &ratios);
    presenter.info("Other values are accepted and passed through as free text.");

    ExitCode::from(EXIT_SUCCESS)
}

/// Resolve the API key from merged config
pub fn get_api_key(config: &AppConfig) -> Result<&str, ConfigError> {
    config.api_key().ok_or(ConfigError::MissingApiKey)
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "ignoring unreadable config file");
            AppConfig::empty()
        }
    };

    let env_config = AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.trim().is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

fn build_client(config: &AppConfig) -> Result<GeminiGenerationClient, ConfigError> {
    let api_key = get_api_key(config)?;
    let timeout = config.timeout_or_default();
    debug!(
        image_model = config.image_model_or_default(),
        caption_model = config.caption_model_or_default(),
        %timeout,
        "building generation client"
    );

    Ok(GeminiGenerationClient::new(api_key)?
        .with_image_model(config.image_model_or_default())
        .with_caption_model(config.caption_model_or_default())
        .with_timeout(timeout.as_std()))
}

async fn load_role(
    role: ReferenceRole,
    path: Option<&Path>,
    encoder: &MediaEncoder,
) -> Result<Option<ImageFile>, GenerateError> {
    match path {
        Some(path) => load_image_file(path, encoder)
            .await
            .map(Some)
            .map_err(|source| GenerateError::Validation { role, source }),
        None => Ok(None),
    }
}

fn spinner_callbacks(presenter: &Presenter) -> GenerateCallbacks {
    let Some(spinner) = presenter.spinner_handle() else {
        return GenerateCallbacks::default();
    };

    let (encoded, generating, captioning) = (spinner.clone(), spinner.clone(), spinner);
    GenerateCallbacks {
        on_encoded: Some(Box::new(move |role: ReferenceRole, size: &str| {
            encoded.set_message(format!("Encoded {} image ({})", role, size));
        })),
        on_generating_start: Some(Box::new(move || {
            generating.set_message("Generating image...");
        })),
        on_generating_end: None,
        on_captioning_start: Some(Box::new(move || {
            captioning.set_message("Writing caption...");
        })),
    }
}

fn output_path(requested: Option<&Path>, extension: &str) -> PathBuf {
    requested
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format!("{}.{}", DEFAULT_OUTPUT_STEM, extension)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_defaults_to_persona_with_extension() {
        assert_eq!(output_path(None, "jpg"), PathBuf::from("persona.jpg"));
        assert_eq!(
            output_path(Some(Path::new("out/me.png")), "jpg"),
            PathBuf::from("out/me.png")
        );
    }

    #[test]
    fn missing_key_is_config_error() {
        let config = AppConfig {
            api_key: Some(" ".to_string()),
            ..AppConfig::defaults()
        };
        assert!(matches!(get_api_key(&config), Err(ConfigError::MissingApiKey)));
        assert!(build_client(&config).is_err());
    }

    #[test]
    fn present_key_builds_client() {
        let config = AppConfig {
            api_key: Some("abc".to_string()),
            ..AppConfig::defaults()
        };
        assert_eq!(get_api_key(&config).unwrap(), "abc");
        assert!(build_client(&config).is_ok());
    }

    #[tokio::test]
    async fn absent_optional_role_loads_nothing() {
        assert!(load_role(ReferenceRole::Items, None, &MediaEncoder::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_file_names_its_role() {
        let err = load_role(
            ReferenceRole::Location,
            Some(Path::new("/nonexistent/street.png")),
            &MediaEncoder::new(),
        )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Validation {
                role: ReferenceRole::Location,
                ..
            }
        ));
    }
}
