//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::media::ReferenceFlags;
use crate::domain::persona::PersonaTraits;
use crate::domain::scene::SceneConfig;

/// PersonaLens - consistent persona photos with Google Gemini
#[derive(Parser, Debug)]
#[command(name = "persona-lens")]
#[command(version)]
#[command(about = "Generate candid photos of a consistent persona using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a persona image from reference photos
    Generate(GenerateArgs),
    /// Print the composed prompt without calling the API
    Prompt(PromptArgs),
    /// Write a caption for an existing image
    Caption(CaptionArgs),
    /// List presets and recognised scene values
    Presets,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Who the persona is
#[derive(Args, Debug, Clone, Default)]
pub struct PersonaArgs {
    /// Personality (e.g. "introverted traveler")
    #[arg(short = 'p', long, value_name = "TEXT")]
    pub personality: Option<String>,

    /// Visual aesthetic (e.g. grainy, vintage, cinematic)
    #[arg(short = 'a', long, value_name = "TEXT")]
    pub aesthetic: Option<String>,

    /// Primary environment (e.g. "urban cityscapes")
    #[arg(short = 'e', long, value_name = "TEXT")]
    pub environment: Option<String>,
}

impl PersonaArgs {
    pub fn to_persona(&self) -> PersonaTraits {
        PersonaTraits::new(
            self.personality.clone().unwrap_or_default(),
            self.aesthetic.clone().unwrap_or_default(),
            self.environment.clone().unwrap_or_default(),
        )
    }
}

/// What the shot shows
#[derive(Args, Debug, Clone, Default)]
pub struct SceneArgs {
    /// Where the photo is taken
    #[arg(short = 'l', long, value_name = "TEXT")]
    pub location: Option<String>,

    /// Time of day (morning, noon, evening, night, ...)
    #[arg(short = 't', long, value_name = "TEXT")]
    pub time_of_day: Option<String>,

    /// What the persona is doing
    #[arg(long, value_name = "TEXT")]
    pub activity: Option<String>,

    /// Mood (happy, pensive, sleepy, ...)
    #[arg(short = 'm', long, value_name = "TEXT")]
    pub mood: Option<String>,

    /// Camera angle (eye level, selfie, overhead, ...)
    #[arg(long, value_name = "TEXT")]
    pub camera_angle: Option<String>,

    /// Aspect ratio (1:1, 4:5, 9:16, 16:9, ...)
    #[arg(short = 'r', long, value_name = "RATIO")]
    pub aspect_ratio: Option<String>,

    /// Extra instructions appended verbatim
    #[arg(short = 'x', long = "instructions", value_name = "TEXT")]
    pub additional_instructions: Option<String>,
}

impl SceneArgs {
    pub fn to_scene(&self) -> SceneConfig {
        SceneConfig {
            location: self.location.clone(),
            time_of_day: self.time_of_day.clone(),
            activity: self.activity.clone(),
            mood: self.mood.clone(),
            camera_angle: self.camera_angle.clone(),
            aspect_ratio: self.aspect_ratio.clone(),
            additional_instructions: self.additional_instructions.clone(),
        }
    }
}

/// Arguments for `generate`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Face/body reference image (required)
    #[arg(short = 'f', long, value_name = "FILE")]
    pub face: PathBuf,

    /// Location reference image
    #[arg(long, value_name = "FILE")]
    pub location_image: Option<PathBuf>,

    /// Clothing/items reference image
    #[arg(long, value_name = "FILE")]
    pub items_image: Option<PathBuf>,

    /// Output file (default: persona.<ext> from the returned type)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write a caption
    #[arg(short = 'c', long)]
    pub caption: bool,

    /// Print the prompt that was sent
    #[arg(long)]
    pub show_prompt: bool,

    #[command(flatten)]
    pub persona: PersonaArgs,

    #[command(flatten)]
    pub scene: SceneArgs,
}

/// Arguments for `prompt`
#[derive(Args, Debug, Clone, Default)]
pub struct PromptArgs {
    /// Compose as if a location image were attached
    #[arg(long)]
    pub with_location_image: bool,

    /// Compose as if an items image were attached
    #[arg(long)]
    pub with_items_image: bool,

    #[command(flatten)]
    pub persona: PersonaArgs,

    #[command(flatten)]
    pub scene: SceneArgs,
}

impl PromptArgs {
    pub fn flags(&self) -> ReferenceFlags {
        ReferenceFlags {
            has_location: self.with_location_image,
            has_items: self.with_items_image,
        }
    }
}

/// Arguments for `caption`
#[derive(Args, Debug, Clone)]
pub struct CaptionArgs {
    /// Image to caption
    #[arg(short = 'i', long, value_name = "FILE")]
    pub image: PathBuf,

    #[command(flatten)]
    pub persona: PersonaArgs,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "image_model",
    "caption_model",
    "timeout",
    "max_image_mb",
    "caption",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
