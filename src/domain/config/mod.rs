//! Configuration domain module

mod app_config;

pub use app_config::{AppConfig, DEFAULT_CAPTION_MODEL, DEFAULT_IMAGE_MODEL};
