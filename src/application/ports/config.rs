//! Configuration port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisted settings (API key, models, timeout, upload ceiling)
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored config. A missing file yields an all-`None` config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist the config, creating parent directories as needed.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the backing file
    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write the defaults. Fails with `AlreadyExists` if a file is present.
    async fn init(&self) -> Result<(), ConfigError>;
}
