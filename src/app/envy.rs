use std::time::Duration;

use serde::Deserialize;

use super::errors::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,
    pub cors_origins: Option<String>,

    pub generator: Option<String>,
    pub generation_timeout_secs: Option<u64>,
    #[serde(default)]
    pub download_remote_images: bool,
    pub temp_dir: Option<String>,
    pub temp_file_ttl_secs: Option<u64>,

    pub ark_api_key: Option<String>,
    pub ark_api_url: Option<String>,
    pub ark_model: Option<String>,
    pub ark_image_size: Option<String>,

    pub google_api_key: Option<String>,
    pub imagen_api_url: Option<String>,
    pub imagen_model: Option<String>,
}

impl Envy {
    pub const DEFAULT_PORT: u16 = 8000;
    pub const DEFAULT_CORS_ORIGINS: &'static str = "http://localhost:3000";
    pub const DEFAULT_TEMP_DIR: &'static str = "temp";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
    pub const DEFAULT_TEMP_FILE_TTL_SECS: u64 = 60 * 60;

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::from_env::<Envy>()?)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(Self::DEFAULT_PORT)
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .unwrap_or(Self::DEFAULT_CORS_ORIGINS)
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect()
    }

    pub fn temp_dir(&self) -> &str {
        self.temp_dir.as_deref().unwrap_or(Self::DEFAULT_TEMP_DIR)
    }

    /// `None` when generated images should be kept forever.
    pub fn temp_file_ttl(&self) -> Option<Duration> {
        match self
            .temp_file_ttl_secs
            .unwrap_or(Self::DEFAULT_TEMP_FILE_TTL_SECS)
        {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(
            self.generation_timeout_secs
                .unwrap_or(Self::DEFAULT_TIMEOUT_SECS),
        )
    }
}

/// Treats an empty variable the same as an unset one.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
