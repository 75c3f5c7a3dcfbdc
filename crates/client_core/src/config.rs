use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use url::Url;

pub const DEFAULT_PRODUCTS_URL: &str = "https://your-backend.onrender.com/products";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const CONFIG_FILE_NAME: &str = "client.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed client.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid products url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("products url '{url}' must use http or https, got '{scheme}'")]
    UnsupportedScheme { url: String, scheme: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub products_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            products_url: DEFAULT_PRODUCTS_URL.into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.products_url).map_err(|source| ConfigError::InvalidUrl {
            url: self.products_url.clone(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::UnsupportedScheme {
                url: self.products_url.clone(),
                scheme: scheme.to_string(),
            }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    products_url: Option<String>,
    log_filter: Option<String>,
}

fn parse_file_config(raw: &str) -> Result<FileConfig, ConfigError> {
    Ok(toml::from_str(raw)?)
}

/// Defaults, then `client.toml` in the working directory, then the environment.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(CONFIG_FILE_NAME), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    config_path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_path) {
        match parse_file_config(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.products_url {
                    settings.products_url = v;
                }
                if let Some(v) = file_cfg.log_filter {
                    settings.log_filter = v;
                }
            }
            Err(err) => {
                warn!(path = %config_path.display(), "ignoring config file: {err}");
            }
        }
    }

    if let Some(v) = env("PRODUCTS_URL") {
        settings.products_url = v;
    }
    if let Some(v) = env("APP__PRODUCTS_URL") {
        settings.products_url = v;
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    settings
}
