//! Renderer configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no file
//! at all) gives the stock Safehike behaviour.
//!
//! # Example
//!
//! ```toml
//! truncate_at = 200
//! page_title = "Safehike"
//! chat_title = "Trip planner"
//! ```
//!
//! `SAFEHIKE_TRUNCATE_AT` overrides `truncate_at` after the file is read.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::html_export::{
    DEFAULT_CHAT_TITLE, DEFAULT_GREETING, DEFAULT_PAGE_TITLE, DEFAULT_TRUNCATE_AT,
    ONBOARDING_SENTINEL, RenderOptions,
};

pub const TRUNCATE_AT_ENV: &str = "SAFEHIKE_TRUNCATE_AT";

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config TOML: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub truncate_at: usize,
    pub greeting_sentinel: String,
    pub greeting_text: String,
    pub page_title: String,
    pub chat_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            truncate_at: DEFAULT_TRUNCATE_AT,
            greeting_sentinel: ONBOARDING_SENTINEL.to_string(),
            greeting_text: DEFAULT_GREETING.to_string(),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            chat_title: DEFAULT_CHAT_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, else from the platform config file when it exists,
    /// else defaults. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };

        let mut config = match &resolved {
            Some(p) => {
                let text = std::fs::read_to_string(p).map_err(|source| ConfigError::ReadFile {
                    path: p.clone(),
                    source,
                })?;
                Self::from_toml_str(&text)?
            }
            None => Self::default(),
        };

        config.apply_env(|var| std::env::var(var).ok())?;
        config.validate()?;

        debug!(
            component = "config",
            operation = "load",
            path = resolved.as_ref().map(|p| p.display().to_string()).unwrap_or_default(),
            truncate_at = config.truncate_at,
            "Configuration loaded"
        );
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Apply environment overrides through `lookup` (usually `std::env::var`).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(TRUNCATE_AT_ENV) {
            self.truncate_at = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: TRUNCATE_AT_ENV,
                value: raw.clone(),
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.truncate_at == 0 {
            return Err(ConfigError::Validation(
                "truncate_at must be greater than 0".to_string(),
            ));
        }
        if self.greeting_sentinel.is_empty() {
            return Err(ConfigError::Validation(
                "greeting_sentinel must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            greeting_sentinel: self.greeting_sentinel.clone(),
            greeting_text: self.greeting_text.clone(),
            truncate_at: self.truncate_at,
            expand_thinking: false,
            page_title: self.page_title.clone(),
            chat_title: self.chat_title.clone(),
        }
    }
}

/// `<platform config dir>/config.toml`, when a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "safehike", "safehike")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
