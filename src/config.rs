//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `TOKPONLA_*` environment variable overrides.
//! The browser build uses [`Config::default`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::upload::MEGABYTE;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub uploads: UploadConfig,

    #[serde(default)]
    pub draft: DraftConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upload size limits
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_image_max_bytes")]
    pub image_max_bytes: u64,

    #[serde(default = "default_attachment_max_bytes")]
    pub attachment_max_bytes: u64,
}

fn default_image_max_bytes() -> u64 {
    5 * MEGABYTE
}

fn default_attachment_max_bytes() -> u64 {
    10 * MEGABYTE
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            image_max_bytes: default_image_max_bytes(),
            attachment_max_bytes: default_attachment_max_bytes(),
        }
    }
}

/// Minimum lengths of the draft's text fields, in characters
#[derive(Debug, Clone, Deserialize)]
pub struct DraftConfig {
    #[serde(default = "default_title_min")]
    pub title_min_chars: usize,

    #[serde(default = "default_description_min")]
    pub description_min_chars: usize,

    #[serde(default = "default_location_min")]
    pub location_min_chars: usize,
}

fn default_title_min() -> usize {
    5
}

fn default_description_min() -> usize {
    20
}

fn default_location_min() -> usize {
    3
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            title_min_chars: default_title_min(),
            description_min_chars: default_description_min(),
            location_min_chars: default_location_min(),
        }
    }
}

/// How long toasts stay on screen
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_success_ms")]
    pub success_ms: u32,

    #[serde(default = "default_error_ms")]
    pub error_ms: u32,
}

fn default_success_ms() -> u32 {
    3000
}

fn default_error_ms() -> u32 {
    5000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            success_ms: default_success_ms(),
            error_ms: default_error_ms(),
        }
    }
}

/// Scripted assistant widget
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_greeting")]
    pub greeting: String,

    #[serde(default = "default_reply")]
    pub reply: String,

    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u32,
}

fn default_greeting() -> String {
    "Bonjour ! Je suis l'assistant IA de TokponlaEngagé. Comment puis-je vous aider aujourd'hui ?"
        .to_string()
}

fn default_reply() -> String {
    "Je suis une démonstration de l'assistant IA. Dans la version complète, je pourrai vous aider \
     à découvrir des projets, comprendre comment contribuer, et répondre à vos questions sur la \
     plateforme."
        .to_string()
}

fn default_reply_delay() -> u32 {
    1000
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            reply: default_reply(),
            reply_delay_ms: default_reply_delay(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("tokponla").join("config.toml")),
            Some(PathBuf::from("./tokponla.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Upload limits
        if let Some(v) = env_parse("TOKPONLA_IMAGE_MAX_BYTES") {
            self.uploads.image_max_bytes = v;
        }
        if let Some(v) = env_parse("TOKPONLA_ATTACHMENT_MAX_BYTES") {
            self.uploads.attachment_max_bytes = v;
        }

        // Assistant
        if let Some(v) = env_parse("TOKPONLA_ASSISTANT_DELAY_MS") {
            self.assistant.reply_delay_ms = v;
        }

        // Logging overrides
        if let Ok(level) = std::env::var("TOKPONLA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("TOKPONLA_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Ignoring {}: cannot parse {:?}", key, raw);
            None
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# TokponlaEngagé Configuration
#
# Place this file at ~/.config/tokponla/config.toml or ./tokponla.toml
# Environment variables (TOKPONLA_*) override these settings

[uploads]
# Largest cover or gallery image, in bytes (5 MB)
image_max_bytes = 5242880

# Largest attachment, in bytes (10 MB)
attachment_max_bytes = 10485760

[draft]
# Minimum lengths, in characters
title_min_chars = 5
description_min_chars = 20
location_min_chars = 3

[notifications]
# Toast display time in milliseconds
success_ms = 3000
error_ms = 5000

[assistant]
# Delay before the scripted reply, in milliseconds
reply_delay_ms = 1000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/tokponla/tokponla.log"
"#
    .to_string()
}
