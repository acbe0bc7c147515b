//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse, apply environment overrides and validate.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    finish(toml::from_str(content)?, |_| {})
}

/// Load the config file, or write a default one when it does not exist.
///
/// `overrides` runs after the environment overrides and before
/// validation, so command-line flags can repair a bad file value.
/// Returns `Ok(None)` after creating the file so the caller can stop and
/// let the operator review it.
pub fn load_or_create<F>(path: &Path, overrides: F) -> Result<Option<AppConfig>, ConfigError>
where
    F: FnOnce(&mut AppConfig),
{
    if path.exists() {
        let config = toml::from_str(&fs::read_to_string(path)?)?;
        return finish(config, overrides).map(Some);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(&AppConfig::default())?)?;
    Ok(None)
}

/// Load the config file when present, defaults otherwise.
pub fn load_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    if path.exists() {
        load_config(path)
    } else {
        finish(AppConfig::default(), |_| {})
    }
}

fn finish<F>(mut config: AppConfig, overrides: F) -> Result<AppConfig, ConfigError>
where
    F: FnOnce(&mut AppConfig),
{
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Override selected settings from the environment.
///
/// `lookup` abstracts `std::env::var` so overrides can be tested without
/// touching the process environment.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(v) = get("BIND_ADDRESS") {
        config.listener.bind_address = v;
    }
    if let Some(v) = get("ASSETS_DIR") {
        config.assets.dir = v;
    }
    if let Some(v) = get("LOG_LEVEL") {
        config.observability.log_level = v;
    }
    if let Some(v) = get("TLS_ENABLE") {
        if matches!(v.to_lowercase().as_str(), "true" | "t" | "1") {
            config.listener.tls.enabled = true;
        }
    }
    if let Some(v) = get("TLS_CERT") {
        config.listener.tls.cert_path = v;
    }
    if let Some(v) = get("TLS_KEY") {
        config.listener.tls.key_path = v;
    }
}
