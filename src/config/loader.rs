//! Configuration loading from the environment or disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{
    LoggingConfig, ENV_NAME_ENV_VAR, LEVEL_ENV_VAR, TARGET_ENV_VAR, VERSION_ENV_VAR,
};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("\"{0}\" is a required variable, but it was not set")]
    MissingVar(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl LoggingConfig {
    /// Read the logging configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the logging configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let version = get(VERSION_ENV_VAR).ok_or(ConfigError::MissingVar(VERSION_ENV_VAR))?;

        Ok(Self {
            version,
            level: get(LEVEL_ENV_VAR),
            env_name: get(ENV_NAME_ENV_VAR),
            target: get(TARGET_ENV_VAR),
        })
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LoggingConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: LoggingConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
