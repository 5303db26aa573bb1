//! Configuration schema definitions.
//!
//! This module defines the logging configuration consumed by the logger
//! factory. The type derives Serde traits so it can be read from a config
//! file as well as from the process environment.

use serde::{Deserialize, Serialize};

/// Variable holding the deployed application version (required).
pub const VERSION_ENV_VAR: &str = "AUTHORITY_VERSION";

/// Variable holding the log level (optional, case-insensitive).
pub const LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Variable holding the application name reported to the log backend.
pub const ENV_NAME_ENV_VAR: &str = "LOG_ENV_NAME";

/// Variable selecting the cloud logging target (e.g. `gcp`).
pub const TARGET_ENV_VAR: &str = "LOG_TARGET";

/// Application name used when `LOG_ENV_NAME` is unset.
pub const DEFAULT_APP_NAME: &str = "veraid-authority";

/// Level used when `LOG_LEVEL` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging configuration for the authority service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application version, reported as part of the app context.
    pub version: String,

    /// Raw log level as configured. Normalized by [`LoggingConfig::level`].
    #[serde(default)]
    pub level: Option<String>,

    /// Application name override.
    #[serde(default)]
    pub env_name: Option<String>,

    /// Cloud logging target.
    #[serde(default)]
    pub target: Option<String>,
}

impl LoggingConfig {
    /// Create a config with only the required version set.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Lower-cased log level, `info` when unset.
    pub fn level(&self) -> String {
        self.level
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }

    /// Application name, falling back to [`DEFAULT_APP_NAME`].
    pub fn app_name(&self) -> &str {
        self.env_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Logging target, if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}
