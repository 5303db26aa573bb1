//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject blank values that would otherwise shadow defaults
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggingConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::LoggingConfig;

/// A single semantic problem with a [`LoggingConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The application version is empty.
    #[error("version must not be empty")]
    EmptyVersion,

    /// An optional field was set to a blank string.
    #[error("{0} must not be blank when set")]
    BlankField(&'static str),
}

/// Check a loaded config, collecting every problem found.
pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.version.trim().is_empty() {
        errors.push(ValidationError::EmptyVersion);
    }

    let optional = [
        ("level", &config.level),
        ("env_name", &config.env_name),
        ("target", &config.target),
    ];
    for (name, value) in optional {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            errors.push(ValidationError::BlankField(name));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
