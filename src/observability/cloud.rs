//! Cloud logging options.
//!
//! # Responsibilities
//! - Map a logging target and the app context to [`LoggerOptions`]
//! - Shape records the way the target's log ingestion expects
//!
//! # Targets
//! - none: plain JSON lines (numeric level, epoch `time`, `msg`)
//! - `gcp`: Google Cloud Logging structured payloads (`severity`,
//!   `message`, `timestamp`, `serviceContext`)

use std::fmt;
use std::str::FromStr;

use serde_json::json;

use crate::observability::options::{LevelFormat, LoggerOptions, TimestampFormat};

/// Metadata identifying the application that emits the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub name: String,
    pub version: String,
}

/// Produces logger options for a logging target.
pub trait CloudOptionsProvider {
    fn options(&self, target: Option<&str>, app: &AppContext) -> LoggerOptions;

    /// Whether `target` selects a layout of its own. Unsupported targets get
    /// default options and are reported once the logger is installed.
    fn supports(&self, _target: &str) -> bool {
        true
    }
}

impl<F> CloudOptionsProvider for F
where
    F: Fn(Option<&str>, &AppContext) -> LoggerOptions,
{
    fn options(&self, target: Option<&str>, app: &AppContext) -> LoggerOptions {
        self(target, app)
    }
}

/// Supported cloud logging targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudTarget {
    /// Google Cloud Logging.
    Gcp,
}

impl fmt::Display for CloudTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudTarget::Gcp => write!(f, "gcp"),
        }
    }
}

impl FromStr for CloudTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gcp" => Ok(CloudTarget::Gcp),
            other => Err(other.to_string()),
        }
    }
}

/// The built-in options provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudLoggingOptions;

impl CloudOptionsProvider for CloudLoggingOptions {
    fn options(&self, target: Option<&str>, app: &AppContext) -> LoggerOptions {
        match target.map(str::parse::<CloudTarget>) {
            Some(Ok(CloudTarget::Gcp)) => gcp_options(app),
            None | Some(Err(_)) => LoggerOptions::default(),
        }
    }

    fn supports(&self, target: &str) -> bool {
        target.parse::<CloudTarget>().is_ok()
    }
}

fn gcp_options(app: &AppContext) -> LoggerOptions {
    let mut options = LoggerOptions {
        level_key: "severity".to_string(),
        level_format: LevelFormat::Severity,
        timestamp: TimestampFormat::Gcp,
        ..LoggerOptions::default()
    }
    .with_message_key("message");

    // Lets Error Reporting group errors per service and version.
    options.base.insert(
        "serviceContext".to_string(),
        json!({ "service": app.name, "version": app.version }),
    );
    options
}
