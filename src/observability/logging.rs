//! Structured logging.
//!
//! # Responsibilities
//! - Build the service logger from configuration
//! - Ask the cloud options provider how records should look
//! - Install the logger as the process-wide subscriber on request
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - The configured level always overrides whatever the provider returns
//! - Construction has no side effects; [`Logger::init`] installs explicitly

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Registry;

use crate::config::schema::{LoggingConfig, DEFAULT_LOG_LEVEL, VERSION_ENV_VAR};
use crate::config::ConfigError;
use crate::observability::cloud::{AppContext, CloudLoggingOptions, CloudOptionsProvider};
use crate::observability::layer::JsonLayer;
use crate::observability::options::LoggerOptions;

/// Errors raised while building or installing a logger.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown level {0}")]
    UnknownLevel(String),

    #[error("failed to install logger: {0}")]
    Install(#[from] TryInitError),
}

/// Logger levels, from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    /// Nothing is written: tracing events stop at `error`, which ranks
    /// below fatal.
    Fatal,
    /// Nothing is written.
    Silent,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
            LogLevel::Silent => "silent",
        }
    }

    /// The tracing filter admitting events at this level and above.
    pub fn filter(&self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Fatal | LogLevel::Silent => LevelFilter::OFF,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            "silent" => Ok(LogLevel::Silent),
            other => Err(LoggingError::UnknownLevel(other.to_string())),
        }
    }
}

/// A configured, not yet installed, structured logger.
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    options: LoggerOptions,
    unknown_target: Option<String>,
}

impl Logger {
    /// Build a logger from merged options. Defaults to `info` without a level.
    pub fn new(options: LoggerOptions) -> Result<Self, LoggingError> {
        let level = options.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL).parse()?;
        Ok(Self {
            level,
            options,
            unknown_target: None,
        })
    }

    /// Level name, e.g. `"info"`.
    pub fn level(&self) -> &'static str {
        self.level.as_str()
    }

    pub fn log_level(&self) -> LogLevel {
        self.level
    }

    pub fn options(&self) -> &LoggerOptions {
        &self.options
    }

    pub fn message_key(&self) -> &str {
        &self.options.message_key
    }

    /// Logging target the options provider did not recognise, if any.
    pub fn unknown_target(&self) -> Option<&str> {
        self.unknown_target.as_deref()
    }

    /// Emit the warnings collected during construction on the current
    /// subscriber.
    pub fn report(&self) {
        if let Some(target) = &self.unknown_target {
            tracing::warn!(
                logging_target = %target,
                "Unknown logging target; using default options"
            );
        }
    }

    /// A layer rendering records into `make_writer`, without level filtering.
    pub fn layer<W>(&self, make_writer: W) -> JsonLayer<W>
    where
        W: for<'a> MakeWriter<'a> + 'static,
    {
        JsonLayer::new(self.options.clone(), make_writer)
    }

    /// A complete subscriber writing filtered records into `make_writer`.
    pub fn subscriber<W>(&self, make_writer: W) -> impl Subscriber + Send + Sync + 'static
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        Registry::default()
            .with(self.level.filter())
            .with(self.layer(make_writer))
    }

    /// Install this logger as the global subscriber, writing to stdout.
    pub fn init(&self) -> Result<(), LoggingError> {
        self.subscriber(std::io::stdout).try_init()?;
        self.report();
        Ok(())
    }
}

/// Build the service logger from the process environment.
pub fn make_logger() -> Result<Logger, LoggingError> {
    let config = LoggingConfig::from_env()?;
    make_logger_with(&config, &CloudLoggingOptions)
}

/// Build the service logger from an explicit config and options provider.
pub fn make_logger_with(
    config: &LoggingConfig,
    provider: &dyn CloudOptionsProvider,
) -> Result<Logger, LoggingError> {
    if config.version.trim().is_empty() {
        return Err(ConfigError::MissingVar(VERSION_ENV_VAR).into());
    }

    let app = AppContext {
        name: config.app_name().to_string(),
        version: config.version.clone(),
    };
    let options = provider.options(config.target(), &app);

    let mut logger = Logger::new(options.with_level(config.level()))?;
    logger.unknown_target = config
        .target()
        .filter(|target| !provider.supports(target))
        .map(str::to_string);
    Ok(logger)
}
