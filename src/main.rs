//! VeraId Authority log emitter.
//!
//! Builds the service logger exactly as the authority does at startup and
//! writes one record through it. Useful for checking what a deployment's
//! `AUTHORITY_VERSION`, `LOG_LEVEL`, `LOG_ENV_NAME` and `LOG_TARGET` produce.
//!
//! ```text
//! environment / --config file
//!     → LoggingConfig
//!     → make_logger_with (cloud options + level)
//!     → Logger::init (stdout)
//!     → one JSON line
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use veraid_authority::config::{load_config, LoggingConfig};
use veraid_authority::observability::{make_logger_with, CloudLoggingOptions};

#[derive(Parser)]
#[command(name = "veraid-authority-log")]
#[command(about = "Emit a record through the VeraId Authority logger", long_about = None)]
struct Cli {
    /// Read the logging configuration from a TOML file instead of the environment
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Level of the emitted record
    #[arg(short, long, value_enum, default_value_t = EventLevel::Info)]
    level: EventLevel,

    /// Message to log
    message: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum EventLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{}", error_message(err.as_ref()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggingConfig::from_env()?,
    };

    let logger = make_logger_with(&config, &CloudLoggingOptions)?;
    logger.init()?;

    tracing::debug!(
        log_level = logger.level(),
        app_name = config.app_name(),
        version = %config.version,
        "Logger configured"
    );

    match cli.level {
        EventLevel::Trace => tracing::trace!("{}", cli.message),
        EventLevel::Debug => tracing::debug!("{}", cli.message),
        EventLevel::Info => tracing::info!("{}", cli.message),
        EventLevel::Warn => tracing::warn!("{}", cli.message),
        EventLevel::Error => tracing::error!("{}", cli.message),
    }

    Ok(())
}

fn error_message(err: &dyn std::error::Error) -> String {
    format!("Error: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use veraid_authority::config::ConfigError;

    #[test]
    fn missing_version_reads_as_a_message() {
        let err = ConfigError::MissingVar("AUTHORITY_VERSION");
        assert_eq!(
            error_message(&err),
            r#"Error: "AUTHORITY_VERSION" is a required variable, but it was not set"#
        );
    }

    #[test]
    fn missing_config_file_fails_before_installing() {
        let cli = Cli::parse_from([
            "veraid-authority-log",
            "--config",
            "/nonexistent/veraid-authority.toml",
            "hello",
        ]);

        let err = run(cli).unwrap_err();
        assert!(error_message(err.as_ref()).starts_with("Error: IO error: "));
    }
}
