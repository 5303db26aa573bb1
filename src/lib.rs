//! VeraId Authority logging bootstrap.

pub mod config;
pub mod observability;

pub use config::LoggingConfig;
pub use observability::{make_logger, make_logger_with, Logger, LoggingError};
