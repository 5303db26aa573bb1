//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! LoggingConfig
//!     → logging.rs (make_logger: level, app context)
//!     → cloud.rs (target + app context → LoggerOptions)
//!     → options.rs (merged options, level wins)
//!     → layer.rs (events rendered as JSON lines)
//!
//! Consumers:
//!     → stdout, collected by the platform's log agent
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Record layout is owned by the options provider, not the call sites

pub mod cloud;
pub mod layer;
pub mod logging;
pub mod options;

#[cfg(test)]
mod testing;

pub use cloud::{AppContext, CloudLoggingOptions, CloudOptionsProvider, CloudTarget};
pub use logging::{make_logger, make_logger_with, LogLevel, Logger, LoggingError};
pub use options::{LevelFormat, LoggerOptions, TimestampFormat};
