//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment            config file (TOML)
//!     → loader.rs (from_env)         → loader.rs (parse & deserialize)
//!                                    → validation.rs (semantic checks)
//!     → LoggingConfig (immutable)
//!     → observability::logging::make_logger_with
//! ```
//!
//! # Design Decisions
//! - Config is read once per logger construction
//! - Only the application version is required; everything else has a default
//! - Empty environment values are treated as unset

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LoggingConfig, DEFAULT_APP_NAME};
