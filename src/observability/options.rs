//! Logger options supplied by a cloud options provider.
//!
//! Options describe the shape of each rendered record: which key carries the
//! message, how the level is spelled, how the timestamp is encoded and which
//! static fields are stamped on every line.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::{json, Map, Value};
use tracing::Level;

/// How the event level is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFormat {
    /// Numeric levels: trace=10, debug=20, info=30, warn=40, error=50.
    #[default]
    Number,
    /// Lower-case labels (`info`, `warn`, ...).
    Label,
    /// Google Cloud Logging severities (`INFO`, `WARNING`, ...).
    Severity,
}

const NUMBERS: [u64; 5] = [10, 20, 30, 40, 50];
const LABELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
// Cloud Logging has no TRACE severity.
const SEVERITIES: [&str; 5] = ["DEBUG", "DEBUG", "INFO", "WARNING", "ERROR"];

fn ordinal(level: &Level) -> usize {
    match *level {
        Level::TRACE => 0,
        Level::DEBUG => 1,
        Level::INFO => 2,
        Level::WARN => 3,
        _ => 4,
    }
}

impl LevelFormat {
    /// Render a tracing level in this format.
    pub fn render(&self, level: &Level) -> Value {
        let i = ordinal(level);
        match self {
            LevelFormat::Number => Value::from(NUMBERS[i]),
            LevelFormat::Label => Value::from(LABELS[i]),
            LevelFormat::Severity => Value::from(SEVERITIES[i]),
        }
    }
}

/// How (and whether) the record timestamp is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    /// No timestamp field.
    None,
    /// Milliseconds since the Unix epoch under `time`.
    #[default]
    EpochMillis,
    /// `{seconds, nanos}` under `timestamp`, as accepted by Cloud Logging.
    Gcp,
}

impl TimestampFormat {
    /// Key and value to insert for `now`, if any.
    pub fn render(&self, now: SystemTime) -> Option<(&'static str, Value)> {
        let since_epoch = now.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO);
        match self {
            TimestampFormat::None => None,
            TimestampFormat::EpochMillis => {
                Some(("time", Value::from(since_epoch.as_millis() as u64)))
            }
            TimestampFormat::Gcp => Some((
                "timestamp",
                json!({
                    "seconds": since_epoch.as_secs(),
                    "nanos": since_epoch.subsec_nanos(),
                }),
            )),
        }
    }
}

/// Options used to construct a [`Logger`](crate::observability::logging::Logger).
#[derive(Debug, Clone, PartialEq)]
pub struct LoggerOptions {
    /// Level name. Overwritten by the factory with the configured level.
    pub level: Option<String>,

    /// Key under which the event message is written.
    pub message_key: String,

    /// Key under which the event level is written.
    pub level_key: String,

    pub level_format: LevelFormat,

    pub timestamp: TimestampFormat,

    /// Static fields added to every record.
    pub base: Map<String, Value>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: None,
            message_key: "msg".to_string(),
            level_key: "level".to_string(),
            level_format: LevelFormat::default(),
            timestamp: TimestampFormat::default(),
            base: Map::new(),
        }
    }
}

impl LoggerOptions {
    /// Merge a level into these options. The given level always wins.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Replace the message key.
    pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
        self.message_key = key.into();
        self
    }
}
