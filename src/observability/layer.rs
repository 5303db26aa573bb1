//! JSON record rendering.
//!
//! A [`tracing_subscriber::Layer`] that writes each event as a single JSON
//! line laid out according to [`LoggerOptions`].

use std::fmt;
use std::io::Write;
use std::time::SystemTime;

use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Layer};

use crate::observability::options::LoggerOptions;

/// Collects the fields of one event.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Map<String, Value>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        if field.name() == "message" {
            self.message = Some(match value {
                Value::String(s) => s,
                other => other.to_string(),
            });
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, Value::from(format!("{:?}", value)));
    }
}

/// Writes events as JSON lines.
pub struct JsonLayer<W> {
    options: LoggerOptions,
    make_writer: W,
}

impl<W> JsonLayer<W>
where
    W: for<'a> MakeWriter<'a> + 'static,
{
    pub fn new(options: LoggerOptions, make_writer: W) -> Self {
        Self {
            options,
            make_writer,
        }
    }

    fn render(&self, level: &Level, visitor: FieldVisitor, now: SystemTime) -> Map<String, Value> {
        let options = &self.options;
        let mut record = self.options.base.clone();

        // Event fields may shadow base fields but never the reserved keys.
        for (key, value) in visitor.fields {
            if key != options.message_key && key != options.level_key {
                record.insert(key, value);
            }
        }

        record.insert(options.level_key.clone(), options.level_format.render(level));
        if let Some((key, value)) = options.timestamp.render(now) {
            record.insert(key.to_string(), value);
        }
        if let Some(message) = visitor.message {
            record.insert(options.message_key.clone(), Value::from(message));
        }
        record
    }
}

impl<S, W> Layer<S> for JsonLayer<W>
where
    S: Subscriber,
    W: for<'a> MakeWriter<'a> + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let record = self.render(event.metadata().level(), visitor, SystemTime::now());
        let Ok(mut line) = serde_json::to_vec(&record) else {
            return;
        };
        line.push(b'\n');

        let mut writer = self.make_writer.make_writer_for(event.metadata());
        let _ = writer.write_all(&line);
    }
}
