//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing_subscriber::fmt::MakeWriter;
use veraid_authority::observability::{AppContext, CloudOptionsProvider, LoggerOptions};

/// Environment containing only the required variables.
pub const REQUIRED_ENV_VARS: &[(&str, &str)] = &[("AUTHORITY_VERSION", "1.0.1")];

/// Build a variable lookup over `REQUIRED_ENV_VARS` plus overrides.
///
/// An override with an empty value removes the variable.
pub fn env_vars(overrides: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let mut vars: HashMap<String, String> = REQUIRED_ENV_VARS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    for (key, value) in overrides {
        if value.is_empty() {
            vars.remove(*key);
        } else {
            vars.insert(key.to_string(), value.to_string());
        }
    }
    move |name: &str| vars.get(name).cloned()
}

/// Options provider that records every call and returns fixed options.
#[derive(Default)]
pub struct RecordingProvider {
    pub options: LoggerOptions,
    pub calls: RefCell<Vec<(Option<String>, AppContext)>>,
}

impl RecordingProvider {
    pub fn returning(options: LoggerOptions) -> Self {
        Self {
            options,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// The single recorded call.
    pub fn only_call(&self) -> (Option<String>, AppContext) {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one provider call");
        calls[0].clone()
    }
}

impl CloudOptionsProvider for RecordingProvider {
    fn options(&self, target: Option<&str>, app: &AppContext) -> LoggerOptions {
        self.calls
            .borrow_mut()
            .push((target.map(str::to_string), app.clone()));
        self.options.clone()
    }
}

/// In-memory writer capturing everything a logger writes.
#[derive(Clone, Default)]
pub struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    /// Captured output parsed as JSON lines.
    pub fn records(&self) -> Vec<Value> {
        let buf = self.buf.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
