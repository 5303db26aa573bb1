//! Loading the logger configuration from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use veraid_authority::config::{load_config, ConfigError};
use veraid_authority::observability::{make_logger_with, CloudLoggingOptions};

/// A config file in the temp dir, removed on drop.
struct TempConfig(PathBuf);

impl TempConfig {
    fn new(name: &str, content: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "veraid-authority-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        Self(path)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempConfig {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn loads_and_builds_logger() {
    let file = TempConfig::new(
        "valid",
        r#"
version = "1.0.1"
level = "WARN"
target = "gcp"
"#,
    );

    let config = load_config(file.path()).unwrap();
    let logger = make_logger_with(&config, &CloudLoggingOptions).unwrap();

    assert_eq!(logger.level(), "warn");
    assert_eq!(logger.message_key(), "message");
}

#[test]
fn reports_validation_errors() {
    let file = TempConfig::new("invalid", "version = \"\"\nenv_name = \" \"\n");

    let err = load_config(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 2));
}

#[test]
fn missing_version_is_a_parse_error() {
    let file = TempConfig::new("no-version", "level = \"info\"\n");

    let err = load_config(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_config(&std::env::temp_dir().join("veraid-authority-absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn temp_config_is_removed_on_drop() {
    let file = TempConfig::new("dropped", "version = \"1.0.1\"\n");
    let path = file.path().to_path_buf();
    assert!(path.exists());

    drop(file);

    assert!(!path.exists());
}
