use crate::error::Result;
use crate::infrastructure::official::DEFAULT_NOTIFICATION_URL;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Settings of an [`OfficialHandler`](crate::infrastructure::official::OfficialHandler).
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct HandlerConfig {
    /// Directory the log files are written to.
    pub path: PathBuf,
    /// URL reported as the commerce's notification endpoint.
    #[serde(default = "default_notification_url")]
    pub notification_url: String,
}

fn default_notification_url() -> String {
    DEFAULT_NOTIFICATION_URL.to_string()
}

impl HandlerConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            notification_url: default_notification_url(),
        }
    }

    /// Loads a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_notification_url_defaults() {
        let config: HandlerConfig = serde_json::from_str(r#"{"path": "/var/log/tbk"}"#).unwrap();

        assert_eq!(config.path, PathBuf::from("/var/log/tbk"));
        assert_eq!(config.notification_url, "http://127.0.0.1/notify");
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"path": "/tmp/x", "notification_url": "http://a/b"}}"#).unwrap();

        let config = HandlerConfig::from_path(file.path()).unwrap();
        assert_eq!(config.notification_url, "http://a/b");
    }

    #[test]
    fn test_from_path_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "path = /tmp/x").unwrap();

        assert!(matches!(
            HandlerConfig::from_path(file.path()),
            Err(crate::error::AuditError::ConfigError(_))
        ));
    }
}
