use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Cannot append to log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Missing payload field: {0}")]
    MissingField(String),
    #[error("Logging handler must implement {0}")]
    NotImplemented(&'static str),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
