//! The handler that writes Transbank's official log files.
//!
//! Event blocks go to `TBK_EVN<YYYYMMDD>.log` and journal lines to
//! `tbk_bitacora_TR_NORMAL_<MMDD>.log`, both under the configured
//! directory and dated with the handler's clock in `America/Santiago`.
//! Each write opens the file in append mode and closes it straight away.

pub mod journal;
pub mod template;

use crate::config::HandlerConfig;
use crate::domain::clock::{ClockBox, SantiagoClock};
use crate::domain::event::{ConfirmationEvent, PaymentEvent};
use crate::domain::payload::Payload;
use crate::domain::ports::Handler;
use crate::error::{AuditError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use template::OutcomeContext;
use tracing::debug;

pub const DEFAULT_NOTIFICATION_URL: &str = "http://127.0.0.1/notify";

const EVENTS_LOG_FILE_DATE_FORMAT: &str = "%Y%m%d";
const JOURNAL_LOG_FILE_DATE_FORMAT: &str = "%m%d";

pub struct OfficialHandler {
    path: PathBuf,
    notification_url: String,
    clock: ClockBox,
}

impl OfficialHandler {
    /// Creates a handler writing under `path`.
    ///
    /// The directory is not checked here; a missing or read-only directory
    /// surfaces as [`AuditError::LogFile`] on the first write.
    pub fn new(path: impl Into<PathBuf>, notification_url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            notification_url: notification_url.into(),
            clock: Box::new(SantiagoClock),
        }
    }

    pub fn from_config(config: &HandlerConfig) -> Self {
        Self::new(config.path.clone(), config.notification_url.clone())
    }

    /// Replaces the clock used to date the log files.
    pub fn with_clock(mut self, clock: ClockBox) -> Self {
        self.clock = clock;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn notification_url(&self) -> &str {
        &self.notification_url
    }

    /// Today's events file.
    pub fn events_log_path(&self) -> PathBuf {
        let now = self.clock.now();
        self.path
            .join(format!("TBK_EVN{}.log", now.format(EVENTS_LOG_FILE_DATE_FORMAT)))
    }

    /// Today's journal file.
    pub fn journal_log_path(&self) -> PathBuf {
        let now = self.clock.now();
        self.path.join(format!(
            "tbk_bitacora_TR_NORMAL_{}.log",
            now.format(JOURNAL_LOG_FILE_DATE_FORMAT)
        ))
    }

    fn outcome_context<'a>(&'a self, event: &'a ConfirmationEvent) -> OutcomeContext<'a> {
        OutcomeContext {
            event,
            notification_url: event
                .notification_url
                .as_deref()
                .unwrap_or(&self.notification_url),
        }
    }
}

fn append(path: &Path, contents: &str) -> Result<()> {
    let log_file_error = |source| AuditError::LogFile {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(log_file_error)?;
    file.write_all(contents.as_bytes()).map_err(log_file_error)?;
    debug!(path = %path.display(), bytes = contents.len(), "appended audit record");
    Ok(())
}

impl Handler for OfficialHandler {
    fn event_payment(&self, event: &PaymentEvent) -> Result<()> {
        let block = template::render(&template::PAYMENT, event)?;
        append(&self.events_log_path(), &block)
    }

    fn event_confirmation(&self, event: &ConfirmationEvent) -> Result<()> {
        let block = template::render(&template::CONFIRMATION, &self.outcome_context(event))?;
        append(&self.events_log_path(), &block)
    }

    fn event_error(&self, event: &ConfirmationEvent) -> Result<()> {
        let block = template::render(&template::ERROR, &self.outcome_context(event))?;
        append(&self.events_log_path(), &block)
    }

    fn log_confirmation(&self, payload: &Payload, commerce_id: &str) -> Result<()> {
        let line = journal::render(&journal::ACK, payload, commerce_id)?;
        append(&self.journal_log_path(), &line)
    }

    fn log_error(&self, payload: &Payload, commerce_id: &str) -> Result<()> {
        let line = journal::render(&journal::ERR, payload, commerce_id)?;
        append(&self.journal_log_path(), &line)
    }
}
