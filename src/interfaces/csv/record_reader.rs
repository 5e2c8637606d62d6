use crate::domain::commerce::Commerce;
use crate::domain::payload::Payload;
use crate::domain::transaction::{Confirmation, Payment};
use crate::error::{AuditError, Result};
use std::io::Read;
use std::str::FromStr;

/// Prefix of the columns copied into a record's payload.
pub const PAYLOAD_COLUMN_PREFIX: &str = "TBK_";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RecordKind {
    Payment,
    Confirmation,
    Error,
}

impl FromStr for RecordKind {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "payment" => Ok(RecordKind::Payment),
            "confirmation" => Ok(RecordKind::Confirmation),
            "error" => Ok(RecordKind::Error),
            other => Err(AuditError::InvalidRecord(format!(
                "unknown kind `{}`",
                other
            ))),
        }
    }
}

/// One row of a replay file, ready to be handed to a `Logger`.
#[derive(Debug, PartialEq, Clone)]
pub enum ReplayRecord {
    Payment(Payment),
    Confirmation(Confirmation),
    Error(Confirmation),
}

/// Reads audit records from a CSV source.
///
/// Fixed columns are `kind`, `commerce_id`, `testing`, `request_ip`,
/// `transaction_id`, `token` and `order_id`; only those a kind needs have to
/// be present. Non-empty `TBK_*` columns become the payload of confirmation
/// and error rows.
pub struct RecordReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RecordReader<R> {
    /// Creates a new `RecordReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and parses records.
    ///
    /// Fails up front only when the header row cannot be read.
    pub fn records(mut self) -> Result<impl Iterator<Item = Result<ReplayRecord>>> {
        let headers = self.reader.headers()?.clone();
        Ok(self
            .reader
            .into_records()
            .map(move |row| parse_record(&headers, &row?)))
    }
}

fn parse_record(headers: &csv::StringRecord, row: &csv::StringRecord) -> Result<ReplayRecord> {
    let line = row.position().map(|p| p.line()).unwrap_or_default();
    let column = |name: &str| -> Result<String> {
        headers
            .iter()
            .position(|h| h == name)
            .and_then(|i| row.get(i))
            .filter(|value| !value.is_empty())
            .map(String::from)
            .ok_or_else(|| AuditError::InvalidRecord(format!("line {}: missing {}", line, name)))
    };

    let kind: RecordKind = column("kind")?.parse()?;
    let raw_testing = column("testing")?;
    let testing = raw_testing.parse::<bool>().map_err(|_| {
        AuditError::InvalidRecord(format!(
            "line {}: testing must be true or false, got `{}`",
            line, raw_testing
        ))
    })?;
    let commerce = Commerce::new(column("commerce_id")?, testing);

    if kind == RecordKind::Payment {
        return Ok(ReplayRecord::Payment(Payment {
            commerce,
            transaction_id: column("transaction_id")?,
            request_ip: column("request_ip")?,
            token: column("token")?,
        }));
    }

    let payload: Payload = headers
        .iter()
        .zip(row.iter())
        .filter(|(header, value)| header.starts_with(PAYLOAD_COLUMN_PREFIX) && !value.is_empty())
        .collect();
    let confirmation = Confirmation {
        commerce,
        request_ip: column("request_ip")?,
        order_id: column("order_id")?,
        payload,
    };
    Ok(match kind {
        RecordKind::Error => ReplayRecord::Error(confirmation),
        _ => ReplayRecord::Confirmation(confirmation),
    })
}
