use chrono::DateTime;
use chrono_tz::Tz;

pub const LOG_DATE_FORMAT: &str = "%d%m%Y";
pub const LOG_TIME_FORMAT: &str = "%H%M%S";

/// Date and time columns of one event, both taken from a single instant.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Timestamp {
    pub date: String,
    pub time: String,
}

impl Timestamp {
    pub fn from_instant(instant: &DateTime<Tz>) -> Self {
        Self {
            date: instant.format(LOG_DATE_FORMAT).to_string(),
            time: instant.format(LOG_TIME_FORMAT).to_string(),
        }
    }
}

/// Everything recorded when a payment is handed off to Webpay.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PaymentEvent {
    pub date: String,
    pub time: String,
    pub pid: u32,
    pub commerce_id: String,
    pub transaction_id: String,
    pub request_ip: String,
    pub token: String,
    pub webpay_server: String,
}

/// Everything recorded when Webpay notifies an outcome.
///
/// Shared by confirmation and error events. `notification_url` overrides
/// the handler's configured default when set.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ConfirmationEvent {
    pub date: String,
    pub time: String,
    pub pid: u32,
    pub commerce_id: String,
    pub transaction_id: String,
    pub request_ip: String,
    pub order_id: String,
    pub webpay_server: String,
    pub notification_url: Option<String>,
}
