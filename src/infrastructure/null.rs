use crate::domain::event::{ConfirmationEvent, PaymentEvent};
use crate::domain::payload::Payload;
use crate::domain::ports::Handler;
use crate::error::Result;

/// Handler that discards every record.
///
/// This is what a [`Logger`](crate::application::logger::Logger) uses until
/// a real handler is configured, so logging is always safe to call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHandler;

impl Handler for NullHandler {
    fn event_payment(&self, _event: &PaymentEvent) -> Result<()> {
        Ok(())
    }

    fn event_confirmation(&self, _event: &ConfirmationEvent) -> Result<()> {
        Ok(())
    }

    fn event_error(&self, _event: &ConfirmationEvent) -> Result<()> {
        Ok(())
    }

    fn log_confirmation(&self, _payload: &Payload, _commerce_id: &str) -> Result<()> {
        Ok(())
    }

    fn log_error(&self, _payload: &Payload, _commerce_id: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_handler_accepts_everything() {
        let handler = NullHandler;
        let payment = PaymentEvent {
            date: String::new(),
            time: String::new(),
            pid: 0,
            commerce_id: String::new(),
            transaction_id: String::new(),
            request_ip: String::new(),
            token: String::new(),
            webpay_server: String::new(),
        };
        let confirmation = ConfirmationEvent {
            date: "not a date".into(),
            time: "??".into(),
            pid: u32::MAX,
            commerce_id: "COM1".into(),
            transaction_id: "TX1".into(),
            request_ip: "1.2.3.4".into(),
            order_id: "ORD1".into(),
            webpay_server: "nowhere".into(),
            notification_url: None,
        };
        // An empty payload would be a schema error for a real handler.
        let payload = Payload::new();

        assert!(handler.event_payment(&payment).is_ok());
        assert!(handler.event_confirmation(&confirmation).is_ok());
        assert!(handler.event_error(&confirmation).is_ok());
        assert!(handler.log_confirmation(&payload, "COM1").is_ok());
        assert!(handler.log_error(&payload, "COM1").is_ok());
    }
}
