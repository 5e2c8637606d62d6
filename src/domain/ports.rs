use super::event::{ConfirmationEvent, PaymentEvent};
use super::payload::Payload;
use crate::error::{AuditError, Result};

/// Destination for audit records.
///
/// Every operation defaults to [`AuditError::NotImplemented`], so a handler
/// only has to override what it actually records. Use
/// [`NullHandler`](crate::infrastructure::null::NullHandler) to discard
/// everything.
pub trait Handler: Send + Sync {
    /// Records the hand-off of a payment to Webpay.
    fn event_payment(&self, _event: &PaymentEvent) -> Result<()> {
        Err(AuditError::NotImplemented("event_payment"))
    }

    /// Records an accepted transaction.
    fn event_confirmation(&self, _event: &ConfirmationEvent) -> Result<()> {
        Err(AuditError::NotImplemented("event_confirmation"))
    }

    /// Records a rejected transaction.
    fn event_error(&self, _event: &ConfirmationEvent) -> Result<()> {
        Err(AuditError::NotImplemented("event_error"))
    }

    /// Journal line for an accepted transaction.
    fn log_confirmation(&self, _payload: &Payload, _commerce_id: &str) -> Result<()> {
        Err(AuditError::NotImplemented("log_confirmation"))
    }

    /// Journal line for a rejected transaction.
    fn log_error(&self, _payload: &Payload, _commerce_id: &str) -> Result<()> {
        Err(AuditError::NotImplemented("log_error"))
    }
}

pub type HandlerBox = Box<dyn Handler>;

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl Handler for Bare {}

    #[test]
    fn test_default_operations_are_not_implemented() {
        let handler = Bare;
        let payload = Payload::new();

        assert!(matches!(
            handler.log_error(&payload, "COM1"),
            Err(AuditError::NotImplemented("log_error"))
        ));
        assert!(matches!(
            handler.log_confirmation(&payload, "COM1"),
            Err(AuditError::NotImplemented("log_confirmation"))
        ));
    }
}
