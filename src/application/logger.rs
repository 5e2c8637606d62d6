use crate::domain::clock::{ClockBox, SantiagoClock};
use crate::domain::event::{ConfirmationEvent, PaymentEvent, Timestamp};
use crate::domain::ports::{Handler, HandlerBox};
use crate::domain::transaction::{Confirmation, Payment};
use crate::error::Result;
use crate::infrastructure::null::NullHandler;
use tracing::trace;

/// Entry point for recording audit events.
///
/// `Logger` stamps each call with the current Santiago time and the process
/// id, derives the Webpay server from the commerce, and hands the result to
/// its active [`Handler`]. It holds no other state; every failure coming
/// from the handler is returned to the caller untouched.
pub struct Logger {
    handler: HandlerBox,
    clock: ClockBox,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Box::new(NullHandler))
    }
}

impl Logger {
    /// Creates a logger writing through `handler`.
    pub fn new(handler: HandlerBox) -> Self {
        Self::with_clock(handler, Box::new(SantiagoClock))
    }

    /// Creates a logger stamping events with `clock` instead of the wall clock.
    pub fn with_clock(handler: HandlerBox, clock: ClockBox) -> Self {
        Self { handler, clock }
    }

    /// Swaps the active handler, returning the previous one.
    ///
    /// Only calls made after the swap reach the new handler.
    pub fn set_handler(&mut self, handler: HandlerBox) -> HandlerBox {
        std::mem::replace(&mut self.handler, handler)
    }

    pub fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }

    fn timestamp(&self) -> Timestamp {
        Timestamp::from_instant(&self.clock.now())
    }

    /// Records a payment being sent to Webpay.
    pub fn payment(&self, payment: &Payment) -> Result<()> {
        let Timestamp { date, time } = self.timestamp();
        let event = PaymentEvent {
            date,
            time,
            pid: std::process::id(),
            commerce_id: payment.commerce.id.clone(),
            transaction_id: payment.transaction_id.clone(),
            request_ip: payment.request_ip.clone(),
            token: payment.token.clone(),
            webpay_server: payment.commerce.webpay_server().to_string(),
        };
        trace!(commerce_id = %event.commerce_id, transaction_id = %event.transaction_id, "payment event");
        self.handler.event_payment(&event)
    }

    /// Records an accepted transaction in both the event log and the journal.
    pub fn confirmation(&self, confirmation: &Confirmation) -> Result<()> {
        let event = self.outcome_event(confirmation)?;
        trace!(commerce_id = %event.commerce_id, order_id = %event.order_id, "confirmation event");
        self.handler.event_confirmation(&event)?;
        self.handler
            .log_confirmation(&confirmation.payload, &confirmation.commerce.id)
    }

    /// Records a rejected transaction in both the event log and the journal.
    pub fn error(&self, confirmation: &Confirmation) -> Result<()> {
        let event = self.outcome_event(confirmation)?;
        trace!(commerce_id = %event.commerce_id, order_id = %event.order_id, "error event");
        self.handler.event_error(&event)?;
        self.handler
            .log_error(&confirmation.payload, &confirmation.commerce.id)
    }

    fn outcome_event(&self, confirmation: &Confirmation) -> Result<ConfirmationEvent> {
        let Timestamp { date, time } = self.timestamp();
        Ok(ConfirmationEvent {
            date,
            time,
            pid: std::process::id(),
            commerce_id: confirmation.commerce.id.clone(),
            transaction_id: confirmation.payload.transaction_id()?.to_string(),
            request_ip: confirmation.request_ip.clone(),
            order_id: confirmation.order_id.clone(),
            webpay_server: confirmation.commerce.webpay_server().to_string(),
            notification_url: None,
        })
    }
}
