use crate::domain::event::{ConfirmationEvent, PaymentEvent};
use crate::domain::payload::Payload;
use crate::domain::ports::Handler;
use crate::error::Result;
use std::sync::{Arc, PoisonError, RwLock};

/// One call received by an [`InMemoryHandler`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum HandlerCall {
    EventPayment(PaymentEvent),
    EventConfirmation(ConfirmationEvent),
    EventError(ConfirmationEvent),
    LogConfirmation { payload: Payload, commerce_id: String },
    LogError { payload: Payload, commerce_id: String },
}

/// A handler that keeps every call in memory, in arrival order.
///
/// Clones share the same underlying list, so a caller can hand one clone to
/// a `Logger` and inspect the recorded calls through another.
#[derive(Debug, Default, Clone)]
pub struct InMemoryHandler {
    calls: Arc<RwLock<Vec<HandlerCall>>>,
}

impl InMemoryHandler {
    /// Creates a new, empty in-memory handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the calls recorded so far.
    pub fn calls(&self) -> Vec<HandlerCall> {
        self.calls
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: HandlerCall) -> Result<()> {
        self.calls
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
        Ok(())
    }
}

impl Handler for InMemoryHandler {
    fn event_payment(&self, event: &PaymentEvent) -> Result<()> {
        self.record(HandlerCall::EventPayment(event.clone()))
    }

    fn event_confirmation(&self, event: &ConfirmationEvent) -> Result<()> {
        self.record(HandlerCall::EventConfirmation(event.clone()))
    }

    fn event_error(&self, event: &ConfirmationEvent) -> Result<()> {
        self.record(HandlerCall::EventError(event.clone()))
    }

    fn log_confirmation(&self, payload: &Payload, commerce_id: &str) -> Result<()> {
        self.record(HandlerCall::LogConfirmation {
            payload: payload.clone(),
            commerce_id: commerce_id.to_string(),
        })
    }

    fn log_error(&self, payload: &Payload, commerce_id: &str) -> Result<()> {
        self.record(HandlerCall::LogError {
            payload: payload.clone(),
            commerce_id: commerce_id.to_string(),
        })
    }
}
