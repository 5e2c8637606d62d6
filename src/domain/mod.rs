//! Domain model: the objects a payment flow hands to the audit logger and
//! the port audit handlers implement.

pub mod clock;
pub mod commerce;
pub mod event;
pub mod payload;
pub mod ports;
pub mod transaction;
