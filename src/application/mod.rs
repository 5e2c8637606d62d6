//! Application layer: the `Logger` facade that payment flows call into.
//!
//! The logger turns caller-owned domain objects into timestamped event
//! records and forwards them to whichever handler is active.

pub mod logger;
