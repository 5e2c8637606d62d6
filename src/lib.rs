pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::logger::Logger;
pub use config::HandlerConfig;
pub use domain::commerce::Commerce;
pub use domain::payload::Payload;
pub use domain::ports::{Handler, HandlerBox};
pub use domain::transaction::{Confirmation, Payment};
pub use error::{AuditError, Result};
pub use infrastructure::null::NullHandler;
pub use infrastructure::official::OfficialHandler;
