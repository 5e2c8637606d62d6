use serde::{Deserialize, Serialize};

/// Webpay server reported for commerces running against the sandbox.
pub const CERTIFICATION_SERVER: &str = "https://certificacion.webpay.cl";
/// Webpay server reported for live commerces.
pub const PRODUCTION_SERVER: &str = "https://webpay.transbank.cl";

/// The merchant account under which a transaction happens.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Commerce {
    /// Commerce code assigned by Transbank.
    pub id: String,
    /// `true` when the commerce is in certification (sandbox) mode.
    pub testing: bool,
}

impl Commerce {
    pub fn new(id: impl Into<String>, testing: bool) -> Self {
        Self {
            id: id.into(),
            testing,
        }
    }

    /// The Webpay endpoint this commerce talks to.
    pub fn webpay_server(&self) -> &'static str {
        if self.testing {
            CERTIFICATION_SERVER
        } else {
            PRODUCTION_SERVER
        }
    }
}
