use super::commerce::Commerce;
use super::payload::Payload;
use serde::Deserialize;

/// A payment attempt handed off to Webpay.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub commerce: Commerce,
    pub transaction_id: String,
    pub request_ip: String,
    pub token: String,
}

/// Webpay's notification about the outcome of a transaction.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Confirmation {
    pub commerce: Commerce,
    pub request_ip: String,
    pub order_id: String,
    pub payload: Payload,
}
