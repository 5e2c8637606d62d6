mod common;

use tbk_audit::domain::event::{ConfirmationEvent, PaymentEvent};
use tbk_audit::{Handler, Logger, NullHandler, Payload};

#[test]
fn test_null_handler_accepts_arbitrary_data() {
    let handler = NullHandler;

    let payment = PaymentEvent {
        date: "x".into(),
        time: "y".into(),
        pid: 1,
        commerce_id: "COM1".into(),
        transaction_id: "TX1".into(),
        request_ip: "::1".into(),
        token: "tok".into(),
        webpay_server: "https://webpay.transbank.cl".into(),
    };
    let outcome = ConfirmationEvent {
        date: "x".into(),
        time: "y".into(),
        pid: 1,
        commerce_id: "COM1".into(),
        transaction_id: "TX1".into(),
        request_ip: "::1".into(),
        order_id: "ORD1".into(),
        webpay_server: "https://webpay.transbank.cl".into(),
        notification_url: Some("http://a/b".into()),
    };

    handler.event_payment(&payment).unwrap();
    handler.event_confirmation(&outcome).unwrap();
    handler.event_error(&outcome).unwrap();
    handler.log_confirmation(&Payload::new(), "COM1").unwrap();
    handler.log_error(&common::full_payload(), "COM1").unwrap();
}

#[test]
fn test_unconfigured_logger_is_safe() {
    let logger = Logger::default();

    logger.confirmation(&common::confirmation(true)).unwrap();
    logger.error(&common::confirmation(false)).unwrap();
}
