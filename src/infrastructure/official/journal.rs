//! Layout of the `tbk_bitacora` journal: one `KEY=value; ...` line per
//! finished transaction, prefixed by its outcome marker.

use crate::domain::payload::{self, Payload};
use crate::error::Result;

/// Where a journal value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalValue {
    /// A field of the Webpay payload, looked up by name.
    Payload(&'static str),
    /// The commerce the journal is being written for.
    CommerceId,
}

#[derive(Debug, Clone, Copy)]
pub struct JournalLayout {
    pub marker: &'static str,
    pub fields: &'static [(&'static str, JournalValue)],
}

const fn field(key: &'static str) -> (&'static str, JournalValue) {
    (key, JournalValue::Payload(key))
}

pub const ACK: JournalLayout = JournalLayout {
    marker: "ACK",
    fields: &[
        field(payload::TBK_ORDEN_COMPRA),
        (payload::TBK_CODIGO_COMERCIO, JournalValue::CommerceId),
        field(payload::TBK_TIPO_TRANSACCION),
        field(payload::TBK_RESPUESTA),
        field(payload::TBK_MONTO),
        field(payload::TBK_CODIGO_AUTORIZACION),
        field(payload::TBK_FINAL_NUMERO_TARJETA),
        field(payload::TBK_FECHA_CONTABLE),
        field(payload::TBK_FECHA_TRANSACCION),
        field(payload::TBK_HORA_TRANSACCION),
        field(payload::TBK_ID_SESION),
        field(payload::TBK_ID_TRANSACCION),
        field(payload::TBK_TIPO_PAGO),
        field(payload::TBK_NUMERO_CUOTAS),
        field(payload::TBK_VCI),
        field(payload::TBK_MAC),
    ],
};

/// Same as [`ACK`] without the commerce code.
pub const ERR: JournalLayout = JournalLayout {
    marker: "ERR",
    fields: &[
        field(payload::TBK_ORDEN_COMPRA),
        field(payload::TBK_TIPO_TRANSACCION),
        field(payload::TBK_RESPUESTA),
        field(payload::TBK_MONTO),
        field(payload::TBK_CODIGO_AUTORIZACION),
        field(payload::TBK_FINAL_NUMERO_TARJETA),
        field(payload::TBK_FECHA_CONTABLE),
        field(payload::TBK_FECHA_TRANSACCION),
        field(payload::TBK_HORA_TRANSACCION),
        field(payload::TBK_ID_SESION),
        field(payload::TBK_ID_TRANSACCION),
        field(payload::TBK_TIPO_PAGO),
        field(payload::TBK_NUMERO_CUOTAS),
        field(payload::TBK_VCI),
        field(payload::TBK_MAC),
    ],
};

/// Renders one journal line, `\n` terminated.
///
/// Fails on the first payload field that is missing; nothing is produced in
/// that case.
pub fn render(layout: &JournalLayout, payload: &Payload, commerce_id: &str) -> Result<String> {
    let mut parts = Vec::with_capacity(layout.fields.len() + 1);
    parts.push(layout.marker.to_string());
    for (key, source) in layout.fields {
        let value = match source {
            JournalValue::Payload(name) => payload.require(name)?,
            JournalValue::CommerceId => commerce_id,
        };
        parts.push(format!("{}={}", key, value));
    }
    let mut line = parts.join("; ");
    line.push('\n');
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuditError;

    fn full_payload() -> Payload {
        [
            ("TBK_ORDEN_COMPRA", "ORD1"),
            ("TBK_TIPO_TRANSACCION", "TR_NORMAL"),
            ("TBK_RESPUESTA", "0"),
            ("TBK_MONTO", "1000000"),
            ("TBK_CODIGO_AUTORIZACION", "123456"),
            ("TBK_FINAL_NUMERO_TARJETA", "6623"),
            ("TBK_FECHA_CONTABLE", "0101"),
            ("TBK_FECHA_TRANSACCION", "0101"),
            ("TBK_HORA_TRANSACCION", "120000"),
            ("TBK_ID_SESION", "SES1"),
            ("TBK_ID_TRANSACCION", "9999"),
            ("TBK_TIPO_PAGO", "VN"),
            ("TBK_NUMERO_CUOTAS", "0"),
            ("TBK_VCI", "TSY"),
            ("TBK_MAC", "abcdef"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_ack_line() {
        let line = render(&ACK, &full_payload(), "COM1").unwrap();
        assert_eq!(
            line,
            "ACK; TBK_ORDEN_COMPRA=ORD1; TBK_CODIGO_COMERCIO=COM1; TBK_TIPO_TRANSACCION=TR_NORMAL; \
             TBK_RESPUESTA=0; TBK_MONTO=1000000; TBK_CODIGO_AUTORIZACION=123456; \
             TBK_FINAL_NUMERO_TARJETA=6623; TBK_FECHA_CONTABLE=0101; TBK_FECHA_TRANSACCION=0101; \
             TBK_HORA_TRANSACCION=120000; TBK_ID_SESION=SES1; TBK_ID_TRANSACCION=9999; \
             TBK_TIPO_PAGO=VN; TBK_NUMERO_CUOTAS=0; TBK_VCI=TSY; TBK_MAC=abcdef\n"
        );
    }

    #[test]
    fn test_err_line_has_no_commerce_code() {
        let line = render(&ERR, &full_payload(), "COM1").unwrap();
        assert!(line.starts_with("ERR; TBK_ORDEN_COMPRA=ORD1; TBK_TIPO_TRANSACCION=TR_NORMAL; "));
        assert!(!line.contains("TBK_CODIGO_COMERCIO"));
        assert!(line.ends_with("TBK_MAC=abcdef\n"));
    }

    #[test]
    fn test_payload_commerce_code_is_ignored() {
        let mut payload = full_payload();
        payload.insert("TBK_CODIGO_COMERCIO", "OTHER");

        let line = render(&ACK, &payload, "COM1").unwrap();
        assert!(line.contains("TBK_CODIGO_COMERCIO=COM1;"));
    }

    #[test]
    fn test_missing_mac() {
        let payload: Payload = full_payload()
            .iter()
            .filter(|(k, _)| *k != "TBK_MAC")
            .collect();

        match render(&ERR, &payload, "COM1") {
            Err(AuditError::MissingField(key)) => assert_eq!(key, "TBK_MAC"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }
}
