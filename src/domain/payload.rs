use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const TBK_ORDEN_COMPRA: &str = "TBK_ORDEN_COMPRA";
pub const TBK_CODIGO_COMERCIO: &str = "TBK_CODIGO_COMERCIO";
pub const TBK_TIPO_TRANSACCION: &str = "TBK_TIPO_TRANSACCION";
pub const TBK_RESPUESTA: &str = "TBK_RESPUESTA";
pub const TBK_MONTO: &str = "TBK_MONTO";
pub const TBK_CODIGO_AUTORIZACION: &str = "TBK_CODIGO_AUTORIZACION";
pub const TBK_FINAL_NUMERO_TARJETA: &str = "TBK_FINAL_NUMERO_TARJETA";
pub const TBK_FECHA_CONTABLE: &str = "TBK_FECHA_CONTABLE";
pub const TBK_FECHA_TRANSACCION: &str = "TBK_FECHA_TRANSACCION";
pub const TBK_HORA_TRANSACCION: &str = "TBK_HORA_TRANSACCION";
pub const TBK_ID_SESION: &str = "TBK_ID_SESION";
pub const TBK_ID_TRANSACCION: &str = "TBK_ID_TRANSACCION";
pub const TBK_TIPO_PAGO: &str = "TBK_TIPO_PAGO";
pub const TBK_NUMERO_CUOTAS: &str = "TBK_NUMERO_CUOTAS";
pub const TBK_VCI: &str = "TBK_VCI";
pub const TBK_MAC: &str = "TBK_MAC";

/// Field bag sent by Webpay when a transaction finishes.
///
/// Keys follow the vendor's `TBK_*` names. The bag is never validated on
/// construction; consumers ask for the fields they need and get
/// [`AuditError::MissingField`] when one is absent.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(transparent)]
pub struct Payload {
    data: BTreeMap<String, String>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Like [`Payload::get`] but treats absence as a schema error.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| AuditError::MissingField(key.to_string()))
    }

    /// Webpay's transaction id (`TBK_ID_TRANSACCION`).
    pub fn transaction_id(&self) -> Result<&str> {
        self.require(TBK_ID_TRANSACCION)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Payload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_from_json_object() {
        let json = r#"{"TBK_ORDEN_COMPRA": "ORD1", "TBK_ID_TRANSACCION": "123456"}"#;
        let payload: Payload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get(TBK_ORDEN_COMPRA), Some("ORD1"));
        assert_eq!(payload.transaction_id().unwrap(), "123456");
    }

    #[test]
    fn test_require_missing_field() {
        let payload: Payload = [(TBK_ORDEN_COMPRA, "ORD1")].into_iter().collect();

        match payload.require(TBK_MAC) {
            Err(AuditError::MissingField(key)) => assert_eq!(key, "TBK_MAC"),
            other => panic!("expected MissingField, got {:?}", other),
        }
        assert!(payload.transaction_id().is_err());
    }
}
