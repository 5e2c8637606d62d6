#![allow(dead_code)]

use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;
use tbk_audit::domain::clock::FixedClock;
use tbk_audit::{Commerce, Confirmation, Payload};

pub const JOURNAL_FIELDS: [(&str, &str); 15] = [
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
    ("TBK_ID_TRANSACCION", "TX1"),
    ("TBK_TIPO_PAGO", "VN"),
    ("TBK_NUMERO_CUOTAS", "0"),
    ("TBK_VCI", "TSY"),
    ("TBK_MAC", "abcdef"),
];

pub fn full_payload() -> Payload {
    JOURNAL_FIELDS.into_iter().collect()
}

pub fn confirmation(testing: bool) -> Confirmation {
    Confirmation {
        commerce: Commerce::new("COM1", testing),
        request_ip: "1.2.3.4".into(),
        order_id: "ORD1".into(),
        payload: full_payload(),
    }
}

/// 2024-01-01 12:00:00 in Santiago.
pub fn new_year_noon() -> FixedClock {
    FixedClock::santiago(2024, 1, 1, 12, 0, 0).unwrap()
}

pub fn write_records_csv(path: &Path, rows: &[&str]) -> Result<(), Error> {
    let mut file = File::create(path)?;
    writeln!(
        file,
        "kind,commerce_id,testing,request_ip,transaction_id,token,order_id,{}",
        JOURNAL_FIELDS.map(|(k, _)| k).join(",")
    )?;
    for row in rows {
        writeln!(file, "{}", row)?;
    }
    Ok(())
}

pub fn journal_values() -> String {
    JOURNAL_FIELDS.map(|(_, v)| v).join(",")
}
