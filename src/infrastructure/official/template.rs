//! Fixed-width layout of the `TBK_EVN` event log.
//!
//! Every event line has the same ten padded columns followed by a free-form
//! message, all separated by `;`. A template is a static list of line specs;
//! rendering resolves each cell against a [`FieldSource`] and pads it
//! according to [`EVENT_COLUMNS`]. Values wider than their column are
//! written in full.

use crate::domain::event::{ConfirmationEvent, PaymentEvent};
use crate::error::{AuditError, Result};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub width: usize,
    pub align: Align,
}

const fn column(name: &'static str, width: usize, align: Align) -> ColumnSpec {
    ColumnSpec { name, width, align }
}

/// Padded columns of an event line, in output order.
pub const EVENT_COLUMNS: [ColumnSpec; 10] = [
    column("transaction", 10, Align::Left),
    column("pid", 12, Align::Right),
    column("reserved", 3, Align::Left),
    column("stage", 10, Align::Left),
    column("subject", 40, Align::Left),
    column("date", 14, Align::Left),
    column("time", 6, Align::Left),
    column("origin", 15, Align::Left),
    column("status", 3, Align::Left),
    column("commerce", 20, Align::Left),
];

/// Named values an event line can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Time,
    Pid,
    CommerceId,
    TransactionId,
    RequestIp,
    Token,
    OrderId,
    WebpayServer,
    NotificationUrl,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Time => "time",
            Field::Pid => "pid",
            Field::CommerceId => "commerce_id",
            Field::TransactionId => "transaction_id",
            Field::RequestIp => "request_ip",
            Field::Token => "token",
            Field::OrderId => "order_id",
            Field::WebpayServer => "webpay_server",
            Field::NotificationUrl => "notification_url",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Text(&'static str),
    Value(Field),
}

/// One line of an event block. Pid, date and time columns are implicit.
#[derive(Debug, Clone, Copy)]
pub struct EventLine {
    pub transaction: Cell,
    pub stage: &'static str,
    pub subject: Cell,
    pub origin: Cell,
    pub status: &'static str,
    pub commerce: Cell,
    pub message: &'static [Cell],
}

impl EventLine {
    /// Cells for [`EVENT_COLUMNS`], in the same order.
    pub fn columns(&self) -> [Cell; 10] {
        [
            self.transaction,
            Cell::Value(Field::Pid),
            Cell::Blank,
            Cell::Text(self.stage),
            self.subject,
            Cell::Value(Field::Date),
            Cell::Value(Field::Time),
            self.origin,
            Cell::Text(self.status),
            self.commerce,
        ]
    }
}

/// An event block made of consecutive sections of lines.
#[derive(Debug, Clone, Copy)]
pub struct EventTemplate {
    pub sections: &'static [&'static [EventLine]],
}

impl EventTemplate {
    pub fn lines(&self) -> impl Iterator<Item = &'static EventLine> {
        self.sections.iter().copied().flatten()
    }
}

/// Provides field values while rendering.
pub trait FieldSource {
    fn value(&self, field: Field) -> Option<Cow<'_, str>>;
}

impl FieldSource for PaymentEvent {
    fn value(&self, field: Field) -> Option<Cow<'_, str>> {
        let value = match field {
            Field::Date => Cow::Borrowed(self.date.as_str()),
            Field::Time => Cow::Borrowed(self.time.as_str()),
            Field::Pid => Cow::Owned(self.pid.to_string()),
            Field::CommerceId => Cow::Borrowed(self.commerce_id.as_str()),
            Field::TransactionId => Cow::Borrowed(self.transaction_id.as_str()),
            Field::RequestIp => Cow::Borrowed(self.request_ip.as_str()),
            Field::Token => Cow::Borrowed(self.token.as_str()),
            Field::WebpayServer => Cow::Borrowed(self.webpay_server.as_str()),
            Field::OrderId | Field::NotificationUrl => return None,
        };
        Some(value)
    }
}

/// A confirmation or error event with its notification URL resolved.
pub struct OutcomeContext<'a> {
    pub event: &'a ConfirmationEvent,
    pub notification_url: &'a str,
}

impl FieldSource for OutcomeContext<'_> {
    fn value(&self, field: Field) -> Option<Cow<'_, str>> {
        let event = self.event;
        let value = match field {
            Field::Date => Cow::Borrowed(event.date.as_str()),
            Field::Time => Cow::Borrowed(event.time.as_str()),
            Field::Pid => Cow::Owned(event.pid.to_string()),
            Field::CommerceId => Cow::Borrowed(event.commerce_id.as_str()),
            Field::TransactionId => Cow::Borrowed(event.transaction_id.as_str()),
            Field::RequestIp => Cow::Borrowed(event.request_ip.as_str()),
            Field::OrderId => Cow::Borrowed(event.order_id.as_str()),
            Field::WebpayServer => Cow::Borrowed(event.webpay_server.as_str()),
            Field::NotificationUrl => Cow::Borrowed(self.notification_url),
            Field::Token => return None,
        };
        Some(value)
    }
}

/// Renders every line of `template`, each terminated by `\n`.
pub fn render(template: &EventTemplate, source: &dyn FieldSource) -> Result<String> {
    let mut out = String::new();
    for line in template.lines() {
        render_line(&mut out, line, source)?;
    }
    Ok(out)
}

fn render_line(out: &mut String, line: &EventLine, source: &dyn FieldSource) -> Result<()> {
    for (cell, spec) in line.columns().iter().zip(EVENT_COLUMNS.iter()) {
        let text = resolve(*cell, source)?;
        pad(out, &text, spec);
        out.push(';');
    }
    for cell in line.message {
        out.push_str(&resolve(*cell, source)?);
    }
    out.push('\n');
    Ok(())
}

fn resolve(cell: Cell, source: &dyn FieldSource) -> Result<Cow<'_, str>> {
    match cell {
        Cell::Blank => Ok(Cow::Borrowed("")),
        Cell::Text(text) => Ok(Cow::Borrowed(text)),
        Cell::Value(field) => source
            .value(field)
            .ok_or_else(|| AuditError::MissingField(field.name().to_string())),
    }
}

fn pad(out: &mut String, text: &str, spec: &ColumnSpec) {
    let fill = spec.width.saturating_sub(text.chars().count());
    match spec.align {
        Align::Left => {
            out.push_str(text);
            out.extend(std::iter::repeat_n(' ', fill));
        }
        Align::Right => {
            out.extend(std::iter::repeat_n(' ', fill));
            out.push_str(text);
        }
    }
}

// Line catalogue.

const NONE: Cell = Cell::Blank;
const TX: Cell = Cell::Value(Field::TransactionId);
const IP: Cell = Cell::Value(Field::RequestIp);
const COM: Cell = Cell::Value(Field::CommerceId);
const SERVER: Cell = Cell::Value(Field::WebpayServer);
const ORDER: Cell = Cell::Value(Field::OrderId);
const OK: &str = "OK";

const fn line(
    transaction: Cell,
    stage: &'static str,
    subject: Cell,
    origin: Cell,
    status: &'static str,
    commerce: Cell,
    message: &'static [Cell],
) -> EventLine {
    EventLine {
        transaction,
        stage,
        subject,
        origin,
        status,
        commerce,
        message,
    }
}

const fn filter(subject: &'static str, message: &'static [Cell]) -> EventLine {
    line(NONE, "Filtro", Cell::Text(subject), IP, OK, NONE, message)
}

const fn pago(subject: Cell, message: &'static [Cell]) -> EventLine {
    line(TX, "pago", subject, IP, OK, COM, message)
}

const FILTER: &[EventLine] = &[
    filter("Inicio", &[Cell::Text("Inicio de filtrado")]),
    filter("tbk_param.txt", &[Cell::Text("Archivo parseado")]),
    filter("Terminado", &[Cell::Text("Datos Filtrados con exito")]),
];

const PAYMENT_PREPARE: &[EventLine] = &[
    pago(Cell::Text("inicio"), &[Cell::Text("Parseo realizado")]),
    pago(SERVER, &[Cell::Text("Datos en datos/tbk_config.dat")]),
    pago(SERVER, &[Cell::Text("Mac generado")]),
    pago(SERVER, &[Cell::Text("Construccion TBK_PARAM")]),
    pago(SERVER, &[Cell::Text("TBK_PARAM encriptado")]),
    pago(SERVER, &[Cell::Text("Datos listos para ser enviados")]),
    pago(SERVER, &[Cell::Text("Medio 2: Por redireccion")]),
    pago(SERVER, &[Cell::Text("Datos validados")]),
];

const PAYMENT_TOKEN: &[EventLine] = &[pago(
    SERVER,
    &[Cell::Text("Token="), Cell::Value(Field::Token)],
)];

const PAYMENT_REDIRECT: &[EventLine] = &[
    pago(SERVER, &[Cell::Text("Redireccion web")]),
    pago(SERVER, &[Cell::Text("Todo OK")]),
];

#[rustfmt::skip]
const RESULT_RECEIVED: &[EventLine] = &[
    line(NONE, "resultado", Cell::Text("Desencriptando"), IP, OK, NONE, &[Cell::Text("TBK_PARAM desencriptado")]),
    line(NONE, "resultado", Cell::Text("Validacion"), IP, OK, NONE, &[Cell::Text("Entidad emisora de los datos validada")]),
    line(NONE, "resultado", ORDER, IP, OK, NONE, &[Cell::Text("Parseo de los datos")]),
    line(NONE, "resultado", ORDER, IP, OK, NONE, &[Cell::Value(Field::NotificationUrl)]),
];

#[rustfmt::skip]
const COMMERCE_NOTIFIED: &[EventLine] = &[
    line(TX, "transacc", TX, IP, OK, COM, &[Cell::Text("conectandose al port :(80)")]),
    line(TX, "resultado", Cell::Text("logro abrir_conexion"), IP, " 0", COM, &[Cell::Text("Abrio socket para conex-com")]),
    line(TX, "transacc", TX, IP, OK, COM, &[Cell::Text("POST a url "), Cell::Value(Field::NotificationUrl)]),
    line(TX, "transacc", TX, IP, OK, COM, &[Cell::Text("mensaje enviado")]),
    line(NONE, "check_mac", NONE, Cell::Text("EMPTY"), OK, NONE, &[Cell::Text("Todo OK")]),
];

#[rustfmt::skip]
const COMMERCE_ACCEPTED: &[EventLine] = &[
    line(TX, "transacc", TX, IP, OK, COM, &[Cell::Text("Llego ACK del Comercio")]),
    line(TX, "resultado", ORDER, IP, OK, COM, &[Cell::Text("tienda acepto transaccion")]),
    line(TX, "resultado", ORDER, IP, OK, COM, &[Cell::Text("respuesta enviada a TBK (ACK)")]),
    line(TX, "resultado", ORDER, IP, OK, COM, &[Cell::Text("Todo OK")]),
];

// The vendor kit writes code 46 whatever the failure cause.
#[rustfmt::skip]
const COMMERCE_REJECTED: &[EventLine] = &[
    line(TX, "resultado", ORDER, IP, OK, NONE, &[Cell::Text("tienda NO acepto transaccion")]),
    line(TX, "resultado", ORDER, IP, OK, NONE, &[Cell::Text("respuesta enviada a TBK (ERR)")]),
    line(TX, "resultado", Cell::Text("datoscom"), IP, OK, COM, &[Cell::Text("Error al obtener ack (46)")]),
    line(TX, "resultado", ORDER, IP, "ERR", NONE, &[Cell::Text("46")]),
];

pub const PAYMENT: EventTemplate = EventTemplate {
    sections: &[FILTER, PAYMENT_PREPARE, PAYMENT_TOKEN, PAYMENT_REDIRECT],
};

pub const CONFIRMATION: EventTemplate = EventTemplate {
    sections: &[
        FILTER,
        PAYMENT_PREPARE,
        PAYMENT_REDIRECT,
        RESULT_RECEIVED,
        COMMERCE_NOTIFIED,
        COMMERCE_ACCEPTED,
    ],
};

pub const ERROR: EventTemplate = EventTemplate {
    sections: &[
        FILTER,
        PAYMENT_PREPARE,
        PAYMENT_REDIRECT,
        RESULT_RECEIVED,
        COMMERCE_NOTIFIED,
        COMMERCE_REJECTED,
    ],
};
