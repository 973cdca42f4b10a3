//! The purchase order being assembled and the payloads exchanged with the
//! order endpoint.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use speedorz_catalog::{Client, User};
use speedorz_core::{ClientId, OrderId, UserId};

use crate::line::OrderLine;

/// Where the ordering screen is in its save cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// No line list received since the screen was entered.
    Idle,
    /// Holds the line list from the latest publish.
    Ready,
    /// The order request is in flight.
    Submitting,
    /// The backend created the order.
    Succeeded,
    /// The backend rejected the order or could not be reached.
    Failed,
}

/// Order draft: the purchase order assembled client-side before submission.
///
/// Created empty when the ordering screen is entered. Lines are only ever
/// replaced wholesale; the date is only set by [`OrderDraft::stamp`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    date: Option<DateTime<Utc>>,
    user_id: UserId,
    client_id: ClientId,
    lines: Vec<OrderLine>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn set_user(&mut self, user_id: UserId) {
        self.user_id = user_id;
    }

    pub fn set_client(&mut self, client_id: ClientId) {
        self.client_id = client_id;
    }

    /// Replace every line with `lines`. Nothing is merged.
    pub fn replace_lines(&mut self, lines: Vec<OrderLine>) {
        self.lines = lines;
    }

    /// Stamp the submission date and build the request body.
    ///
    /// The date is truncated to milliseconds so the stored value and the value
    /// on the wire are identical.
    pub fn stamp(&mut self, at: DateTime<Utc>) -> OrderRequest {
        let date = at.trunc_subsecs(3);
        self.date = Some(date);

        OrderRequest {
            date,
            user_id: self.user_id,
            client_id: self.client_id,
            lines: self.lines.clone(),
        }
    }
}

/// Body of `POST /ordenescompra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(rename = "fecha", with = "iso_millis")]
    pub date: DateTime<Utc>,
    #[serde(rename = "idUsuario")]
    pub user_id: UserId,
    #[serde(rename = "idCliente")]
    pub client_id: ClientId,
    #[serde(rename = "ordenVehiculos")]
    pub lines: Vec<OrderLine>,
}

/// The order as created by the backend, with server-computed totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedOrder {
    #[serde(rename = "idOrdenCompra")]
    pub id: OrderId,
    #[serde(rename = "fecha", default)]
    pub date: String,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(rename = "usuario", default)]
    pub user: Option<User>,
    #[serde(rename = "cliente", default)]
    pub client: Option<Client>,
}

/// Confirmation summary shown to the operator after a successful save.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub client_id: Option<ClientId>,
    pub client_name: String,
    pub client_identification: String,
    pub subtotal: f64,
    pub total: f64,
    pub date: String,
}

impl From<&CreatedOrder> for OrderReceipt {
    fn from(order: &CreatedOrder) -> Self {
        let client = order.client.as_ref();
        Self {
            order_id: order.id,
            client_id: client.map(|c| c.id),
            client_name: client.map(|c| c.legal_name.clone()).unwrap_or_default(),
            client_identification: client
                .map(|c| c.identification_number.clone())
                .unwrap_or_default(),
            subtotal: order.subtotal,
            total: order.total,
            date: order.date.clone(),
        }
    }
}

impl core::fmt::Display for OrderReceipt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Order ID: {}", self.order_id)?;
        match self.client_id {
            Some(id) => writeln!(f, "Client ID: {id}")?,
            None => writeln!(f, "Client ID: -")?,
        }
        writeln!(f, "Client name: {}", self.client_name)?;
        writeln!(f, "Identification: {}", self.client_identification)?;
        writeln!(f, "Subtotal: $ {}", self.subtotal)?;
        writeln!(f, "Total: $ {}", self.total)?;
        write!(f, "Created at: {}", self.date)
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix, the shape browsers
/// produce and the backend expects.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let text = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|date| date.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
