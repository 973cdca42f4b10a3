//! Events emitted by the ordering workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use speedorz_core::{ClientId, OrderId};
use speedorz_events::Event;

/// Event: OrderPlaced.
///
/// The backend accepted an order, so stock counts and possibly the adjustment
/// catalogs changed. Reference-data holders refresh on it, once per event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPlaced {
    pub order_id: OrderId,
    pub client_id: Option<ClientId>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderingEvent {
    OrderPlaced(OrderPlaced),
}

impl Event for OrderingEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderingEvent::OrderPlaced(_) => "ordering.order.placed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderingEvent::OrderPlaced(e) => e.occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_placed_has_stable_type_name() {
        let at = Utc::now();
        let event = OrderingEvent::OrderPlaced(OrderPlaced {
            order_id: OrderId::new(1),
            client_id: None,
            occurred_at: at,
        });
        assert_eq!(event.event_type(), "ordering.order.placed");
        assert_eq!(event.occurred_at(), at);
    }
}
