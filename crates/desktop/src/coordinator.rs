//! Order coordinator: owns the order draft, submits it, and announces success.

use std::sync::Arc;

use chrono::Utc;

use speedorz_core::{ClientId, UserId};
use speedorz_events::{EventBus, InMemoryEventBus};
use speedorz_ordering::{
    OrderDraft, OrderLine, OrderPlaced, OrderReceipt, OrderingEvent, SubmissionStatus,
};

use crate::api::OrderingApi;

/// What the operator is told after pressing save.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The order was created; show its summary.
    OrderSaved(OrderReceipt),
    /// Generic failure; the draft is kept so the operator can retry.
    SaveFailed,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::OrderSaved(_) => "Order saved. Go to the cashier to complete payment.",
            Notice::SaveFailed => "Error saving the order. Please try again.",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::OrderSaved(_))
    }

    pub fn receipt(&self) -> Option<&OrderReceipt> {
        match self {
            Notice::OrderSaved(receipt) => Some(receipt),
            Notice::SaveFailed => None,
        }
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Notice::OrderSaved(receipt) => write!(f, "{}\n{}", self.title(), receipt),
            Notice::SaveFailed => f.write_str(self.title()),
        }
    }
}

/// Owns the order draft for one visit to the ordering screen.
///
/// State machine: `Idle` → `Ready` (lines received) → `Submitting` →
/// `Succeeded` | `Failed`. Receiving lines from any settled state goes back to
/// `Ready`; submitting is allowed from any settled state, including a retry
/// after `Failed`.
pub struct OrderCoordinator<A> {
    api: Arc<A>,
    bus: Arc<InMemoryEventBus<OrderingEvent>>,
    draft: OrderDraft,
    status: SubmissionStatus,
}

impl<A: OrderingApi> OrderCoordinator<A> {
    pub fn new(api: Arc<A>, bus: Arc<InMemoryEventBus<OrderingEvent>>) -> Self {
        Self {
            api,
            bus,
            draft: OrderDraft::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn set_client(&mut self, client_id: ClientId) {
        self.draft.set_client(client_id);
    }

    pub fn set_user(&mut self, user_id: UserId) {
        self.draft.set_user(user_id);
    }

    /// Take a freshly captured line list, replacing the previous one.
    ///
    /// No validation: an empty list is accepted and will be sent as is.
    pub fn accept_lines(&mut self, lines: Vec<OrderLine>) {
        tracing::debug!(lines = lines.len(), "order lines replaced");
        self.draft.replace_lines(lines);
        self.status = SubmissionStatus::Ready;
    }

    /// Stamp the draft with the current instant and send it.
    ///
    /// On success the receipt is returned and exactly one
    /// [`OrderingEvent::OrderPlaced`] is published. On failure the draft is left
    /// untouched apart from its date; there is no automatic retry.
    pub async fn submit(&mut self) -> Notice {
        self.status = SubmissionStatus::Submitting;
        let request = self.draft.stamp(Utc::now());

        tracing::info!(
            client_id = %request.client_id,
            user_id = %request.user_id,
            lines = request.lines.len(),
            date = %request.date,
            "submitting purchase order"
        );

        match self.api.create_order(&request).await {
            Ok(order) => {
                self.status = SubmissionStatus::Succeeded;
                let receipt = OrderReceipt::from(&order);
                tracing::info!(
                    order_id = %order.id,
                    subtotal = order.subtotal,
                    total = order.total,
                    "purchase order created"
                );

                let event = OrderingEvent::OrderPlaced(OrderPlaced {
                    order_id: order.id,
                    client_id: receipt.client_id,
                    occurred_at: Utc::now(),
                });
                if let Err(e) = self.bus.publish(event) {
                    tracing::warn!(error = ?e, "failed to announce placed order");
                }

                Notice::OrderSaved(receipt)
            }
            Err(e) => {
                self.status = SubmissionStatus::Failed;
                tracing::error!(error = %e, "failed to save purchase order");
                Notice::SaveFailed
            }
        }
    }
}
