//! The ordering screen as a whole: one line-item source and one order
//! coordinator, wired through an event bus.

use std::sync::Arc;

use tokio::task::JoinHandle;

use speedorz_core::{ClientId, UserId};
use speedorz_events::{EventBus, InMemoryEventBus};
use speedorz_ordering::{LineInputs, OrderLine, OrderingEvent};

use crate::api::OrderingApi;
use crate::coordinator::{Notice, OrderCoordinator};
use crate::line_items::{LineItemSource, RefreshHandle};

/// One visit to the ordering screen.
///
/// Entering creates an empty draft, starts the reference refresh listener and
/// issues the initial load. Leaving (or dropping) discards the draft and stops
/// the listener.
pub struct OrderWorkflow<A: OrderingApi> {
    source: LineItemSource<A>,
    coordinator: OrderCoordinator<A>,
    bus: Arc<InMemoryEventBus<OrderingEvent>>,
    listener: JoinHandle<()>,
    initial_load: Option<RefreshHandle>,
}

impl<A: OrderingApi> OrderWorkflow<A> {
    /// Must be called from within a tokio runtime.
    pub fn enter(api: Arc<A>) -> Self {
        let bus = Arc::new(InMemoryEventBus::new());
        let source = LineItemSource::new(api.clone());
        let coordinator = OrderCoordinator::new(api, bus.clone());

        let listener = source.listen(bus.subscribe());
        let initial_load = Some(source.refresh());

        tracing::info!("ordering workflow entered");

        Self {
            source,
            coordinator,
            bus,
            listener,
            initial_load,
        }
    }

    /// Wait for the initial reference load to settle. Returns at once if it
    /// already has been awaited.
    pub async fn wait_for_reference_data(&mut self) {
        if let Some(load) = self.initial_load.take() {
            load.settled().await;
            tracing::info!(
                vehicles = self.source.vehicles().len(),
                discounts = self.source.discounts().len(),
                taxes = self.source.taxes().len(),
                "reference data loaded"
            );
        }
    }

    pub fn source(&self) -> &LineItemSource<A> {
        &self.source
    }

    pub fn coordinator(&self) -> &OrderCoordinator<A> {
        &self.coordinator
    }

    pub fn bus(&self) -> &Arc<InMemoryEventBus<OrderingEvent>> {
        &self.bus
    }

    pub fn set_client(&mut self, client_id: ClientId) {
        self.coordinator.set_client(client_id);
    }

    pub fn set_user(&mut self, user_id: UserId) {
        self.coordinator.set_user(user_id);
    }

    /// Capture the operator's rows and hand the lines to the coordinator.
    pub fn update_lines(&mut self, inputs: &LineInputs) -> &[OrderLine] {
        let lines = self.source.capture(inputs);
        self.coordinator.accept_lines(lines);
        self.coordinator.draft().lines()
    }

    /// Submit the current draft.
    pub async fn save(&mut self) -> Notice {
        self.coordinator.submit().await
    }

    /// Leave the screen, discarding the draft.
    pub fn leave(self) {
        tracing::info!(status = ?self.coordinator.status(), "ordering workflow left");
    }
}

impl<A: OrderingApi> Drop for OrderWorkflow<A> {
    fn drop(&mut self) {
        self.listener.abort();
    }
}
