//! Line-item source: reference data for the ordering table and capture of the
//! operator's rows into order lines.

use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinHandle;

use speedorz_catalog::{Discount, Tax, Vehicle};
use speedorz_core::{DiscountId, TaxId, VehicleId, find_by_id};
use speedorz_events::{Event, Subscription};
use speedorz_ordering::{LineInputs, NumberInput, OrderLine, OrderingEvent, capture_lines};

use crate::api::{ApiError, OrderingApi};
use crate::reference::ReferenceList;

/// Holds the three reference lists shown on the ordering table (discounts,
/// taxes, promotional vehicles) and turns row input into order lines.
pub struct LineItemSource<A> {
    api: Arc<A>,
    discounts: ReferenceList<Discount>,
    taxes: ReferenceList<Tax>,
    vehicles: ReferenceList<Vehicle>,
}

/// The fetches started by one refresh.
///
/// Dropping the handle leaves them running; each list is replaced whenever its
/// own fetch completes.
#[derive(Debug)]
pub struct RefreshHandle {
    tasks: Vec<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Wait until every fetch of this refresh has finished (or failed).
    pub async fn settled(self) {
        for task in self.tasks {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "reference list loader task aborted");
            }
        }
    }
}

impl<A> Clone for LineItemSource<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            discounts: self.discounts.clone(),
            taxes: self.taxes.clone(),
            vehicles: self.vehicles.clone(),
        }
    }
}

impl<A: OrderingApi> LineItemSource<A> {
    /// Create a source with empty lists. Nothing is fetched until
    /// [`refresh`](Self::refresh).
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            discounts: ReferenceList::new(),
            taxes: ReferenceList::new(),
            vehicles: ReferenceList::new(),
        }
    }

    pub fn discounts(&self) -> Arc<Vec<Discount>> {
        self.discounts.snapshot()
    }

    pub fn taxes(&self) -> Arc<Vec<Tax>> {
        self.taxes.snapshot()
    }

    pub fn vehicles(&self) -> Arc<Vec<Vehicle>> {
        self.vehicles.snapshot()
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<Vehicle> {
        find_by_id(&self.vehicles.snapshot(), &id).cloned()
    }

    pub fn discount(&self, id: DiscountId) -> Option<Discount> {
        find_by_id(&self.discounts.snapshot(), &id).cloned()
    }

    pub fn tax(&self, id: TaxId) -> Option<Tax> {
        find_by_id(&self.taxes.snapshot(), &id).cloned()
    }

    /// Re-fetch all three lists.
    ///
    /// The fetches run as independent tasks with no barrier between them, so the
    /// lists may be observed partially refreshed. A failed fetch is logged and
    /// leaves its list as it was. Overlapping refreshes are not cancelled; the
    /// last response to arrive wins, per list.
    ///
    /// Must be called from within a tokio runtime.
    pub fn refresh(&self) -> RefreshHandle {
        tracing::debug!("refreshing reference lists");

        let api = self.api.clone();
        let discounts = spawn_load("discounts", self.discounts.clone(), async move {
            api.list_discounts().await
        });

        let api = self.api.clone();
        let taxes = spawn_load("taxes", self.taxes.clone(), async move { api.list_taxes().await });

        let api = self.api.clone();
        let vehicles = spawn_load("vehicles", self.vehicles.clone(), async move {
            api.list_promotional_vehicles().await
        });

        RefreshHandle {
            tasks: vec![discounts, taxes, vehicles],
        }
    }

    /// Capture one order line per loaded vehicle, in catalog order.
    ///
    /// Rows are matched to vehicles by id. Reads a single vehicle snapshot, so a
    /// refresh landing mid-capture cannot mix two catalogs.
    pub fn capture(&self, inputs: &LineInputs) -> Vec<OrderLine> {
        let vehicles = self.vehicles.snapshot();

        for vehicle_id in inputs.vehicle_ids() {
            if find_by_id(&vehicles, &vehicle_id).is_none() {
                tracing::warn!(%vehicle_id, "ignoring row for a vehicle that is not in the catalog");
            }
        }

        let lines = capture_lines(vehicles.iter().map(|v| v.id), inputs);

        // Nothing is rejected here; the backend has the final say.
        for (vehicle, line) in vehicles.iter().zip(&lines) {
            if !line.is_well_formed() {
                tracing::warn!(vehicle_id = %vehicle.id, "row holds values that are not whole numbers");
            }
            if !vehicle.in_stock() && matches!(line.quantity, NumberInput::Integer(q) if q > 0) {
                tracing::warn!(vehicle_id = %vehicle.id, stock = vehicle.stock, "ordering a vehicle that is out of stock");
            }
        }

        lines
    }

    /// React to a workflow event.
    pub fn handle_event(&self, event: &OrderingEvent) -> RefreshHandle {
        match event {
            OrderingEvent::OrderPlaced(placed) => {
                tracing::info!(
                    event_type = event.event_type(),
                    order_id = %placed.order_id,
                    "order placed; reloading reference lists"
                );
                self.refresh()
            }
        }
    }

    /// Refresh once per event received on `subscription`, until the bus goes away.
    pub fn listen(&self, mut subscription: Subscription<OrderingEvent>) -> JoinHandle<()> {
        let source = self.clone();
        tokio::spawn(async move {
            while let Some(event) = subscription.recv().await {
                // Fire and forget: the lists update as each fetch lands.
                drop(source.handle_event(&event));
            }
            tracing::debug!("event bus closed; reference refresh listener stopped");
        })
    }
}

fn spawn_load<T, F>(kind: &'static str, list: ReferenceList<T>, fetch: F) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, ApiError>> + Send + 'static,
{
    tokio::spawn(async move {
        match fetch.await {
            Ok(items) => {
                tracing::debug!(kind, count = items.len(), "reference list loaded");
                list.replace(items);
            }
            Err(e) => {
                tracing::warn!(kind, error = %e, "failed to load reference list; keeping previous values");
            }
        }
    })
}
