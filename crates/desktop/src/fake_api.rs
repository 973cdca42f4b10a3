//! In-memory stand-in for the dealership API used by unit tests.

use std::sync::{Mutex, MutexGuard};

use speedorz_catalog::{Client, Discount, Tax, Vehicle};
use speedorz_core::{DiscountId, OrderId, TaxId, VehicleId};
use speedorz_ordering::{CreatedOrder, OrderRequest};

use crate::api::{ApiError, OrderingApi};

#[derive(Default)]
struct FakeState {
    discounts: Vec<Discount>,
    taxes: Vec<Tax>,
    vehicles: Vec<Vehicle>,
    fail_lists: bool,
    fail_orders: bool,
    vehicle_calls: usize,
    requests: Vec<OrderRequest>,
}

#[derive(Default)]
pub(crate) struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    /// Vehicles with the given ids, discount 5, taxes 1 and 2.
    pub(crate) fn with_catalog(vehicle_ids: &[i64]) -> Self {
        let api = Self::default();
        {
            let mut state = api.state();
            state.discounts = vec![Discount::new(DiscountId::new(5), "Promo", 10.0)];
            state.taxes = vec![
                Tax::new(TaxId::new(1), "VAT", 19.0),
                Tax::new(TaxId::new(2), "Stamp", 1.0),
            ];
        }
        api.set_vehicles(vehicle_ids);
        api
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub(crate) fn set_vehicles(&self, ids: &[i64]) {
        self.state().vehicles = ids
            .iter()
            .map(|&id| Vehicle::new(VehicleId::new(id), format!("Vehicle {id}"), 1000.0, 5))
            .collect();
    }

    pub(crate) fn set_stock(&self, vehicle_id: VehicleId, stock: i64) {
        for vehicle in self.state().vehicles.iter_mut().filter(|v| v.id == vehicle_id) {
            vehicle.stock = stock;
        }
    }

    pub(crate) fn set_fail_lists(&self, fail: bool) {
        self.state().fail_lists = fail;
    }

    pub(crate) fn set_fail_orders(&self, fail: bool) {
        self.state().fail_orders = fail;
    }

    pub(crate) fn vehicle_calls(&self) -> usize {
        self.state().vehicle_calls
    }

    pub(crate) fn requests(&self) -> Vec<OrderRequest> {
        self.state().requests.clone()
    }

    fn list<T: Clone>(&self, pick: impl FnOnce(&mut FakeState) -> &Vec<T>) -> Result<Vec<T>, ApiError> {
        let mut state = self.state();
        if state.fail_lists {
            return Err(ApiError::Api(500, "boom".to_string()));
        }
        Ok(pick(&mut *state).clone())
    }
}

impl OrderingApi for FakeApi {
    async fn list_discounts(&self) -> Result<Vec<Discount>, ApiError> {
        self.list(|s| &s.discounts)
    }

    async fn list_taxes(&self) -> Result<Vec<Tax>, ApiError> {
        self.list(|s| &s.taxes)
    }

    async fn list_promotional_vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        self.list(|s| {
            s.vehicle_calls += 1;
            &s.vehicles
        })
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<CreatedOrder, ApiError> {
        let mut state = self.state();
        state.requests.push(request.clone());
        if state.fail_orders {
            return Err(ApiError::Network("connection reset".to_string()));
        }

        Ok(CreatedOrder {
            id: OrderId::new(state.requests.len() as i64),
            date: request.date.to_rfc3339(),
            subtotal: 100.0,
            total: 119.0,
            user: None,
            client: Some(Client {
                id: request.client_id,
                legal_name: "ACME SAS".to_string(),
                identification_number: "900123".to_string(),
                address: String::new(),
                phone: String::new(),
            }),
        })
    }
}
