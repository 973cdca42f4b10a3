//! The backend operations the ordering screen depends on.

use std::future::Future;

use speedorz_catalog::{Discount, Tax, Vehicle};
use speedorz_ordering::{CreatedOrder, OrderRequest};

pub const DISCOUNTS_PATH: &str = "/descuentos";
pub const TAXES_PATH: &str = "/impuestos";
pub const PROMOTIONAL_VEHICLES_PATH: &str = "/vehiculos-promocion";
pub const ORDERS_PATH: &str = "/ordenescompra";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Dealership API as seen by the ordering workflow.
///
/// [`crate::ApiClient`] talks HTTP; tests substitute an in-memory fake.
pub trait OrderingApi: Send + Sync + 'static {
    /// `GET /descuentos`
    fn list_discounts(&self) -> impl Future<Output = Result<Vec<Discount>, ApiError>> + Send;

    /// `GET /impuestos`
    fn list_taxes(&self) -> impl Future<Output = Result<Vec<Tax>, ApiError>> + Send;

    /// `GET /vehiculos-promocion`
    fn list_promotional_vehicles(
        &self,
    ) -> impl Future<Output = Result<Vec<Vehicle>, ApiError>> + Send;

    /// `POST /ordenescompra`
    fn create_order(
        &self,
        request: &OrderRequest,
    ) -> impl Future<Output = Result<CreatedOrder, ApiError>> + Send;
}
