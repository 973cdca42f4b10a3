use serde::{Deserialize, Serialize};

use speedorz_core::{DiscountId, Entity, TaxId};

/// A percentage adjustment applied by the backend to an order line.
///
/// Discounts and taxes share the same shape and differ only in the kind of
/// identifier they carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment<I> {
    pub id: I,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "porcentaje", default)]
    pub percentage: f64,
}

pub type Discount = Adjustment<DiscountId>;
pub type Tax = Adjustment<TaxId>;

impl<I> Adjustment<I> {
    pub fn new(id: I, name: impl Into<String>, percentage: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            percentage,
        }
    }
}

impl<I> Entity for Adjustment<I>
where
    I: Clone + Eq + core::hash::Hash + core::fmt::Debug,
{
    type Id = I;

    fn id(&self) -> &I {
        &self.id
    }
}
