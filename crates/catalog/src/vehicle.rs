use serde::{Deserialize, Serialize};

use speedorz_core::{Entity, VehicleId};

/// A vehicle offered in the promotional catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "idVehiculo")]
    pub id: VehicleId,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "marca", default)]
    pub brand: String,
    #[serde(rename = "modelo", default)]
    pub model: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(rename = "precio", default)]
    pub price: f64,
}

impl Vehicle {
    pub fn new(id: VehicleId, name: impl Into<String>, price: f64, stock: i64) -> Self {
        Self {
            id,
            name: name.into(),
            brand: String::new(),
            model: String::new(),
            description: String::new(),
            stock,
            price,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Entity for Vehicle {
    type Id = VehicleId;

    fn id(&self) -> &VehicleId {
        &self.id
    }
}
