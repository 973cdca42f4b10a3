//! Order sheets: the operator's table input as a JSON document, for the
//! command-line entry point.
//!
//! ```json
//! {
//!   "clientId": 8,
//!   "userId": 2,
//!   "rows": [
//!     { "vehicleId": 10, "quantity": "3", "discounts": "5", "taxes": "1,2" },
//!     { "vehicleId": 20, "quantity": "1" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use speedorz_core::{ClientId, UserId, VehicleId};
use speedorz_ordering::{LineInputs, RowInput};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSheet {
    #[serde(default)]
    pub client_id: ClientId,
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub rows: Vec<SheetRow>,
}

/// One row of the table. Fields are kept as text, exactly as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRow {
    pub vehicle_id: VehicleId,
    #[serde(flatten)]
    pub input: RowInput,
}

impl OrderSheet {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Rows keyed by vehicle. A vehicle listed twice keeps its last row.
    pub fn line_inputs(&self) -> LineInputs {
        self.rows
            .iter()
            .map(|row| (row.vehicle_id, row.input.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sheet_with_missing_fields() {
        let sheet = OrderSheet::from_json(
            r#"{
                "clientId": 8,
                "rows": [
                    {"vehicleId": 10, "quantity": "3", "discounts": "5", "taxes": "1,2"},
                    {"vehicleId": 20, "quantity": "1"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(sheet.client_id, ClientId::new(8));
        assert_eq!(sheet.user_id, UserId::new(0));

        let inputs = sheet.line_inputs();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs.get(&VehicleId::new(10)), Some(&RowInput::new("3", "5", "1,2")));
        assert_eq!(inputs.get(&VehicleId::new(20)), Some(&RowInput::new("1", "", "")));
    }

    #[test]
    fn duplicate_vehicle_keeps_last_row() {
        let sheet = OrderSheet::from_json(
            r#"{"rows": [{"vehicleId": 1, "quantity": "1"}, {"vehicleId": 1, "quantity": "4"}]}"#,
        )
        .unwrap();
        let inputs = sheet.line_inputs();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs.get(&VehicleId::new(1)).map(|r| r.quantity.as_str()), Some("4"));
    }

    #[test]
    fn rejects_row_without_vehicle() {
        assert!(OrderSheet::from_json(r#"{"rows": [{"quantity": "1"}]}"#).is_err());
    }
}
