//! Order lines and the operator input they are captured from.
//!
//! The ordering screen shows one row per catalog vehicle with three free-text
//! fields: quantity, discount ids and tax ids (comma separated). Rows are keyed by
//! vehicle id, so capture never depends on the order rows were rendered in.
//!
//! Input is deliberately *not* validated here. Text that is not a number travels
//! to the backend as JSON `null`, and fractional values travel as typed; both are
//! the backend's to reject.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use speedorz_core::{DiscountId, TaxId, VehicleId};

/// Raw text the operator typed into one vehicle row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowInput {
    pub quantity: String,
    pub discounts: String,
    pub taxes: String,
}

impl RowInput {
    pub fn new(
        quantity: impl Into<String>,
        discounts: impl Into<String>,
        taxes: impl Into<String>,
    ) -> Self {
        Self {
            quantity: quantity.into(),
            discounts: discounts.into(),
            taxes: taxes.into(),
        }
    }
}

/// Operator input for the whole table, keyed by the vehicle each row belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInputs {
    rows: BTreeMap<VehicleId, RowInput>,
}

impl LineInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) the row of one vehicle.
    pub fn set(&mut self, vehicle_id: VehicleId, row: RowInput) {
        self.rows.insert(vehicle_id, row);
    }

    /// Builder form of [`LineInputs::set`].
    pub fn with(mut self, vehicle_id: VehicleId, row: RowInput) -> Self {
        self.set(vehicle_id, row);
        self
    }

    pub fn get(&self, vehicle_id: &VehicleId) -> Option<&RowInput> {
        self.rows.get(vehicle_id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn vehicle_ids(&self) -> impl Iterator<Item = VehicleId> + '_ {
        self.rows.keys().copied()
    }
}

impl FromIterator<(VehicleId, RowInput)> for LineInputs {
    fn from_iter<T: IntoIterator<Item = (VehicleId, RowInput)>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// A number as the operator typed it.
///
/// Text is read the way a browser's `Number(text)` reads it: whole values become
/// integers, other finite values are kept as typed, and anything else is "not a
/// number".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput<T> {
    /// A whole value, sent as that integer.
    Integer(T),
    /// A finite value that is not a whole `i64`, sent as typed.
    Decimal(f64),
    /// Not a number; sent as JSON `null`.
    NotANumber,
}

impl<T: From<i64>> NumberInput<T> {
    /// Read trimmed text. Empty text is not a number.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Ok(value) = text.parse::<i64>() {
            return NumberInput::Integer(T::from(value));
        }
        match text.parse::<f64>() {
            Ok(value) => Self::from_f64(value),
            Err(_) => NumberInput::NotANumber,
        }
    }

    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return NumberInput::NotANumber;
        }
        // 2^63 itself does not fit, hence the strict upper bound.
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            NumberInput::Integer(T::from(value as i64))
        } else {
            NumberInput::Decimal(value)
        }
    }
}

impl<T> NumberInput<T> {
    pub fn is_integer(&self) -> bool {
        matches!(self, NumberInput::Integer(_))
    }

    pub fn is_number(&self) -> bool {
        !matches!(self, NumberInput::NotANumber)
    }
}

impl<T: Serialize> Serialize for NumberInput<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NumberInput::Integer(value) => value.serialize(serializer),
            NumberInput::Decimal(value) => serializer.serialize_f64(*value),
            NumberInput::NotANumber => serializer.serialize_none(),
        }
    }
}

impl<'de, T: From<i64>> Deserialize<'de> for NumberInput<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Integer(i64),
            Decimal(f64),
        }

        Ok(match Option::<Wire>::deserialize(deserializer)? {
            Some(Wire::Integer(value)) => NumberInput::Integer(T::from(value)),
            Some(Wire::Decimal(value)) => Self::from_f64(value),
            None => NumberInput::NotANumber,
        })
    }
}

/// One vehicle's quantity plus its selected discount and tax identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "idVehiculo")]
    pub vehicle_id: VehicleId,
    #[serde(rename = "cantidad")]
    pub quantity: NumberInput<i64>,
    #[serde(rename = "idDescuentos")]
    pub discount_ids: Vec<NumberInput<DiscountId>>,
    #[serde(rename = "idImpuestos")]
    pub tax_ids: Vec<NumberInput<TaxId>>,
}

impl OrderLine {
    /// A line with well-formed values.
    pub fn new(vehicle_id: VehicleId, quantity: i64, discounts: &[i64], taxes: &[i64]) -> Self {
        Self {
            vehicle_id,
            quantity: NumberInput::Integer(quantity),
            discount_ids: discounts
                .iter()
                .map(|&id| NumberInput::Integer(DiscountId::new(id)))
                .collect(),
            tax_ids: taxes.iter().map(|&id| NumberInput::Integer(TaxId::new(id))).collect(),
        }
    }

    /// Build the line for `vehicle_id` from the text of its row.
    pub fn from_row(vehicle_id: VehicleId, row: &RowInput) -> Self {
        Self {
            vehicle_id,
            quantity: parse_quantity(&row.quantity),
            discount_ids: parse_id_list(&row.discounts),
            tax_ids: parse_id_list(&row.taxes),
        }
    }

    /// Whether every field reads as a whole number.
    pub fn is_well_formed(&self) -> bool {
        self.quantity.is_integer()
            && self.discount_ids.iter().all(NumberInput::is_integer)
            && self.tax_ids.iter().all(NumberInput::is_integer)
    }
}

/// Parse the quantity field.
///
/// Blank text counts as zero; anything else is read as a [`NumberInput`].
pub fn parse_quantity(text: &str) -> NumberInput<i64> {
    if text.trim().is_empty() {
        return NumberInput::Integer(0);
    }
    NumberInput::parse(text)
}

/// Parse a comma-separated identifier field.
///
/// A blank field means "no adjustments" and yields an empty list. Otherwise every
/// comma-separated token yields one entry, in the order typed, duplicates kept;
/// empty tokens are not a number.
pub fn parse_id_list<I: From<i64>>(text: &str) -> Vec<NumberInput<I>> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',').map(NumberInput::<I>::parse).collect()
}

/// Capture one order line per vehicle, in catalog order.
///
/// Vehicles without a row are captured as blank rows. Rows for vehicles that are
/// not in `vehicle_ids` are ignored.
pub fn capture_lines(
    vehicle_ids: impl IntoIterator<Item = VehicleId>,
    inputs: &LineInputs,
) -> Vec<OrderLine> {
    let blank = RowInput::default();
    vehicle_ids
        .into_iter()
        .map(|vehicle_id| OrderLine::from_row(vehicle_id, inputs.get(&vehicle_id).unwrap_or(&blank)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vid(id: i64) -> VehicleId {
        VehicleId::new(id)
    }

    #[test]
    fn comma_separated_ids_parse_in_order() {
        let ids: Vec<NumberInput<DiscountId>> = parse_id_list("1,2,3");
        assert_eq!(
            ids,
            vec![
                NumberInput::Integer(DiscountId::new(1)),
                NumberInput::Integer(DiscountId::new(2)),
                NumberInput::Integer(DiscountId::new(3)),
            ]
        );
    }

    #[test]
    fn blank_id_field_means_no_adjustments() {
        assert!(parse_id_list::<TaxId>("").is_empty());
        assert!(parse_id_list::<TaxId>("   ").is_empty());
    }

    #[test]
    fn bad_tokens_become_not_a_number() {
        let ids: Vec<NumberInput<TaxId>> = parse_id_list("1,x, 2 ,,");
        assert_eq!(
            ids,
            vec![
                NumberInput::Integer(TaxId::new(1)),
                NumberInput::NotANumber,
                NumberInput::Integer(TaxId::new(2)),
                NumberInput::NotANumber,
                NumberInput::NotANumber,
            ]
        );
    }

    #[test]
    fn quantity_parsing() {
        assert_eq!(parse_quantity("3"), NumberInput::Integer(3));
        assert_eq!(parse_quantity(" 12 "), NumberInput::Integer(12));
        assert_eq!(parse_quantity(""), NumberInput::Integer(0));
        assert_eq!(parse_quantity("-1"), NumberInput::Integer(-1));
        assert_eq!(parse_quantity("two"), NumberInput::NotANumber);
        assert_eq!(parse_quantity("inf"), NumberInput::NotANumber);
    }

    #[test]
    fn decimal_text_is_read_as_a_number() {
        assert_eq!(parse_quantity("2.0"), NumberInput::Integer(2));
        assert_eq!(parse_quantity("1e3"), NumberInput::Integer(1000));
        assert_eq!(parse_quantity("1.5"), NumberInput::Decimal(1.5));

        let ids: Vec<NumberInput<DiscountId>> = parse_id_list("5.0, 2.5");
        assert_eq!(
            ids,
            vec![NumberInput::Integer(DiscountId::new(5)), NumberInput::Decimal(2.5)]
        );
    }

    #[test]
    fn decimal_values_reach_the_wire_as_typed() {
        let line = OrderLine::from_row(vid(10), &RowInput::new("2.0", "5.0", "1.5"));
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "idVehiculo": 10,
                "cantidad": 2,
                "idDescuentos": [5],
                "idImpuestos": [1.5]
            })
        );
        assert!(!line.is_well_formed());

        let back: OrderLine = serde_json::from_value(json).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn not_a_number_serializes_as_null() {
        let line = OrderLine::from_row(vid(10), &RowInput::new("x", "5,y", ""));
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "idVehiculo": 10,
                "cantidad": null,
                "idDescuentos": [5, null],
                "idImpuestos": []
            })
        );
        assert!(!line.is_well_formed());
    }

    #[test]
    fn capture_matches_scenario_rows() {
        let inputs = LineInputs::new()
            .with(vid(10), RowInput::new("3", "5", "1,2"))
            .with(vid(20), RowInput::new("1", "", ""));

        let lines = capture_lines([vid(10), vid(20)], &inputs);

        assert_eq!(
            lines,
            vec![
                OrderLine::new(vid(10), 3, &[5], &[1, 2]),
                OrderLine::new(vid(20), 1, &[], &[]),
            ]
        );
    }

    #[test]
    fn vehicles_without_rows_are_blank_lines() {
        let lines = capture_lines([vid(1)], &LineInputs::new());
        assert_eq!(lines, vec![OrderLine::new(vid(1), 0, &[], &[])]);
    }

    #[test]
    fn rows_for_unknown_vehicles_are_ignored() {
        let inputs = LineInputs::new().with(vid(99), RowInput::new("4", "", ""));
        let lines = capture_lines([vid(1)], &inputs);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].vehicle_id, vid(1));
    }

    proptest! {
        #[test]
        fn one_line_per_vehicle_in_catalog_order(
            ids in proptest::collection::vec(any::<i64>(), 0..20),
            quantities in proptest::collection::vec(0i64..100, 20),
        ) {
            let inputs: LineInputs = ids
                .iter()
                .zip(&quantities)
                .map(|(&id, q)| (vid(id), RowInput::new(q.to_string(), "", "")))
                .collect();

            let lines = capture_lines(ids.iter().map(|&id| vid(id)), &inputs);

            prop_assert_eq!(lines.len(), ids.len());
            for (line, &id) in lines.iter().zip(&ids) {
                prop_assert_eq!(line.vehicle_id, vid(id));
                prop_assert!(line.quantity.is_integer());
            }
        }

        #[test]
        fn numeric_id_lists_round_trip_through_text(
            ids in proptest::collection::vec(0i64..10_000, 1..10),
        ) {
            let text = ids.iter().map(i64::to_string).collect::<Vec<_>>().join(",");
            let parsed: Vec<NumberInput<DiscountId>> = parse_id_list(&text);
            let expected: Vec<NumberInput<DiscountId>> =
                ids.iter().map(|&id| NumberInput::Integer(DiscountId::new(id))).collect();
            prop_assert_eq!(parsed, expected);
        }
    }
}
