use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;

/// The eight named measurements every order form collects. Values are
/// kept as the raw input strings; numeric interpretation happens only
/// when the submission payload is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardMeasurements {
    pub chest: String,
    pub waist: String,
    pub hips: String,
    pub shoulder_width: String,
    pub sleeve_length: String,
    pub inseam: String,
    pub height: String,
    pub neck: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    #[default]
    Cm,
    Inches,
}

impl MeasurementUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementUnit::Cm => "cm",
            MeasurementUnit::Inches => "inches",
        }
    }
}

/// A user-defined measurement. Ids are handed out by the owning
/// [`MeasurementSet`] and are unique for the lifetime of the draft;
/// they exist for removal targeting, not ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomMeasurement {
    pub id: u32,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSet {
    pub unit: MeasurementUnit,
    pub standard: StandardMeasurements,
    pub custom: Vec<CustomMeasurement>,
    pub additional_fit_notes: String,
    next_custom_id: u32,
}

impl Default for MeasurementSet {
    fn default() -> Self {
        Self {
            unit: MeasurementUnit::Cm,
            standard: StandardMeasurements::default(),
            custom: Vec::new(),
            additional_fit_notes: String::new(),
            next_custom_id: 1,
        }
    }
}

impl MeasurementSet {
    /// Append a custom measurement. Entries with an empty name or value
    /// are refused. Returns whether the entry was added.
    pub fn add_custom(&mut self, name: &str, value: &str) -> bool {
        if name.trim().is_empty() || value.trim().is_empty() {
            return false;
        }
        let id = self.next_custom_id;
        self.next_custom_id += 1;
        self.custom.push(CustomMeasurement {
            id,
            name: name.to_string(),
            value: value.to_string(),
        });
        true
    }

    pub fn remove_custom(&mut self, id: u32) {
        self.custom.retain(|m| m.id != id);
    }
}

/// One line of a multi-item order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_type: String,
    pub specific_item: String,
    pub color: String,
    pub quantity: u32,
    pub size: String,
    pub material: String,
    pub special_instructions: String,
}

impl Default for OrderItem {
    fn default() -> Self {
        Self {
            product_type: String::new(),
            specific_item: String::new(),
            color: String::new(),
            quantity: 1,
            size: String::new(),
            material: String::new(),
            special_instructions: String::new(),
        }
    }
}

impl OrderItem {
    /// Category and item must stay consistent: switching the product
    /// type discards the previously chosen specific item.
    pub fn set_product_type(&mut self, product_type: &str) {
        if self.product_type != product_type {
            self.specific_item.clear();
        }
        self.product_type = product_type.to_string();
    }

    pub fn is_valid(&self) -> bool {
        !self.product_type.is_empty()
            && !self.specific_item.is_empty()
            && !self.color.is_empty()
            && self.quantity > 0
    }
}

/// Partial update for the client-identity slice of the draft. Only the
/// populated fields are merged.
#[derive(Debug, Clone, Default)]
pub struct ClientUpdate {
    pub full_name: Option<String>,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub client_type: Option<String>,
    pub address: Option<String>,
    pub save_client_info: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct MeasurementsUpdate {
    pub unit: Option<MeasurementUnit>,
    pub additional_fit_notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StandardMeasurementsUpdate {
    pub chest: Option<String>,
    pub waist: Option<String>,
    pub hips: Option<String>,
    pub shoulder_width: Option<String>,
    pub sleeve_length: Option<String>,
    pub inseam: Option<String>,
    pub height: Option<String>,
    pub neck: Option<String>,
}

/// Section-scoped update union. Each form section reports changes
/// through exactly one variant; the orchestrator merges it into the
/// draft without touching any other slice.
#[derive(Debug, Clone)]
pub enum SectionUpdate {
    Client(ClientUpdate),
    Measurements(MeasurementsUpdate),
    StandardMeasurements(StandardMeasurementsUpdate),
    /// Item sections own their own list mutation semantics, so the
    /// payload replaces the whole list.
    OrderItems(Vec<OrderItem>),
}

/// Working state for a new order being composed. Created empty (or
/// pre-filled from a selected customer) when the create view mounts and
/// mutated exclusively through [`SectionUpdate`]s and the custom
/// measurement helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub full_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub client_type: String,
    pub address: String,
    pub save_client_info: bool,
    pub order_items: Vec<OrderItem>,
    pub measurements: MeasurementSet,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email_address: String::new(),
            phone_number: String::new(),
            client_type: String::new(),
            address: String::new(),
            save_client_info: true,
            order_items: vec![OrderItem::default()],
            measurements: MeasurementSet::default(),
        }
    }
}

impl OrderDraft {
    pub fn apply(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::Client(u) => {
                if let Some(v) = u.full_name {
                    self.full_name = v;
                }
                if let Some(v) = u.email_address {
                    self.email_address = v;
                }
                if let Some(v) = u.phone_number {
                    self.phone_number = v;
                }
                if let Some(v) = u.client_type {
                    self.client_type = v;
                }
                if let Some(v) = u.address {
                    self.address = v;
                }
                if let Some(v) = u.save_client_info {
                    self.save_client_info = v;
                }
            }
            SectionUpdate::Measurements(u) => {
                if let Some(v) = u.unit {
                    self.measurements.unit = v;
                }
                if let Some(v) = u.additional_fit_notes {
                    self.measurements.additional_fit_notes = v;
                }
            }
            SectionUpdate::StandardMeasurements(u) => {
                let s = &mut self.measurements.standard;
                if let Some(v) = u.chest {
                    s.chest = v;
                }
                if let Some(v) = u.waist {
                    s.waist = v;
                }
                if let Some(v) = u.hips {
                    s.hips = v;
                }
                if let Some(v) = u.shoulder_width {
                    s.shoulder_width = v;
                }
                if let Some(v) = u.sleeve_length {
                    s.sleeve_length = v;
                }
                if let Some(v) = u.inseam {
                    s.inseam = v;
                }
                if let Some(v) = u.height {
                    s.height = v;
                }
                if let Some(v) = u.neck {
                    s.neck = v;
                }
            }
            SectionUpdate::OrderItems(items) => {
                self.order_items = items;
            }
        }
    }

    /// Pre-fill client and measurement fields from a directory customer,
    /// or reset the entire draft (order items included) when the
    /// selection is cleared.
    pub fn select_customer(&mut self, customer: Option<&Customer>) {
        match customer {
            Some(c) => {
                self.full_name = c.full_name.clone();
                self.email_address = c.email_address.clone();
                self.phone_number = c.phone_number.clone();
                self.client_type = c.client_type.clone();
                self.address = c.address.clone();
                // A customer without stored measurements yields the
                // all-empty defaults, never missing fields.
                self.measurements.standard = c.measurements.clone().unwrap_or_default();
                self.measurements.additional_fit_notes =
                    c.additional_fit_notes.clone().unwrap_or_default();
            }
            None => *self = OrderDraft::default(),
        }
    }

    pub fn reset(&mut self) {
        *self = OrderDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::Customer;

    fn sample_customer(with_measurements: bool) -> Customer {
        Customer {
            id: "1".to_string(),
            full_name: "John Doe".to_string(),
            email_address: "john.doe@example.com".to_string(),
            phone_number: "+1234567890".to_string(),
            client_type: "Premium".to_string(),
            address: "123 Main St".to_string(),
            measurements: with_measurements.then(|| StandardMeasurements {
                chest: "42".to_string(),
                waist: "34".to_string(),
                ..Default::default()
            }),
            additional_fit_notes: Some("Prefers slim fit".to_string()),
        }
    }

    #[test]
    fn test_standard_measurement_merge_only_touches_named_fields() {
        let mut draft = OrderDraft::default();
        draft.measurements.standard.waist = "34".to_string();
        draft.measurements.standard.neck = "16".to_string();

        draft.apply(SectionUpdate::StandardMeasurements(
            StandardMeasurementsUpdate {
                chest: Some("42".to_string()),
                ..Default::default()
            },
        ));

        assert_eq!(draft.measurements.standard.chest, "42");
        assert_eq!(draft.measurements.standard.waist, "34");
        assert_eq!(draft.measurements.standard.neck, "16");
        assert_eq!(draft.measurements.standard.height, "");
    }

    #[test]
    fn test_client_merge_leaves_other_sections_alone() {
        let mut draft = OrderDraft::default();
        draft.measurements.standard.chest = "40".to_string();

        draft.apply(SectionUpdate::Client(ClientUpdate {
            full_name: Some("Jane Smith".to_string()),
            ..Default::default()
        }));

        assert_eq!(draft.full_name, "Jane Smith");
        assert_eq!(draft.email_address, "");
        assert_eq!(draft.measurements.standard.chest, "40");
    }

    #[test]
    fn test_order_items_update_replaces_list() {
        let mut draft = OrderDraft::default();
        let items = vec![OrderItem::default(), OrderItem::default()];
        draft.apply(SectionUpdate::OrderItems(items));
        assert_eq!(draft.order_items.len(), 2);
    }

    #[test]
    fn test_select_customer_without_measurements_yields_empty_defaults() {
        let mut draft = OrderDraft::default();
        draft.select_customer(Some(&sample_customer(false)));

        assert_eq!(draft.full_name, "John Doe");
        assert_eq!(draft.measurements.standard, StandardMeasurements::default());
        assert_eq!(draft.measurements.additional_fit_notes, "Prefers slim fit");
    }

    #[test]
    fn test_clear_selection_resets_to_initial_literal() {
        let mut draft = OrderDraft::default();
        draft.select_customer(Some(&sample_customer(true)));
        draft.order_items.push(OrderItem {
            product_type: "kaftan".to_string(),
            ..Default::default()
        });

        draft.select_customer(None);

        assert_eq!(draft, OrderDraft::default());
        assert_eq!(draft.order_items.len(), 1);
    }

    #[test]
    fn test_changing_product_type_clears_specific_item() {
        let mut item = OrderItem {
            product_type: "kaftan".to_string(),
            specific_item: "Classic Kaftan".to_string(),
            ..Default::default()
        };
        item.set_product_type("agbada");
        assert_eq!(item.specific_item, "");

        // Re-selecting the same category keeps the chosen item.
        item.specific_item = "Royal Agbada".to_string();
        item.set_product_type("agbada");
        assert_eq!(item.specific_item, "Royal Agbada");
    }

    #[test]
    fn test_custom_measurement_requires_name_and_value() {
        let mut set = MeasurementSet::default();
        assert!(!set.add_custom("", "12"));
        assert!(!set.add_custom("Ankle", "  "));
        assert!(set.add_custom("Ankle", "12"));
        assert_eq!(set.custom.len(), 1);
    }

    #[test]
    fn test_custom_measurement_ids_stay_distinct_after_removal() {
        let mut set = MeasurementSet::default();
        set.add_custom("Ankle", "12");
        set.add_custom("Calf", "15");
        let first_id = set.custom[0].id;
        set.remove_custom(first_id);
        set.add_custom("Bicep", "13");

        let mut ids: Vec<u32> = set.custom.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), set.custom.len());
        assert!(set.custom.iter().all(|m| m.id != first_id));
    }
}
