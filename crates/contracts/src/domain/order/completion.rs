use super::draft::OrderDraft;
use super::payload::lenient_float;

/// An independently rendered, independently validated region of the
/// creation form. The string ids double as DOM anchor ids for the
/// sticky navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSection {
    CustomerSelection,
    ClientInformation,
    OrderInformation,
    Measurements,
    Timeline,
    Instructions,
}

impl FormSection {
    pub const ALL: [FormSection; 6] = [
        FormSection::CustomerSelection,
        FormSection::ClientInformation,
        FormSection::OrderInformation,
        FormSection::Measurements,
        FormSection::Timeline,
        FormSection::Instructions,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FormSection::CustomerSelection => "customer-selection",
            FormSection::ClientInformation => "client-information",
            FormSection::OrderInformation => "order-information",
            FormSection::Measurements => "measurements",
            FormSection::Timeline => "timeline",
            FormSection::Instructions => "instructions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormSection::CustomerSelection => "Customer Selection",
            FormSection::ClientInformation => "Client Info",
            FormSection::OrderInformation => "Order Details",
            FormSection::Measurements => "Measurements",
            FormSection::Timeline => "Timeline",
            FormSection::Instructions => "Instructions",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FormSection::CustomerSelection => "Select existing customer",
            FormSection::ClientInformation => "Basic client details",
            FormSection::OrderInformation => "Product specifications",
            FormSection::Measurements => "Body measurements",
            FormSection::Timeline => "Production schedule",
            FormSection::Instructions => "Special notes & references",
        }
    }
}

fn non_zero(value: &str) -> bool {
    let n = lenient_float(value);
    !n.is_nan() && n != 0.0
}

/// Derive which sections count as complete for the progress UI. Each
/// rule reads only the current draft; the function has no other inputs
/// and no effects, so callers re-run it on every draft change.
///
/// Timeline and instructions carry no validation gate and are always
/// complete; customer selection never auto-completes.
pub fn completed_sections(draft: &OrderDraft) -> Vec<FormSection> {
    let mut completed = Vec::new();

    if !draft.full_name.is_empty()
        && !draft.email_address.is_empty()
        && !draft.phone_number.is_empty()
    {
        completed.push(FormSection::ClientInformation);
    }

    if draft.order_items.iter().any(|item| item.is_valid()) {
        completed.push(FormSection::OrderInformation);
    }

    let s = &draft.measurements.standard;
    if non_zero(&s.chest) || non_zero(&s.waist) || non_zero(&s.hips) {
        completed.push(FormSection::Measurements);
    }

    completed.push(FormSection::Timeline);
    completed.push(FormSection::Instructions);

    completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::draft::{OrderItem, SectionUpdate, StandardMeasurementsUpdate};

    #[test]
    fn test_empty_draft_completes_only_ungated_sections() {
        let completed = completed_sections(&OrderDraft::default());
        assert_eq!(
            completed,
            vec![FormSection::Timeline, FormSection::Instructions]
        );
    }

    #[test]
    fn test_client_information_requires_all_three_contact_fields() {
        let mut draft = OrderDraft::default();
        draft.full_name = "Tireni Alausa".to_string();
        draft.email_address = "tireni@example.com".to_string();
        assert!(!completed_sections(&draft).contains(&FormSection::ClientInformation));

        draft.phone_number = "+1234567890".to_string();
        assert!(completed_sections(&draft).contains(&FormSection::ClientInformation));
    }

    #[test]
    fn test_order_information_needs_one_fully_specified_item() {
        let mut draft = OrderDraft::default();
        assert!(!completed_sections(&draft).contains(&FormSection::OrderInformation));

        draft.order_items = vec![
            OrderItem::default(),
            OrderItem {
                product_type: "kaftan".to_string(),
                specific_item: "Classic Kaftan".to_string(),
                color: "Navy".to_string(),
                quantity: 2,
                ..Default::default()
            },
        ];
        assert!(completed_sections(&draft).contains(&FormSection::OrderInformation));

        draft.order_items[1].quantity = 0;
        assert!(!completed_sections(&draft).contains(&FormSection::OrderInformation));
    }

    #[test]
    fn test_measurements_need_a_non_zero_core_value() {
        let mut draft = OrderDraft::default();
        draft.apply(SectionUpdate::StandardMeasurements(
            StandardMeasurementsUpdate {
                chest: Some("0".to_string()),
                ..Default::default()
            },
        ));
        assert!(!completed_sections(&draft).contains(&FormSection::Measurements));

        draft.apply(SectionUpdate::StandardMeasurements(
            StandardMeasurementsUpdate {
                waist: Some("34".to_string()),
                ..Default::default()
            },
        ));
        assert!(completed_sections(&draft).contains(&FormSection::Measurements));
    }

    #[test]
    fn test_customer_selection_never_auto_completes() {
        let mut draft = OrderDraft::default();
        draft.full_name = "Jane".to_string();
        draft.email_address = "jane@example.com".to_string();
        draft.phone_number = "+1".to_string();
        assert!(!completed_sections(&draft).contains(&FormSection::CustomerSelection));
    }
}
