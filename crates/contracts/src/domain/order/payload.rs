use serde::Serialize;

use super::draft::OrderDraft;
use super::timeline::TimelinePlan;

// Measurements the form does not collect yet; the backend schema
// requires them.
const PLACEHOLDER_OUT_SEAM: f64 = 40.0;
const PLACEHOLDER_THIGH: f64 = 22.0;
const PLACEHOLDER_WRIST: f64 = 9.5;

// Rider fields are fixed until the real assignment flow lands.
const PLACEHOLDER_RIDER_NAME: &str = "Alex Smith";
const PLACEHOLDER_RIDER_NUMBER: &str = "+1987654321";

/// Parse a measurement string the way JavaScript's `parseFloat` does:
/// leading whitespace skipped, the longest numeric prefix taken, and
/// anything without one becoming NaN. The backend receives `null` for
/// NaN (serde_json, like JSON.stringify, has no NaN literal), so the
/// lenient parse must be preserved rather than rejected.
pub fn lenient_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return f64::NAN;
    }
    s[..end].parse().unwrap_or(f64::NAN)
}

/// The exact request shape the order-creation endpoint expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub due_date: String,
    pub start_date: String,
    pub end_date: String,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone_number: String,
    pub customer_address: String,
    pub client_type: String,
    pub order_fulfillment_method: String,
    pub status: String,
    pub neck: f64,
    pub shoulder_width: f64,
    pub chest: f64,
    pub waist: f64,
    pub hip: f64,
    pub sleeve_length: f64,
    pub inseam: f64,
    pub out_seam: f64,
    pub thigh: f64,
    pub wrist: f64,
    pub custom_measurement: bool,
    pub fitting_required: bool,
    pub priority_level: String,
    pub additional_fit_notes: String,
    pub additional_notes: String,
    pub rider_name: String,
    pub rider_number: String,
}

impl CreateOrderRequest {
    pub fn from_draft(draft: &OrderDraft, timeline: &TimelinePlan) -> Self {
        let mut names = draft.full_name.split_whitespace();
        let first_name = names.next().unwrap_or_default().to_string();
        let last_name = names.next().unwrap_or_default().to_string();
        let s = &draft.measurements.standard;

        Self {
            due_date: timeline.deadline_date.clone(),
            start_date: timeline.start_date.clone(),
            end_date: timeline.deadline_date.clone(),
            customer_first_name: first_name,
            customer_last_name: last_name,
            customer_name: draft.full_name.clone(),
            customer_email: draft.email_address.clone(),
            customer_phone_number: draft.phone_number.clone(),
            customer_address: draft.address.clone(),
            client_type: draft.client_type.clone(),
            order_fulfillment_method: "Carryout".to_string(),
            status: "Ongoing".to_string(),
            neck: lenient_float(&s.neck),
            shoulder_width: lenient_float(&s.shoulder_width),
            chest: lenient_float(&s.chest),
            waist: lenient_float(&s.waist),
            hip: lenient_float(&s.hips),
            sleeve_length: lenient_float(&s.sleeve_length),
            inseam: lenient_float(&s.inseam),
            out_seam: PLACEHOLDER_OUT_SEAM,
            thigh: PLACEHOLDER_THIGH,
            wrist: PLACEHOLDER_WRIST,
            custom_measurement: true,
            fitting_required: timeline.fitting_required.requires_fitting(),
            priority_level: timeline.priority_level.as_str().to_uppercase(),
            additional_fit_notes: draft.measurements.additional_fit_notes.clone(),
            additional_notes: timeline.additional_notes.clone(),
            rider_name: PLACEHOLDER_RIDER_NAME.to_string(),
            rider_number: PLACEHOLDER_RIDER_NUMBER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::draft::{SectionUpdate, StandardMeasurementsUpdate};
    use crate::domain::order::timeline::{FittingMode, PriorityLevel};

    #[test]
    fn test_lenient_float() {
        assert_eq!(lenient_float("42"), 42.0);
        assert_eq!(lenient_float("  16.5 "), 16.5);
        assert_eq!(lenient_float("42cm"), 42.0);
        assert_eq!(lenient_float("-3.25"), -3.25);
        assert!(lenient_float("").is_nan());
        assert!(lenient_float("abc").is_nan());
        assert!(lenient_float(".").is_nan());
    }

    fn sample_inputs() -> (OrderDraft, TimelinePlan) {
        let mut draft = OrderDraft::default();
        draft.full_name = "Tireni Alausa".to_string();
        draft.email_address = "tireni@example.com".to_string();
        draft.phone_number = "+1234567890".to_string();
        draft.client_type = "individual".to_string();
        draft.address = "123 Main Street".to_string();
        draft.apply(SectionUpdate::StandardMeasurements(
            StandardMeasurementsUpdate {
                chest: Some("42".to_string()),
                waist: Some("not a number".to_string()),
                ..Default::default()
            },
        ));

        let mut timeline = TimelinePlan::default();
        timeline.priority_level = PriorityLevel::High;
        timeline.fitting_required = FittingMode::Single;
        (draft, timeline)
    }

    #[test]
    fn test_from_draft_builds_fixed_shape() {
        let (draft, timeline) = sample_inputs();
        let req = CreateOrderRequest::from_draft(&draft, &timeline);

        assert_eq!(req.customer_first_name, "Tireni");
        assert_eq!(req.customer_last_name, "Alausa");
        assert_eq!(req.customer_name, "Tireni Alausa");
        assert_eq!(req.due_date, timeline.deadline_date);
        assert_eq!(req.end_date, timeline.deadline_date);
        assert_eq!(req.order_fulfillment_method, "Carryout");
        assert_eq!(req.status, "Ongoing");
        assert_eq!(req.priority_level, "HIGH");
        assert!(req.fitting_required);
        assert!(req.custom_measurement);
        assert_eq!(req.chest, 42.0);
        assert!(req.waist.is_nan());
        assert_eq!(req.out_seam, 40.0);
        assert_eq!(req.thigh, 22.0);
        assert_eq!(req.wrist, 9.5);
        assert_eq!(req.rider_name, "Alex Smith");
    }

    #[test]
    fn test_single_word_name_leaves_last_name_empty() {
        let (mut draft, timeline) = sample_inputs();
        draft.full_name = "Joseph".to_string();
        let req = CreateOrderRequest::from_draft(&draft, &timeline);
        assert_eq!(req.customer_first_name, "Joseph");
        assert_eq!(req.customer_last_name, "");
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let (draft, timeline) = sample_inputs();
        let req = CreateOrderRequest::from_draft(&draft, &timeline);
        let json = serde_json::to_value(&req).unwrap();

        assert!(json.get("customerFirstName").is_some());
        assert!(json.get("orderFulfillmentMethod").is_some());
        assert!(json.get("shoulderWidth").is_some());
        // NaN measurements serialize as null, matching JSON.stringify.
        assert!(json.get("waist").unwrap().is_null());
    }
}
