use serde::{Deserialize, Serialize};

use crate::domain::order::draft::StandardMeasurements;

/// A record from the customer directory. Read-only on this side;
/// selecting one pre-fills the order draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub full_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub client_type: String,
    pub address: String,
    #[serde(default)]
    pub measurements: Option<StandardMeasurements>,
    #[serde(default)]
    pub additional_fit_notes: Option<String>,
}
