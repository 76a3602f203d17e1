use serde::{Deserialize, Serialize};

/// Order lifecycle status. The backend is not consistent about casing
/// ("ONGOING", "Ongoing"), so parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Ongoing,
    Completed,
    Cancelled,
    Pending,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Ongoing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
        OrderStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Ongoing => "ONGOING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Pending => "PENDING",
        }
    }

    pub fn parse(s: &str) -> Option<OrderStatus> {
        match s.to_uppercase().as_str() {
            "ONGOING" => Some(OrderStatus::Ongoing),
            "COMPLETED" => Some(OrderStatus::Completed),
            "CANCELLED" => Some(OrderStatus::Cancelled),
            "PENDING" => Some(OrderStatus::Pending),
            _ => None,
        }
    }
}

/// A persisted order as the admin list reads it back. The server owns
/// this record; the list view is a read-mostly cache refreshed on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_id: String,
    pub tracking_id: String,
    pub due_date: String,
    pub customer_id: String,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone_number: String,
    pub customer_address: String,
    pub order_fulfillment_method: String,
    pub status: String,
    #[serde(default)]
    pub progress: Option<String>,
    pub priority_level: String,
    pub fitting_required: String,
    pub start_date: String,
    pub end_date: String,
    pub client_type: String,
    pub additional_fit_notes: String,
    pub additional_notes: String,
    pub rider_name: String,
    #[serde(default)]
    pub rider_phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(OrderStatus::parse("ongoing"), Some(OrderStatus::Ongoing));
        assert_eq!(OrderStatus::parse("Completed"), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::parse("archived"), None);
    }
}
