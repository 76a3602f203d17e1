use super::aggregate::Order;

pub const ALL_STATUS: &str = "All Status";
pub const ALL_PRIORITY: &str = "All Priority";

/// Active predicates over the order list. The visible subset is the AND
/// of the three clauses; result ordering always follows the source
/// collection (the "sort by" control is display-only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilter {
    pub search_query: String,
    pub status_filter: String,
    pub priority_filter: String,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            status_filter: ALL_STATUS.to_string(),
            priority_filter: ALL_PRIORITY.to_string(),
        }
    }
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        let query = self.search_query.to_lowercase();
        let matches_search = query.is_empty()
            || order.customer_name.to_lowercase().contains(&query)
            || order.customer_email.to_lowercase().contains(&query)
            || order.order_id.to_lowercase().contains(&query)
            || order.tracking_id.to_lowercase().contains(&query);

        let matches_status =
            self.status_filter == ALL_STATUS || order.status == self.status_filter;
        let matches_priority =
            self.priority_filter == ALL_PRIORITY || order.priority_level == self.priority_filter;

        matches_search && matches_status && matches_priority
    }

    pub fn apply(&self, orders: &[Order]) -> Vec<Order> {
        orders.iter().filter(|o| self.matches(o)).cloned().collect()
    }
}

/// Remove an order from the local collection by identity. Used by the
/// confirm-delete flow; server-side deletion is the caller's concern.
pub fn remove_order(orders: &mut Vec<Order>, id: i64) {
    orders.retain(|o| o.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64, status: &str, priority: &str, tracking_id: &str) -> Order {
        Order {
            id,
            order_id: format!("Order-{}", 9000 + id),
            tracking_id: tracking_id.to_string(),
            due_date: "2025-06-29T00:00:00.000+00:00".to_string(),
            customer_id: "JO8856".to_string(),
            customer_first_name: "Tireni".to_string(),
            customer_last_name: "Alausa".to_string(),
            customer_name: "Tireni Alausa".to_string(),
            customer_email: "tireni@example.com".to_string(),
            customer_phone_number: "+1234567890".to_string(),
            customer_address: "123 Main Street".to_string(),
            order_fulfillment_method: "CARRYOUT".to_string(),
            status: status.to_string(),
            progress: None,
            priority_level: priority.to_string(),
            fitting_required: "true".to_string(),
            start_date: "2025-09-20".to_string(),
            end_date: "2025-10-30".to_string(),
            client_type: "WALK_IN".to_string(),
            additional_fit_notes: String::new(),
            additional_notes: String::new(),
            rider_name: "Alex Smith".to_string(),
            rider_phone_number: None,
        }
    }

    #[test]
    fn test_status_filter_is_exact() {
        let orders = vec![
            order(1, "ONGOING", "HIGH", "4381"),
            order(2, "COMPLETED", "LOW", "5679"),
        ];
        let filter = OrderFilter {
            status_filter: "ONGOING".to_string(),
            ..Default::default()
        };
        let visible = filter.apply(&orders);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_sentinels_match_everything() {
        let orders = vec![
            order(1, "ONGOING", "HIGH", "4381"),
            order(2, "COMPLETED", "LOW", "5679"),
        ];
        let visible = OrderFilter::default().apply(&orders);
        assert_eq!(visible.len(), 2);
        // Source ordering is preserved.
        assert_eq!(visible[0].id, 1);
        assert_eq!(visible[1].id, 2);
    }

    #[test]
    fn test_search_covers_tracking_id() {
        let orders = vec![
            order(1, "ONGOING", "HIGH", "4381"),
            order(2, "COMPLETED", "LOW", "5679"),
        ];
        let filter = OrderFilter {
            search_query: "5679".to_string(),
            ..Default::default()
        };
        let visible = filter.apply(&orders);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let orders = vec![order(1, "ONGOING", "HIGH", "4381")];
        let filter = OrderFilter {
            search_query: "tireni al".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&orders).len(), 1);

        let filter = OrderFilter {
            search_query: "TIRENI@EXAMPLE".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&orders).len(), 1);
    }

    #[test]
    fn test_clauses_combine_with_and() {
        let orders = vec![
            order(1, "ONGOING", "HIGH", "4381"),
            order(2, "ONGOING", "LOW", "5679"),
        ];
        let filter = OrderFilter {
            status_filter: "ONGOING".to_string(),
            priority_filter: "LOW".to_string(),
            ..Default::default()
        };
        let visible = filter.apply(&orders);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn test_remove_order_by_identity() {
        let mut orders = vec![
            order(1, "ONGOING", "HIGH", "4381"),
            order(2, "COMPLETED", "LOW", "5679"),
        ];
        remove_order(&mut orders, 1);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, 2);
    }
}
