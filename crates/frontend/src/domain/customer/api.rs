use contracts::domain::customer::Customer;
use contracts::domain::order::draft::StandardMeasurements;

use crate::shared::api_utils::get_json;
use crate::shared::error::{require_token, ApiError};

/// Fetch the customer directory. Network and server failures fall back
/// to a fixed sample set so the selection dialog stays usable offline;
/// a 401 is returned to the caller, which must drop the dead session.
pub async fn fetch_customers(token: Option<&str>) -> Result<Vec<Customer>, ApiError> {
    customers_or_sample(try_fetch_customers(token).await)
}

fn customers_or_sample(
    fetched: Result<Vec<Customer>, ApiError>,
) -> Result<Vec<Customer>, ApiError> {
    match fetched {
        Ok(customers) => Ok(customers),
        Err(ApiError::SessionExpired) => Err(ApiError::SessionExpired),
        Err(err) => {
            log::warn!("Failed to fetch customers, using sample data: {}", err);
            Ok(sample_customers())
        }
    }
}

async fn try_fetch_customers(token: Option<&str>) -> Result<Vec<Customer>, ApiError> {
    let token = require_token(token)?;
    get_json::<Vec<Customer>>("/api/admin/customers", Some(token)).await
}

fn sample_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "1".to_string(),
            full_name: "John Doe".to_string(),
            email_address: "john.doe@example.com".to_string(),
            phone_number: "+1234567890".to_string(),
            client_type: "Premium".to_string(),
            address: "123 Main St, City, State 12345".to_string(),
            measurements: Some(StandardMeasurements {
                chest: "42".to_string(),
                waist: "34".to_string(),
                hips: "40".to_string(),
                shoulder_width: "18".to_string(),
                sleeve_length: "24".to_string(),
                inseam: "32".to_string(),
                height: "180".to_string(),
                neck: "16".to_string(),
            }),
            additional_fit_notes: Some("Prefers slim fit".to_string()),
        },
        Customer {
            id: "2".to_string(),
            full_name: "Jane Smith".to_string(),
            email_address: "jane.smith@example.com".to_string(),
            phone_number: "+1987654321".to_string(),
            client_type: "Regular".to_string(),
            address: "456 Oak Ave, City, State 12345".to_string(),
            measurements: Some(StandardMeasurements {
                chest: "38".to_string(),
                waist: "28".to_string(),
                hips: "36".to_string(),
                shoulder_width: "16".to_string(),
                sleeve_length: "22".to_string(),
                inseam: "30".to_string(),
                height: "165".to_string(),
                neck: "14".to_string(),
            }),
            additional_fit_notes: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_session_is_never_masked_by_sample_data() {
        assert_eq!(
            customers_or_sample(Err(ApiError::SessionExpired)),
            Err(ApiError::SessionExpired)
        );
    }

    #[test]
    fn test_network_failures_degrade_to_sample_data() {
        let degraded = customers_or_sample(Err(ApiError::Timeout));
        assert_eq!(degraded, Ok(sample_customers()));
    }
}
