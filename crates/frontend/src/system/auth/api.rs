use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_utils::post_json;
use crate::shared::error::ApiError;

/// Login with email and password. No bearer token yet, by definition.
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    post_json("/api/admin/auth/log-in", &request, None).await
}
