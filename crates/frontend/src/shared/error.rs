use thiserror::Error;

/// Errors surfaced to the user at the call site nearest the action.
/// They never propagate to a top-level unhandled state: every variant
/// becomes either an alert or a logged fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A mutating call was attempted with no stored token. Raised
    /// before any network request is made.
    #[error("Authentication token not found.")]
    AuthRequired,

    /// Non-success response to a mutating request; carries the server
    /// message when the payload provides one.
    #[error("{0}")]
    SubmissionFailed(String),

    /// Network failure or non-success response on a read. Callers
    /// substitute fallback data instead of blocking the view.
    #[error("{0}")]
    FetchFailed(String),

    /// HTTP 401 on an authenticated request. The caller performs the
    /// implicit logout; the message tells the user to sign in again.
    #[error("Session expired. Please login again.")]
    SessionExpired,

    #[error("Request timeout")]
    Timeout,
}

/// Submission precondition: a bearer token must exist before any
/// network call goes out.
pub fn require_token(token: Option<&str>) -> Result<&str, ApiError> {
    token.ok_or(ApiError::AuthRequired)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_token() {
        assert_eq!(require_token(None), Err(ApiError::AuthRequired));
        assert_eq!(require_token(Some("jwt")), Ok("jwt"));
    }

    #[test]
    fn test_distinct_user_facing_messages() {
        assert_eq!(
            ApiError::SessionExpired.to_string(),
            "Session expired. Please login again."
        );
        assert_eq!(ApiError::Timeout.to_string(), "Request timeout");
        assert_ne!(
            ApiError::Timeout.to_string(),
            ApiError::FetchFailed("HTTP Error: 500".to_string()).to_string()
        );
    }
}
