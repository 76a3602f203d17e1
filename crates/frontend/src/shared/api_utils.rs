//! Network helpers for the admin API.
//!
//! Every call carries the bearer token when one is supplied, aborts
//! after a fixed timeout, and maps HTTP 401 to a session-expiry error
//! so callers can trigger the implicit logout.

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;

pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Get the base URL for API requests from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(t) => builder.header("Authorization", &format!("Bearer {}", t)),
        None => builder,
    }
}

/// Extract the server-provided `message` field, falling back to a
/// generic status line.
async fn server_message(response: Response) -> String {
    let status = response.status();
    if let Ok(value) = response.json::<serde_json::Value>().await {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    format!("HTTP Error: {}", status)
}

/// Finish building the request with the abort timeout armed and send
/// it. A timeout abort is reported distinctly from other network
/// failures; an HTTP 401 becomes the session-expiry error.
async fn execute<B: Serialize>(
    builder: RequestBuilder,
    body: Option<&B>,
) -> Result<Response, ApiError> {
    let controller = web_sys::AbortController::new()
        .map_err(|_| ApiError::FetchFailed("AbortController unavailable".to_string()))?;
    let signal = controller.signal();
    let builder = builder.abort_signal(Some(&signal));

    let request = match body {
        Some(b) => builder.json(b),
        None => builder.build(),
    }
    .map_err(|e| ApiError::FetchFailed(format!("Failed to build request: {}", e)))?;

    let timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || controller.abort());
    let result = request.send().await;
    timeout.cancel();

    let response = match result {
        Ok(response) => response,
        Err(_) if signal.aborted() => return Err(ApiError::Timeout),
        Err(e) => return Err(ApiError::FetchFailed(e.to_string())),
    };

    if response.status() == 401 {
        return Err(ApiError::SessionExpired);
    }
    Ok(response)
}

pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    let builder = with_auth(Request::get(&api_url(path)), token);
    let response = execute::<()>(builder, None).await?;

    if !response.ok() {
        return Err(ApiError::FetchFailed(server_message(response).await));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::FetchFailed(format!("Failed to parse response: {}", e)))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let builder = with_auth(Request::post(&api_url(path)), token);
    let response = execute(builder, Some(body)).await?;

    if !response.ok() {
        return Err(ApiError::SubmissionFailed(server_message(response).await));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::SubmissionFailed(format!("Failed to parse response: {}", e)))
}

/// POST whose response body the caller does not need.
pub async fn post_empty<B: Serialize>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<(), ApiError> {
    let builder = with_auth(Request::post(&api_url(path)), token);
    let response = execute(builder, Some(body)).await?;

    if !response.ok() {
        return Err(ApiError::SubmissionFailed(server_message(response).await));
    }
    Ok(())
}

pub async fn delete(path: &str, token: Option<&str>) -> Result<(), ApiError> {
    let builder = with_auth(Request::delete(&api_url(path)), token);
    let response = execute::<()>(builder, None).await?;

    if !response.ok() {
        return Err(ApiError::SubmissionFailed(server_message(response).await));
    }
    Ok(())
}
