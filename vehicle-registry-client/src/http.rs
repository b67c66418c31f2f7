//! Shared HTTP request plumbing.
//!
//! One-shot execution only: a request either resolves or fails exactly once,
//! and the dashboard recovers by the user re-triggering an action. There is
//! no retry or backoff layer.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{RegistryError, Result};

/// Longest response-body prefix written to the debug log.
const MAX_LOGGED_BODY: usize = 2048;

/// Execute a request and return the response body for success statuses.
///
/// Transport failures map to [`RegistryError::Network`] /
/// [`RegistryError::Timeout`]; non-2xx statuses map to
/// [`RegistryError::Status`] carrying the raw body.
pub(crate) async fn execute_request(request: RequestBuilder, operation: &str) -> Result<String> {
    log::debug!("[registry] POST {operation}");

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            RegistryError::Timeout {
                detail: e.to_string(),
            }
        } else {
            RegistryError::Network {
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status();
    log::debug!("[registry] {operation} -> {status}");

    let body = response
        .text()
        .await
        .map_err(|e| RegistryError::Network {
            detail: format!("failed to read response body: {e}"),
        })?;

    if !status.is_success() {
        return Err(RegistryError::Status {
            status: status.as_u16(),
            body,
        });
    }

    log::debug!("[registry] {operation} body: {}", truncate_for_log(&body));
    Ok(body)
}

/// Parse a JSON response body.
pub(crate) fn parse_json<T>(body: &str, operation: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("[registry] {operation}: JSON parse failed: {e}");
        log::error!("[registry] raw response: {}", truncate_for_log(body));
        RegistryError::Parse {
            detail: e.to_string(),
        }
    })
}

fn truncate_for_log(body: &str) -> &str {
    if body.len() <= MAX_LOGGED_BODY {
        return body;
    }
    let mut end = MAX_LOGGED_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
