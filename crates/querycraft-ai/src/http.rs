//! Shared HTTP plumbing for the provider clients.

use std::time::Duration;

use reqwest::StatusCode;

use crate::AiError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub(crate) fn build_http_client() -> Result<reqwest::Client, AiError> {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))
}

pub(crate) fn network_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

/// Map a non-success status to a typed error. 429 is the only rate-limit signal.
pub(crate) fn status_error(status: StatusCode, body: &str) -> AiError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return AiError::RateLimited;
    }
    let body = body.chars().take(200).collect::<String>();
    AiError::ApiError(format!("HTTP {status}: {body}"))
}

/// Return the response if successful, otherwise its classified error.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    Err(status_error(status, &text))
}
