use thiserror::Error;

/// Failures surfaced by the profile service.
///
/// These pass through to the caller unchanged: no retry, no backoff, no
/// partial-result salvage.
#[derive(Debug, Error)]
pub enum ScholarError {
    /// Unknown author or publication identifier (404 response).
    #[error("not found: {0}")]
    NotFound(String),

    /// Non-success status from the service.
    #[error("service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// Transport failure (connection, DNS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected schema.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}
