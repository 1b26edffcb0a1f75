use thiserror::Error;

/// Errors a submission attempt can end with.
///
/// Malformed form input is deliberately NOT represented here: a value that
/// fails integer parsing propagates as a `None` sentinel (serialized as JSON
/// `null`) and never blocks the submission.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The POST itself failed: connection refused, DNS, TLS, interrupted body.
    /// Non-200 statuses are not checked explicitly; they only surface here if
    /// the body then fails to parse.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Fixed-contract response carried no `redirect` field.
    #[error("unexpected response format")]
    UnexpectedFormat,

    /// The key/value store capability failed a write or read.
    #[error("storage error: {0}")]
    Storage(String),

    /// The navigation capability failed.
    #[error("navigation error: {0}")]
    Navigation(String),
}

pub type Result<T> = std::result::Result<T, SubmitError>;
