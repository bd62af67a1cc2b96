//! Error types shared by the policy client crates.
//!
//! The `PolicyError` enum covers every way a user-triggered action can fail:
//! local input validation, non-200 responses, transport faults, a missing token
//! after a successful verification, and a policy that could not be located in
//! the holdings payload. Plumbing failures (I/O, JSON encoding) live
//! in the same enum so that every crate can propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the workspace.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// User input rejected locally before any network call was made.
    #[error("Input validation error: {0}")]
    InputValidation(String),

    /// The backend answered with a status other than 200.
    #[error("HTTP failure {code}: {body}")]
    HttpFailure {
        /// Status code returned by the backend.
        code: u16,
        /// Response body, kept verbatim for display.
        body: String,
    },

    /// Transport-level fault: connection refused, DNS failure, timeout, broken body.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Verification returned 200 but the body carried no `accessToken` field.
    #[error("Server did not return an access token")]
    TokenMissing,

    /// The holdings payload contains no trace of the requested policy.
    #[error("Policy {policy} not found in holdings")]
    NotFound {
        /// Policy identifier as entered by the user.
        policy: String,
        /// The payload that was searched.
        raw: String,
    },

    /// Malformed data, e.g. a transport string without a `::` separator.
    #[error("Format error: {0}")]
    Format(String),

    /// The same action is still running on a worker.
    #[error("{0} is already in progress")]
    Busy(String),

    /// I/O error originating from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl PolicyError {
    /// Builds an `HttpFailure` from a status code and body.
    pub fn http(code: u16, body: impl Into<String>) -> Self {
        PolicyError::HttpFailure {
            code,
            body: body.into(),
        }
    }
}
