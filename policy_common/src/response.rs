//! Status/body pair produced by every backend call.
//!
//! Older clients passed results around as a single `"<code>::<body>"` string.
//! `RawResponse::decode` reads that textual form, splitting on the first `::`
//! only, so bodies that contain `::` survive intact.
use crate::error::PolicyError;

/// Separator used by the textual encoding.
pub const SEPARATOR: &str = "::";

/// Status code the backend uses to signal success.
pub const STATUS_OK: u16 = 200;

/// One HTTP response, reduced to what callers look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Create a new response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` only for status 200; other 2xx codes count as failures.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Converts the response into its body, or an `HttpFailure` for any non-200 status.
    pub fn into_body(self) -> Result<String, PolicyError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(PolicyError::http(self.status, self.body))
        }
    }

    /// Parse the textual form, splitting on the first `::` only.
    pub fn decode(raw: &str) -> Result<Self, PolicyError> {
        let (code, body) = split_transport(raw)?;
        let status = code
            .parse::<u16>()
            .map_err(|e| PolicyError::Format(format!("invalid status code {:?}: {}", code, e)))?;
        Ok(Self::new(status, body))
    }
}

/// Splits a transport string into exactly two parts at the first `::`.
pub fn split_transport(raw: &str) -> Result<(&str, &str), PolicyError> {
    raw.split_once(SEPARATOR)
        .ok_or_else(|| PolicyError::Format(format!("missing '{}' separator", SEPARATOR)))
}
