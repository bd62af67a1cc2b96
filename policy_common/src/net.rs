//! Endpoint constants and URL helpers for the policy backend.

/// Base origin used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Scheme label prefixed to the token in the `Authorization` header.
pub const DEFAULT_AUTH_SCHEME: &str = "Bearer";

/// POST, unauthenticated: asks the backend to issue a one-time passcode.
pub const REQUEST_OTP_PATH: &str = "/auth/request-otp";
/// POST, unauthenticated: exchanges phone number and passcode for a token.
pub const VERIFY_OTP_PATH: &str = "/auth/verify-otp";
/// GET, authorized: full holdings payload for the logged-in user.
pub const DETAILS_PATH: &str = "/api/details";

/// Joins a base origin and an absolute path like "http://host:port/path".
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Normalize a user-provided base URL: trims whitespace, stray quotes and trailing slashes.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim()
        .trim_matches('"')
        .trim()
        .trim_end_matches('/')
        .to_string()
}
