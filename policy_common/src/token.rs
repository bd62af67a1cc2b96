//! Access token extraction from the verify-OTP response body.
//!
//! The body is not parsed as JSON. The token is the value of the first
//! `"accessToken":"<value>"` occurrence, matched literally: no whitespace is
//! allowed around the colon and the value must be a non-empty quoted string.
use std::sync::LazyLock;

use regex::Regex;

static ACCESS_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""accessToken":"([^"]+)""#).expect("static pattern is valid"));

/// Returns the first access token found in `body`, if any.
pub fn extract_access_token(body: &str) -> Option<&str> {
    ACCESS_TOKEN_REGEX
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_among_other_fields() {
        let body = r#"{"status":"ok","accessToken":"abc123","expiresIn":3600}"#;
        assert_eq!(extract_access_token(body), Some("abc123"));
    }

    #[test]
    fn first_match_wins() {
        let body = r#"{"accessToken":"first","nested":{"accessToken":"second"}}"#;
        assert_eq!(extract_access_token(body), Some("first"));
    }

    #[test]
    fn missing_field_yields_none() {
        assert_eq!(extract_access_token(r#"{"message":"verified"}"#), None);
        assert_eq!(extract_access_token(""), None);
    }

    #[test]
    fn shape_must_match_literally() {
        // Whitespace after the colon does not match the expected shape.
        assert_eq!(extract_access_token(r#"{"accessToken": "abc"}"#), None);
        // Empty values are treated as absent.
        assert_eq!(extract_access_token(r#"{"accessToken":""}"#), None);
        // Non-string values are not tokens.
        assert_eq!(extract_access_token(r#"{"accessToken":42}"#), None);
    }
}
