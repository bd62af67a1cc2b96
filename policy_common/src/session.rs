//! Authenticated session state.
//!
//! A `Session` only exists after a successful OTP verification. It is created
//! once, handed to whoever needs authorized access, and never mutated: there is
//! no renewal or expiry.
use std::fmt;

use crate::error::PolicyError;

/// Required phone number length, counted in characters.
pub const PHONE_NUMBER_LEN: usize = 10;

/// Phone number that passed the length check.
///
/// Only the length is validated; the content is not required to be numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validates `raw` as exactly `PHONE_NUMBER_LEN` characters.
    pub fn parse(raw: &str) -> Result<Self, PolicyError> {
        let len = raw.chars().count();
        if len != PHONE_NUMBER_LEN {
            return Err(PolicyError::InputValidation(format!(
                "phone number must be {} characters, got {}",
                PHONE_NUMBER_LEN, len
            )));
        }
        Ok(PhoneNumber(raw.to_string()))
    }

    /// Borrow the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Logged-in session: phone number plus the bearer token issued for it.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    phone_number: PhoneNumber,
    token: String,
}

impl Session {
    /// Create a new session from a verified phone number and raw token.
    pub fn new(phone_number: PhoneNumber, token: impl Into<String>) -> Self {
        Self {
            phone_number,
            token: token.into(),
        }
    }

    /// Phone number the session was opened for.
    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// Raw token, without any scheme label.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// `Authorization` header value: `"<scheme> <token>"`.
    pub fn authorization(&self, scheme: &str) -> String {
        format!("{} {}", scheme, self.token)
    }
}

// Token stays out of logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("phone_number", &self.phone_number)
            .field("token", &"<redacted>")
            .finish()
    }
}
