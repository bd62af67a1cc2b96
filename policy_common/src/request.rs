//! JSON request bodies sent to the authentication endpoints.
//!
//! Field names follow the backend's camelCase convention, so a request for
//! `1234567890` encodes as `{"phoneNumber":"1234567890"}`.
use serde::Serialize;

use crate::session::PhoneNumber;

/// Body of `POST /auth/request-otp`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpRequest<'a> {
    /// Ten-character phone number.
    pub phone_number: &'a str,
}

impl<'a> OtpRequest<'a> {
    /// Creates a new passcode request for `phone`.
    pub fn new(phone: &'a PhoneNumber) -> Self {
        OtpRequest {
            phone_number: phone.as_str(),
        }
    }
}

/// Body of `POST /auth/verify-otp`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest<'a> {
    /// Phone number the passcode was issued for.
    pub phone_number: &'a str,
    /// Passcode as typed by the user.
    pub otp: &'a str,
}

impl<'a> VerifyOtpRequest<'a> {
    /// Creates a verification request pairing `phone` with `otp`.
    pub fn new(phone: &'a PhoneNumber, otp: &'a str) -> Self {
        VerifyOtpRequest {
            phone_number: phone.as_str(),
            otp,
        }
    }
}
