//! OTP handshake and authorized data fetch.
//!
//! `SessionClient` performs the three backend calls. Every method blocks until
//! the backend answers, so interactive callers run them on an `ActionWorker`.
//! Nothing is retried: a failure is returned to the caller as-is.
use log::{debug, info, warn};
use policy_common::net::{DETAILS_PATH, REQUEST_OTP_PATH, VERIFY_OTP_PATH};
use policy_common::request::{OtpRequest, VerifyOtpRequest};
use policy_common::token::extract_access_token;
use policy_common::{PhoneNumber, PolicyError, Result, Session};

use crate::transport::Transport;

/// Client for the authentication and holdings endpoints.
pub struct SessionClient<T> {
    transport: T,
}

impl<T: Transport> SessionClient<T> {
    /// Create a new client on top of `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Asks the backend to issue a passcode for `phone_number`.
    ///
    /// The number must be exactly 10 characters; anything else fails with
    /// `InputValidation` without touching the network.
    pub fn request_otp(&self, phone_number: &str) -> Result<PhoneNumber> {
        let phone = PhoneNumber::parse(phone_number)?;
        let body = serde_json::to_string(&OtpRequest::new(&phone))?;

        debug!("Requesting OTP for {}", phone);
        self.transport
            .post_json(REQUEST_OTP_PATH, body)?
            .into_body()?;
        info!("OTP requested for {}", phone);
        Ok(phone)
    }

    /// Exchanges `phone` and `otp` for a session.
    ///
    /// A 200 answer without an `accessToken` field is `TokenMissing`.
    pub fn verify_otp(&self, phone: &PhoneNumber, otp: &str) -> Result<Session> {
        let body = serde_json::to_string(&VerifyOtpRequest::new(phone, otp))?;

        debug!("Verifying OTP for {}", phone);
        let body = self
            .transport
            .post_json(VERIFY_OTP_PATH, body)?
            .into_body()?;

        match extract_access_token(&body) {
            Some(token) => {
                info!("Session opened for {}", phone);
                Ok(Session::new(phone.clone(), token))
            }
            None => {
                warn!("Verification for {} succeeded without a token", phone);
                Err(PolicyError::TokenMissing)
            }
        }
    }

    /// Fetches the holdings payload.
    ///
    /// `authorization` is the complete header value, scheme label included.
    pub fn fetch_authorized_data(&self, authorization: &str) -> Result<String> {
        let body = self
            .transport
            .get_authorized(DETAILS_PATH, authorization)?
            .into_body()?;
        debug!("Fetched {} bytes of holdings data", body.len());
        Ok(body)
    }
}
