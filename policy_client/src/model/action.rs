//! Network actions a user can trigger, and what a finished action reports back.
use policy_common::{PhoneNumber, Result, Session};
use strum_macros::{Display, EnumIter};

/// One logical user action backed by a network call.
///
/// At most one instance of each action is in flight at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Action {
    /// `POST /auth/request-otp`.
    #[strum(to_string = "OTP request")]
    RequestOtp,
    /// `POST /auth/verify-otp`.
    #[strum(to_string = "OTP verification")]
    VerifyOtp,
    /// `GET /api/details` for the holdings view.
    #[strum(to_string = "Holdings refresh")]
    FetchHoldings,
    /// `GET /api/details` followed by a client-side policy search.
    #[strum(to_string = "Policy lookup")]
    LookupPolicy,
}

/// Successful result of an action.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The backend accepted the passcode request for this number.
    OtpRequested(PhoneNumber),
    /// Verification succeeded and a session was opened.
    LoggedIn(Session),
    /// Raw holdings payload.
    Holdings(String),
    /// The policy was found; `details` is the pretty-printed payload.
    PolicyFound {
        /// Identifier that was searched for.
        policy: String,
        /// Whole payload, reformatted.
        details: String,
    },
}

/// Message sent from a worker thread back to the foreground loop.
#[derive(Debug)]
pub struct WorkerEvent {
    /// Action that finished.
    pub action: Action,
    /// What it produced.
    pub outcome: Result<Outcome>,
}
