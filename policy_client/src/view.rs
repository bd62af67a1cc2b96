//! Text shown to the user for each screen, result and failure.
use chrono::{DateTime, Local};
use policy_common::PolicyError;

use crate::model::action::Action;

/// Rule printed under the holdings greeting.
const RULE: &str = "----------------------------------------------------------------";

/// Fixed total shown on the holdings view; the backend does not provide one.
const SIMULATED_TOTAL: &str = "$450,000";

/// Greeting printed on start-up.
pub fn login_banner(base_url: &str) -> String {
    format!(
        "Secure Client Login ({})\nEnter `otp <phone number>` to request a passcode, then `verify <code>`.",
        base_url
    )
}

/// Command list for the current screen.
pub fn help(logged_in: bool) -> String {
    if logged_in {
        [
            "Dashboard commands:",
            "  holdings          refresh My Holdings & Maturity",
            "  lookup <policy>   Policy Details Lookup",
            "  rates             Rate Comparison",
            "  quit              leave the client",
        ]
        .join("\n")
    } else {
        [
            "Login commands:",
            "  otp <phone>       request a one-time passcode",
            "  verify <code>     verify the passcode and log in",
            "  quit              leave the client",
        ]
        .join("\n")
    }
}

/// Status after the backend accepted the passcode request.
pub fn otp_requested() -> String {
    "Status: OTP requested successfully. Check server console for code.".to_string()
}

/// Printed when the dashboard opens.
pub fn login_succeeded() -> String {
    "Login successful. Policy Management Dashboard".to_string()
}

/// Placeholder while the holdings request runs.
pub fn fetching_holdings() -> String {
    "Fetching secure holdings data...".to_string()
}

/// Placeholder while a lookup runs.
pub fn searching_policy(policy: &str) -> String {
    format!("Searching holdings for policy {}...", policy)
}

/// My Holdings & Maturity view.
pub fn holdings(raw: &str, refreshed_at: DateTime<Local>) -> String {
    format!(
        "Welcome back! Data last refreshed: {}\n{}\nTOTAL ESTIMATED FUTURE VALUE: {} (Simulated Total)\n\nRAW POLICY DETAILS:\n{}",
        refreshed_at.format("%Y-%m-%d %H:%M:%S"),
        RULE,
        SIMULATED_TOTAL,
        raw
    )
}

/// Policy Details Lookup result.
pub fn policy_details(policy: &str, details: &str) -> String {
    format!("--- Details for Policy {} ---\n{}", policy, details)
}

/// Rate Comparison placeholder.
pub fn rates_placeholder() -> String {
    "Compare Interest Rates (FD, RD, Mutual Funds) - Needs logic/data API".to_string()
}

/// Lookup submitted without a policy number.
pub fn missing_policy_number() -> String {
    "Please enter a policy number.".to_string()
}

/// `verify` before a passcode was requested.
pub fn otp_not_requested() -> String {
    "Request an OTP first with `otp <phone number>`.".to_string()
}

/// `otp` after a passcode was already issued.
pub fn otp_already_requested(phone: &str) -> String {
    format!(
        "An OTP was already requested for {}. Enter it with `verify <code>`.",
        phone
    )
}

/// Dashboard command used on the login screen.
pub fn login_required() -> String {
    "Log in first: `otp <phone number>`, then `verify <code>`.".to_string()
}

/// Login command used on the dashboard.
pub fn already_logged_in() -> String {
    "Already logged in. Type `help` for dashboard commands.".to_string()
}

/// Unrecognised verb.
pub fn unknown_command(verb: &str) -> String {
    format!("Unknown command '{}'. Type `help` for a list.", verb)
}

/// Message for a failed action, in the wording of the screen that triggered it.
pub fn failure(action: Action, err: &PolicyError, base_url: &str) -> String {
    match (action, err) {
        (_, PolicyError::Busy(name)) => format!("{} is already in progress.", name),

        (Action::RequestOtp, PolicyError::InputValidation(_)) => {
            "Error: Phone number must be 10 digits.".to_string()
        }
        (Action::RequestOtp, PolicyError::HttpFailure { code, body }) => {
            format!("Error (HTTP {}). Server response:\n{}", code, body)
        }
        (Action::RequestOtp, PolicyError::Connection(_)) => {
            format!("Connection Error. Is the server running at {}?", base_url)
        }

        (Action::VerifyOtp, PolicyError::HttpFailure { code, .. }) => {
            format!("Login Failed. Invalid OTP or error code {}.", code)
        }
        (Action::VerifyOtp, PolicyError::TokenMissing) => {
            "Login Failed. Server did not return a token.".to_string()
        }
        (Action::VerifyOtp, PolicyError::Connection(_)) => {
            "Verification Error. Check connection.".to_string()
        }

        (Action::FetchHoldings, PolicyError::HttpFailure { code, body }) => {
            format!("Error fetching holdings (HTTP {}): {}", code, body)
        }
        (Action::FetchHoldings, PolicyError::Connection(cause)) => {
            format!("Fatal Network Error: {}", cause)
        }

        (Action::LookupPolicy, PolicyError::NotFound { policy, raw }) => format!(
            "Error: Policy number {} not found in user holdings. Raw Data: {}",
            policy, raw
        ),
        (Action::LookupPolicy, PolicyError::HttpFailure { code, body }) => {
            format!("Error retrieving data (HTTP {}): {}", code, body)
        }
        (Action::LookupPolicy, PolicyError::Connection(_)) => {
            "Network Error: Could not connect to the server.".to_string()
        }

        (_, other) => format!("Error: {}", other),
    }
}
