//!
//! Common types and helpers shared by the policy client crates.
//!
//! This crate aggregates:
//! - `error` — unified error type `PolicyError` used across the workspace.
//! - `result` — handy `Result<T, PolicyError>` alias.
//! - `net` — backend endpoint constants and URL helpers.
//! - `request` — JSON bodies for the OTP endpoints.
//! - `response` — `RawResponse` status/body pair and its `code::body` encoding.
//! - `token` — access token extraction from the verification response.
//! - `session` — validated phone number and the logged-in `Session`.
//! - `holdings` — policy lookup and pretty-printing over the raw holdings payload.
#![warn(missing_docs)]
pub mod error;
pub mod holdings;
pub mod net;
pub mod request;
pub mod response;
pub mod result;
pub mod session;
pub mod token;

pub use error::PolicyError;
pub use response::RawResponse;
pub use result::Result;
pub use session::{PhoneNumber, Session};
