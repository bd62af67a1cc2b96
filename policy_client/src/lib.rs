//! Policy client library: everything behind the `policy_client` binary.
//!
//! - `args` — CLI flags and the `Settings` derived from them.
//! - `transport` — `Transport` seam and its blocking reqwest implementation.
//! - `session_client` — OTP handshake and authorized holdings fetch.
//! - `worker` — runs network actions off the foreground thread.
//! - `model` — actions, worker events, and console commands.
//! - `app` — login/dashboard state machine.
//! - `view` — user-facing text.
//! - `console` — stdin reader and the foreground loop.
#![warn(missing_docs)]
pub mod app;
pub mod args;
pub mod console;
pub mod model;
pub mod session_client;
pub mod transport;
pub mod view;
pub mod worker;

#[cfg(test)]
pub(crate) mod testing;

pub use app::App;
pub use args::{Args, Settings};
pub use session_client::SessionClient;
pub use transport::{HttpTransport, Transport};
pub use worker::ActionWorker;
