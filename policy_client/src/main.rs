//! Policy Client — a console client for the policy-management backend. It logs
//! in with a one-time passcode sent to a phone number, then shows the user's
//! holdings and searches them by policy number.
//!
//! Usage example (CLI):
//! ```bash
//! policy_client --base-url http://localhost:8080 --timeout-secs 30
//! ```
//!
//! At the `login>` prompt type `otp <phone number>` and then `verify <code>`.
//! The `dashboard>` prompt accepts `holdings`, `lookup <policy>`, `rates`,
//! `help` and `quit`. Logs go to stderr at `warn` level; `RUST_LOG` overrides it.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use crossbeam_channel::unbounded;
use log::info;
use policy_client::console;
use policy_client::{ActionWorker, App, Args, HttpTransport, SessionClient, Settings};
use policy_common::{PolicyError, Result};

fn main() -> Result<()> {
    init_logger();
    let settings = Settings::from(Args::parse());
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down client...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| PolicyError::Format(format!("Error setting Ctrl+C handler: {}", e)))?;
    }

    if settings.timeout.is_none() {
        info!("No request timeout configured; a stalled backend blocks that action until restart.");
    }
    let transport = HttpTransport::new(&settings.base_url, settings.timeout)?;
    info!("Backend: {}", transport.base_url());

    let (event_tx, event_rx) = unbounded();
    let (input_tx, input_rx) = unbounded();
    console::spawn_stdin_reader(input_tx)?;

    let app = App::new(
        Arc::new(SessionClient::new(transport)),
        ActionWorker::new(event_tx),
        settings,
    );
    console::run(app, input_rx, event_rx, shutdown)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
