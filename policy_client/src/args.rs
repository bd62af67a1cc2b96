//! Command-line arguments for the policy client.
//!
//! This module defines the CLI interface using `clap`. Every flag can also be
//! set through an environment variable. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use policy_common::net::{DEFAULT_AUTH_SCHEME, DEFAULT_BASE_URL, normalize_base_url};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base origin of the policy backend, e.g. http://localhost:8080.
    #[clap(long, env = "POLICY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Scheme label placed before the token in the Authorization header.
    #[clap(long, env = "POLICY_AUTH_SCHEME", default_value = DEFAULT_AUTH_SCHEME)]
    pub auth_scheme: String,

    /// Per-request timeout in seconds. Without it a request waits indefinitely.
    #[clap(long, env = "POLICY_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

/// Runtime settings derived from `Args`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Normalized base origin.
    pub base_url: String,
    /// Authorization scheme label.
    pub auth_scheme: String,
    /// Request timeout, if any.
    pub timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_scheme: DEFAULT_AUTH_SCHEME.to_string(),
            timeout: None,
        }
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        let auth_scheme = match args.auth_scheme.trim() {
            "" => DEFAULT_AUTH_SCHEME.to_string(),
            scheme => scheme.to_string(),
        };
        Self {
            base_url: normalize_base_url(&args.base_url),
            auth_scheme,
            timeout: args.timeout_secs.map(Duration::from_secs),
        }
    }
}
