//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `PolicyError`, so functions can simply return `Result<T>`.
use crate::error::PolicyError;

/// Workspace-wide `Result` alias with `PolicyError` as the default error.
pub type Result<T, E = PolicyError> = std::result::Result<T, E>;
