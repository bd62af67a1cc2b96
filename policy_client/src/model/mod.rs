//! Data model types used by the console client.
//!
//! This module groups the small types passed between the foreground loop and
//! the workers:
//! - `action` — user-triggered network actions and their outcomes.
//! - `command` — console input parsed into commands.
pub mod action;
pub mod command;
