//! Console input parsing.
//!
//! A line is a verb followed by an optional argument, e.g. `otp 1234567890`
//! or `lookup 101`. Verbs are case-insensitive.
use std::str::FromStr;

use strum_macros::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Verb {
    Otp,
    Verify,
    Holdings,
    Lookup,
    Rates,
    Help,
    #[strum(serialize = "quit", serialize = "exit")]
    Quit,
}

/// A parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Ask for a passcode to be sent to this phone number.
    RequestOtp(String),
    /// Submit the passcode.
    VerifyOtp(String),
    /// Re-fetch the holdings view.
    Holdings,
    /// Search the holdings for a policy number.
    Lookup(String),
    /// Rate comparison placeholder.
    Rates,
    /// Print the command list.
    Help,
    /// Leave the client.
    Quit,
    /// Blank line.
    Empty,
    /// Anything that did not parse.
    Unknown(String),
}

impl UserCommand {
    /// Parses one line; arguments are trimmed.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return UserCommand::Empty;
        }
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim().to_string()),
            None => (line, String::new()),
        };

        match Verb::from_str(verb) {
            Ok(Verb::Otp) => UserCommand::RequestOtp(arg),
            Ok(Verb::Verify) => UserCommand::VerifyOtp(arg),
            Ok(Verb::Holdings) => UserCommand::Holdings,
            Ok(Verb::Lookup) => UserCommand::Lookup(arg),
            Ok(Verb::Rates) => UserCommand::Rates,
            Ok(Verb::Help) => UserCommand::Help,
            Ok(Verb::Quit) => UserCommand::Quit,
            Err(_) => UserCommand::Unknown(verb.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_verbs_with_arguments() {
        assert_eq!(
            UserCommand::parse("otp 1234567890"),
            UserCommand::RequestOtp("1234567890".to_string())
        );
        assert_eq!(
            UserCommand::parse("  verify   4321  "),
            UserCommand::VerifyOtp("4321".to_string())
        );
        assert_eq!(
            UserCommand::parse("LOOKUP 101"),
            UserCommand::Lookup("101".to_string())
        );
    }

    #[test]
    fn missing_argument_is_empty_string() {
        assert_eq!(UserCommand::parse("lookup"), UserCommand::Lookup(String::new()));
        assert_eq!(UserCommand::parse("otp"), UserCommand::RequestOtp(String::new()));
    }

    #[test]
    fn argument_keeps_inner_spaces() {
        assert_eq!(
            UserCommand::parse("otp 12345 67890"),
            UserCommand::RequestOtp("12345 67890".to_string())
        );
    }

    #[test]
    fn parses_bare_verbs_and_aliases() {
        assert_eq!(UserCommand::parse("holdings"), UserCommand::Holdings);
        assert_eq!(UserCommand::parse("rates"), UserCommand::Rates);
        assert_eq!(UserCommand::parse("Help"), UserCommand::Help);
        assert_eq!(UserCommand::parse("quit"), UserCommand::Quit);
        assert_eq!(UserCommand::parse("exit"), UserCommand::Quit);
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(UserCommand::parse("   "), UserCommand::Empty);
        assert_eq!(
            UserCommand::parse("transfer 5"),
            UserCommand::Unknown("transfer".to_string())
        );
    }
}
