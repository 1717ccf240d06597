//! The error-reporter contract.
//!
//! Every parse violation is surfaced through a single pluggable
//! [`ErrorReporter`]. The default [`ExitReporter`] prints a diagnostic and
//! terminates the process, making parsing first-error-wins in practice; a
//! non-terminating reporter (such as [`CollectingReporter`]) lets the scan
//! continue, with the offending option slot left unset.

use thiserror::Error;

/// A parse-time validation failure.
///
/// The parser never recovers on its own: each failure is handed to the
/// installed [`ErrorReporter`] along with the offending flag identifier,
/// and the reporter decides whether to terminate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The flag is not declared in the schema.
    #[error("unknown option")]
    UnknownOption,
    /// A flag requiring a value was not followed by one.
    #[error("expected value after flag")]
    MissingValue,
    /// The value is not among the declared choices.
    #[error("invalid option: {0}")]
    InvalidChoice(String),
    /// A numeric value lies outside the declared bounds.
    #[error("value out of range")]
    OutOfRange,
    /// The value could not be parsed, or a float was not finite.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// A grouped short flag referred to a non-boolean option.
    #[error("only boolean options can be grouped")]
    NonBooleanInGroup,
}

/// Receives every validation failure encountered during a parse run.
///
/// Implementations may terminate the process, collect the failures, log
/// them, or raise through their own error-handling mechanism. If `report`
/// returns, the parser continues scanning.
pub trait ErrorReporter {
    /// Called with the offending flag identifier and the failure.
    fn report(&mut self, flag: &str, error: ParseError);
}

/// Default reporter: prints to stderr and exits with failure status.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExitReporter;

impl ErrorReporter for ExitReporter {
    fn report(&mut self, flag: &str, error: ParseError) {
        eprintln!("Argument error: {flag}: {error}");
        std::process::exit(1);
    }
}

/// Reporter that accumulates failures instead of terminating.
///
/// The injectable test double for parse runs: inspect
/// [`errors`](CollectingReporter::errors) after parsing.
///
/// # Examples
///
/// ```
/// use clargs_parser::{CollectingReporter, ErrorReporter, ParseError};
///
/// let mut reporter = CollectingReporter::default();
/// reporter.report("--bogus", ParseError::UnknownOption);
/// assert_eq!(
///     reporter.errors,
///     vec![("--bogus".to_string(), ParseError::UnknownOption)]
/// );
/// ```
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    /// Reported failures, in scan order.
    pub errors: Vec<(String, ParseError)>,
}

impl ErrorReporter for CollectingReporter {
    fn report(&mut self, flag: &str, error: ParseError) {
        self.errors.push((flag.to_string(), error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseError::UnknownOption.to_string(), "unknown option");
        assert_eq!(
            ParseError::MissingValue.to_string(),
            "expected value after flag"
        );
        assert_eq!(
            ParseError::InvalidChoice("green".to_string()).to_string(),
            "invalid option: green"
        );
        assert_eq!(ParseError::OutOfRange.to_string(), "value out of range");
        assert_eq!(
            ParseError::InvalidValue("nan".to_string()).to_string(),
            "invalid value: nan"
        );
    }

    #[test]
    fn test_collecting_reporter_keeps_scan_order() {
        let mut reporter = CollectingReporter::default();
        reporter.report("--first", ParseError::MissingValue);
        reporter.report("--second", ParseError::OutOfRange);
        assert_eq!(reporter.errors.len(), 2);
        assert_eq!(reporter.errors[0].0, "--first");
        assert_eq!(reporter.errors[1].1, ParseError::OutOfRange);
    }
}
