//! Schema invariant validation.
//!
//! Validates the structural invariants of an option list before it becomes a
//! [`Schema`](crate::Schema): non-empty unique names, unique non-NUL short
//! aliases, and coherent string constraints. These are programmer errors in
//! the schema declaration, not runtime conditions, so callers normally treat
//! a non-empty result as fatal at startup.
//!
//! # Examples
//!
//! ```
//! use clargs_core::{OptionSpec, validate_options};
//!
//! let good = [OptionSpec::boolean("verbose", "verbose output").with_short('v')];
//! assert!(validate_options(&good).is_empty());
//!
//! // Two options sharing a long name
//! let bad = [
//!     OptionSpec::boolean("verbose", "verbose output"),
//!     OptionSpec::string("verbose", "verbosity level"),
//! ];
//! assert!(!validate_options(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::types::{OptionKind, OptionSpec};

/// Schema declaration errors.
///
/// Each variant describes a specific structural problem found during
/// validation. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An option has an empty long-form name.
    #[error("option name cannot be empty")]
    EmptyOptionName,
    /// Two options share the same long-form name.
    #[error("duplicate option name: {0}")]
    DuplicateOption(String),
    /// Two options share the same short alias.
    #[error("duplicate short alias: -{0}")]
    DuplicateShort(char),
    /// A short alias is the NUL character, which is reserved for "absent".
    #[error("short alias for {0} cannot be the NUL character")]
    NulShort(String),
    /// A string option is marked optional and restricted to choices at once.
    #[error("option {0} cannot be both optional and restricted to choices")]
    OptionalWithChoices(String),
}

/// Validates an option list against the schema invariants.
///
/// Returns every violation found, in declaration order. An empty result
/// means the list is a valid schema.
///
/// # Examples
///
/// ```
/// use clargs_core::{OptionSpec, ValidationError, validate_options};
///
/// let options = [
///     OptionSpec::boolean("verbose", "verbose output").with_short('v'),
///     OptionSpec::boolean("version", "print version").with_short('v'),
/// ];
/// let errors = validate_options(&options);
/// assert_eq!(errors, vec![ValidationError::DuplicateShort('v')]);
/// ```
pub fn validate_options(options: &[OptionSpec]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut seen_shorts: HashSet<char> = HashSet::new();

    for spec in options {
        if spec.name.is_empty() {
            errors.push(ValidationError::EmptyOptionName);
            continue;
        }

        if !seen_names.insert(spec.name.as_str()) {
            errors.push(ValidationError::DuplicateOption(spec.name.clone()));
        }

        match spec.short {
            Some('\0') => errors.push(ValidationError::NulShort(spec.name.clone())),
            Some(short) => {
                if !seen_shorts.insert(short) {
                    errors.push(ValidationError::DuplicateShort(short));
                }
            }
            None => {}
        }

        if let OptionKind::String { optional, one_of } = &spec.kind {
            if *optional && !one_of.is_empty() {
                errors.push(ValidationError::OptionalWithChoices(spec.name.clone()));
            }
        }
    }

    errors
}
