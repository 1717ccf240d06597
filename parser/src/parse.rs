//! The schema-driven parsing engine.
//!
//! A single left-to-right pass over the argument vector. With a schema,
//! long flags resolve by exact name, short flags by alias, and grouped
//! short flags expand to individual boolean options; without one, every
//! `--name` token defines a dynamic string-valued option. Everything else
//! is positional.
//!
//! Validation failures go to the installed [`ErrorReporter`]; when the
//! reporter returns instead of terminating, the offending option slot is
//! left unset and the scan continues.

use clargs_core::{Args, FlagOption, FlagValue, OptionKind, OptionSpec, Schema};
use tracing::debug;

use crate::help::{AlignedHelp, HelpRenderer};
use crate::report::{ErrorReporter, ExitReporter, ParseError};

/// Schema-driven argument parser.
///
/// Holds a reference to the schema (or none, for dynamic parsing) and runs
/// to completion in one synchronous pass. The error and help strategies are
/// passed explicitly into [`parse_with`](Parser::parse_with), so a parser
/// value itself is freely reusable and has no hidden state.
///
/// # Examples
///
/// ```
/// use clargs_core::{OptionSpec, Schema};
/// use clargs_parser::{AlignedHelp, CollectingReporter, Parser};
///
/// let schema = Schema::new(vec![
///     OptionSpec::boolean("verbose", "enable verbose output").with_short('v'),
///     OptionSpec::string("mode", "choose a mode"),
/// ])
/// .unwrap();
///
/// let mut reporter = CollectingReporter::default();
/// let args = Parser::new(&schema).parse_with(
///     ["prog", "-v", "--mode", "fast", "input.txt"],
///     &mut reporter,
///     &mut AlignedHelp,
/// );
///
/// assert!(reporter.errors.is_empty());
/// assert!(args.flag("verbose").as_bool());
/// assert_eq!(args.flag("mode").as_str(), "fast");
/// assert_eq!(args.positionals, vec!["input.txt"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Parser<'s> {
    schema: Option<&'s Schema>,
}

impl<'s> Parser<'s> {
    /// Creates a parser over the given schema.
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema: Some(schema),
        }
    }

    /// Creates a parser with no schema.
    ///
    /// Every `--name` token then defines a dynamic string-valued option,
    /// with no validation; single-dash tokens are positional.
    pub fn schemaless() -> Self {
        Self { schema: None }
    }

    /// Parses with the default strategies: errors exit the process, help is
    /// printed aligned to stdout followed by a successful exit.
    pub fn parse<I, S>(&self, argv: I) -> Args
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parse_with(argv, &mut ExitReporter, &mut AlignedHelp)
    }

    /// Parses with caller-supplied error and help strategies.
    ///
    /// The first element of `argv` is the program path; scanning starts at
    /// the second. The loop consumes the entire vector: its only early
    /// exits are a help renderer requesting termination and whatever the
    /// reporter itself decides to do.
    pub fn parse_with<I, S>(
        &self,
        argv: I,
        reporter: &mut dyn ErrorReporter,
        help: &mut dyn HelpRenderer,
    ) -> Args
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        debug!(
            tokens = argv.len().saturating_sub(1),
            declared = self.schema.map_or(0, Schema::len),
            "parsing argument vector"
        );

        let mut args = Args {
            program: argv.first().cloned().unwrap_or_default(),
            options: match self.schema {
                Some(schema) => schema
                    .iter()
                    .map(|spec| FlagOption {
                        name: spec.name.clone(),
                        value: FlagValue::unset_for(&spec.kind),
                    })
                    .collect(),
                None => Vec::new(),
            },
            positionals: Vec::new(),
        };

        let mut index = 1;
        while index < argv.len() {
            let token = &argv[index];
            match self.schema {
                Some(schema) if token.starts_with("--") => {
                    let name = &token[2..];
                    match schema.find(name) {
                        Some((slot, spec)) => apply_option(
                            schema, slot, spec, &argv, &mut index, &mut args, reporter, help,
                        ),
                        None => report(reporter, token, ParseError::UnknownOption),
                    }
                }
                Some(schema) if token.starts_with('-') && token.chars().count() > 1 => {
                    let shorts: Vec<char> = token.chars().skip(1).collect();
                    if let [short] = shorts[..] {
                        match schema.find_short(short) {
                            Some((slot, spec)) => apply_option(
                                schema, slot, spec, &argv, &mut index, &mut args, reporter, help,
                            ),
                            None => report(reporter, token, ParseError::UnknownOption),
                        }
                    } else {
                        // Grouped shorts: resolve each character on its own and
                        // keep going with the rest of the group on failure.
                        for short in shorts {
                            match schema.find_short(short) {
                                None => report(
                                    reporter,
                                    &format!("-{short}"),
                                    ParseError::UnknownOption,
                                ),
                                Some((slot, spec)) => match spec.kind {
                                    OptionKind::Boolean => {
                                        args.options[slot].value = FlagValue::Bool(true);
                                    }
                                    _ => report(
                                        reporter,
                                        &format!("-{short}"),
                                        ParseError::NonBooleanInGroup,
                                    ),
                                },
                            }
                        }
                    }
                }
                None if token.starts_with("--") => {
                    let name = token[2..].to_string();
                    let value = take_value(&argv, &mut index);
                    debug!(option = %name, has_value = value.is_some(), "dynamic option");
                    args.options.push(FlagOption {
                        name,
                        value: FlagValue::Str(value),
                    });
                }
                _ => args.positionals.push(token.clone()),
            }
            index += 1;
        }

        args
    }
}

/// Dispatches one resolved option: consumes its value token if the kind
/// takes one, validates, and stores the result in the option's slot.
#[allow(clippy::too_many_arguments)]
fn apply_option(
    schema: &Schema,
    slot: usize,
    spec: &OptionSpec,
    argv: &[String],
    index: &mut usize,
    args: &mut Args,
    reporter: &mut dyn ErrorReporter,
    help: &mut dyn HelpRenderer,
) {
    match &spec.kind {
        OptionKind::Help => {
            if help.render(schema) {
                std::process::exit(0);
            }
        }
        OptionKind::Boolean => {
            args.options[slot].value = FlagValue::Bool(true);
        }
        OptionKind::String { optional, one_of } => match take_value(argv, index) {
            None if !*optional => report(reporter, &spec.name, ParseError::MissingValue),
            // An optional flag given without a value stores an empty string:
            // presence becomes observable while the string accessor is
            // unchanged.
            None => args.options[slot].value = FlagValue::Str(Some(String::new())),
            Some(value) => {
                if !one_of.is_empty() && !one_of.contains(&value) {
                    report(reporter, &spec.name, ParseError::InvalidChoice(value));
                } else {
                    args.options[slot].value = FlagValue::Str(Some(value));
                }
            }
        },
        OptionKind::Int { .. } => {
            let Some(raw) = take_value(argv, index) else {
                report(reporter, &spec.name, ParseError::MissingValue);
                return;
            };
            match parse_int(&raw) {
                None => report(reporter, &spec.name, ParseError::InvalidValue(raw)),
                Some(value) => {
                    if let Some((min, max)) = spec.kind.int_bounds() {
                        if value < min || value > max {
                            report(reporter, &spec.name, ParseError::OutOfRange);
                            return;
                        }
                    }
                    args.options[slot].value = FlagValue::Int(Some(value));
                }
            }
        }
        OptionKind::Double { .. } => {
            let Some(raw) = take_value(argv, index) else {
                report(reporter, &spec.name, ParseError::MissingValue);
                return;
            };
            match parse_double(&raw) {
                None => report(reporter, &spec.name, ParseError::InvalidValue(raw)),
                Some(value) => {
                    if let Some((min, max)) = spec.kind.double_bounds() {
                        if value < min || value > max {
                            report(reporter, &spec.name, ParseError::OutOfRange);
                            return;
                        }
                    }
                    args.options[slot].value = FlagValue::Double(Some(value));
                }
            }
        }
    }
}

/// Hands a failure to the installed reporter, with a debug event first so
/// tracing subscribers see the failure even when the reporter terminates.
fn report(reporter: &mut dyn ErrorReporter, flag: &str, error: ParseError) {
    debug!(flag, %error, "parse error");
    reporter.report(flag, error);
}

/// Consumes the next token as the current flag's value.
///
/// The next token qualifies unless it is absent or carries the
/// two-character long-flag prefix. The check is deliberately `--`, not `-`,
/// so a negative number like `-5` passes as a value even though short flags
/// are otherwise accepted.
fn take_value(argv: &[String], index: &mut usize) -> Option<String> {
    let next = argv.get(*index + 1)?;
    if next.starts_with("--") {
        return None;
    }
    *index += 1;
    Some(next.clone())
}

/// Parses a signed 32-bit integer with base auto-detection.
///
/// A leading `-` or `+` sets the sign; the remainder selects the base from
/// its prefix (`0x`/`0X` hex, `0b`/`0B` binary, `0o`/`0O` octal, otherwise
/// decimal). The sign is applied before the 32-bit narrowing, so the whole
/// `i32` range parses, including `-2147483648`. Returns `None` for empty,
/// signed-again, non-digit, or overflowing input.
fn parse_int(raw: &str) -> Option<i32> {
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let (base, digits) = if let Some(d) =
        rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))
    {
        (16, d)
    } else if let Some(d) = rest.strip_prefix("0b").or_else(|| rest.strip_prefix("0B")) {
        (2, d)
    } else if let Some(d) = rest.strip_prefix("0o").or_else(|| rest.strip_prefix("0O")) {
        (8, d)
    } else {
        (10, rest)
    };

    if digits.starts_with('+') || digits.starts_with('-') {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, base).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Parses a finite `f64`; `NaN` and the infinities are rejected.
fn parse_double(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    value.is_finite().then_some(value)
}
