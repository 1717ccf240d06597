//! Schema-driven command-line argument parsing.
//!
//! This crate walks an argument vector once, left to right, against a
//! [`Schema`] declared with `clargs-core`, and produces an [`Args`] holding
//! one typed value slot per declared option plus the bare positional
//! values. It resolves long flags (`--verbose`), short aliases (`-v`), and
//! grouped boolean shorthand (`-vw`), coerces values with numeric base
//! auto-detection and range validation, and renders an aligned help menu
//! derived from the schema at runtime.
//!
//! # Main entry points
//!
//! - [`parse`] — parse with a schema and the default strategies (errors
//!   exit the process, `--help` prints the menu and exits).
//! - [`parse_schemaless`] — parse without a schema; every `--name` token
//!   defines a dynamic string-valued option.
//! - [`Parser::parse_with`] — inject an [`ErrorReporter`] and a
//!   [`HelpRenderer`], for embedders and tests that must not exit.
//!
//! # Example
//!
//! ```
//! use clargs_core::{OptionSpec, Schema};
//! use clargs_parser::{AlignedHelp, CollectingReporter, Parser};
//!
//! let schema = Schema::new(vec![
//!     OptionSpec::help(),
//!     OptionSpec::boolean("verbose", "enable verbose output").with_short('v'),
//!     OptionSpec::integer("randomvalue", "supply a random value", -1, 6),
//!     OptionSpec::one_of("rouletteColor", "select a roulette color", ["red", "black"]),
//! ])
//! .unwrap();
//!
//! let mut reporter = CollectingReporter::default();
//! let args = Parser::new(&schema).parse_with(
//!     ["prog", "-v", "--randomvalue", "0x5", "--rouletteColor", "red", "chips"],
//!     &mut reporter,
//!     &mut AlignedHelp,
//! );
//!
//! assert!(reporter.errors.is_empty());
//! assert!(args.flag("verbose").as_bool());
//! assert_eq!(args.flag("randomvalue").as_int(), Some(5));
//! assert_eq!(args.flag("rouletteColor").as_str(), "red");
//! assert_eq!(args.positionals, vec!["chips"]);
//! ```
//!
//! [`Schema`]: clargs_core::Schema
//! [`Args`]: clargs_core::Args

mod help;
mod parse;
mod report;

pub use help::{AlignedHelp, HelpRenderer, format_help};
pub use parse::Parser;
pub use report::{CollectingReporter, ErrorReporter, ExitReporter, ParseError};

use clargs_core::{Args, Schema};

/// Parses an argument vector against a schema with the default strategies.
///
/// Any validation failure prints a diagnostic to stderr and exits the
/// process with failure status; `--help` prints the aligned menu and exits
/// with success. Use [`Parser::parse_with`] to override either behavior.
pub fn parse<I, S>(argv: I, schema: &Schema) -> Args
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Parser::new(schema).parse(argv)
}

/// Parses an argument vector without a schema.
///
/// Every `--name` token defines a dynamic string-valued option; no
/// validation is performed, so the default strategies never fire.
///
/// # Examples
///
/// ```
/// use clargs_parser::parse_schemaless;
///
/// let args = parse_schemaless(["prog", "--main", "hello", "positional1"]);
/// assert_eq!(args.flag("main").as_str(), "hello");
/// assert_eq!(args.positionals, vec!["positional1"]);
/// ```
pub fn parse_schemaless<I, S>(argv: I) -> Args
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Parser::schemaless().parse(argv)
}
