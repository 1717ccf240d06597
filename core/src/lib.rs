//! Core types and validation for declarative command-line schemas.
//!
//! This crate defines the data model shared by the CLargs workspace:
//!
//! - [`Schema`] / [`OptionSpec`] / [`OptionKind`] — an ordered, immutable
//!   declaration of the options a program accepts, with typed constraints
//!   (numeric bounds, one-of choice sets, optional string values).
//! - [`FlagValue`] — a typed, explicitly present-or-absent option value.
//! - [`Args`] — the parse result: one value slot per declared option plus
//!   the bare positional values.
//!
//! Validation ([`validate_options`]) catches structural errors in a schema
//! declaration, such as duplicate names or duplicate short aliases, before
//! any parsing happens.
//!
//! The parsing engine itself lives in the `clargs-parser` crate; this crate
//! has no parsing behavior.
//!
//! # Example
//!
//! ```
//! use clargs_core::*;
//!
//! let schema = Schema::new(vec![
//!     OptionSpec::help(),
//!     OptionSpec::boolean("verbose", "enable verbose output").with_short('v'),
//!     OptionSpec::integer("randomvalue", "supply a random value", -1, 6),
//!     OptionSpec::one_of("rouletteColor", "select a roulette color", ["red", "black"]),
//! ])
//! .unwrap();
//!
//! assert_eq!(schema.len(), 4);
//! let (slot, spec) = schema.find("randomvalue").unwrap();
//! assert_eq!(slot, 2);
//! assert_eq!(spec.kind.int_bounds(), Some((-1, 6)));
//! ```

mod types;
mod validate;
mod value;

pub use types::{OptionKind, OptionSpec, Schema};
pub use validate::{ValidationError, validate_options};
pub use value::{Args, FlagOption, FlagValue};
