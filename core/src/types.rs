//! Schema type definitions for declarative option parsing.
//!
//! This module defines the data model a caller builds once, before parsing:
//! an ordered [`Schema`] of [`OptionSpec`] entries, each carrying a long
//! name, an optional single-character short alias, and a typed
//! [`OptionKind`] with kind-specific constraints. The types derive [`serde`]
//! traits and round-trip through JSON.

use serde::{Deserialize, Serialize};

use crate::validate::{ValidationError, validate_options};

/// Kind of value an option accepts, with kind-specific constraints.
///
/// Numeric kinds carry inclusive bounds; `min == max == 0` means the option
/// is unbounded (so a range that genuinely spans only zero cannot be
/// expressed, matching the schema convention this crate models).
///
/// # Examples
///
/// ```
/// use clargs_core::OptionKind;
///
/// let kind = OptionKind::Int { min: -1, max: 6 };
/// assert!(kind.takes_value());
/// assert!(!OptionKind::Boolean.takes_value());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OptionKind {
    /// Displays the help menu when encountered.
    Help,
    /// Present-or-absent flag, no value token.
    Boolean,
    /// String value. `optional` marks the value itself as omittable; a
    /// non-empty `one_of` restricts the value to a closed set. The two are
    /// mutually exclusive; with neither, the value is a required free-form
    /// string.
    String {
        optional: bool,
        one_of: Vec<String>,
    },
    /// Signed 32-bit integer with optional inclusive bounds.
    Int { min: i32, max: i32 },
    /// Finite 64-bit float with optional inclusive bounds.
    Double { min: f64, max: f64 },
}

impl OptionKind {
    /// Whether parsing this option may consume a following value token.
    pub fn takes_value(&self) -> bool {
        matches!(
            self,
            OptionKind::String { .. } | OptionKind::Int { .. } | OptionKind::Double { .. }
        )
    }

    /// Declared integer bounds, or `None` for the unbounded `(0, 0)` case.
    pub fn int_bounds(&self) -> Option<(i32, i32)> {
        match self {
            OptionKind::Int { min: 0, max: 0 } => None,
            OptionKind::Int { min, max } => Some((*min, *max)),
            _ => None,
        }
    }

    /// Declared double bounds, or `None` for the unbounded `(0.0, 0.0)` case.
    pub fn double_bounds(&self) -> Option<(f64, f64)> {
        match self {
            OptionKind::Double { min, max } if *min == 0.0 && *max == 0.0 => None,
            OptionKind::Double { min, max } => Some((*min, *max)),
            _ => None,
        }
    }
}

/// A single option declaration within a [`Schema`].
///
/// Use the constructor methods ([`boolean`](OptionSpec::boolean),
/// [`integer`](OptionSpec::integer), [`one_of`](OptionSpec::one_of), ...)
/// and chain [`with_short`](OptionSpec::with_short) to attach a short alias.
///
/// # Examples
///
/// ```
/// use clargs_core::{OptionKind, OptionSpec};
///
/// let verbose = OptionSpec::boolean("verbose", "enable verbose output").with_short('v');
/// assert_eq!(verbose.name, "verbose");
/// assert_eq!(verbose.short, Some('v'));
///
/// let power = OptionSpec::integer("power", "power to raise the result to", 0, 10);
/// assert_eq!(power.kind, OptionKind::Int { min: 0, max: 10 });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Long-form name, matched against `--name` tokens.
    pub name: String,
    /// Optional single-character alias, matched against `-x` tokens.
    pub short: Option<char>,
    /// Value kind and constraints.
    pub kind: OptionKind,
    /// Description shown in the help menu.
    pub description: String,
}

impl OptionSpec {
    fn new(name: &str, kind: OptionKind, description: &str) -> Self {
        Self {
            name: name.to_string(),
            short: None,
            kind,
            description: description.to_string(),
        }
    }

    /// Creates the standard help option (`--help`).
    pub fn help() -> Self {
        Self::new("help", OptionKind::Help, "display the help menu")
    }

    /// Creates a boolean flag (present or not, no value).
    pub fn boolean(name: &str, description: &str) -> Self {
        Self::new(name, OptionKind::Boolean, description)
    }

    /// Creates a required free-form string option.
    pub fn string(name: &str, description: &str) -> Self {
        Self::new(
            name,
            OptionKind::String {
                optional: false,
                one_of: Vec::new(),
            },
            description,
        )
    }

    /// Creates a string option whose value may be omitted.
    pub fn optional_string(name: &str, description: &str) -> Self {
        Self::new(
            name,
            OptionKind::String {
                optional: true,
                one_of: Vec::new(),
            },
            description,
        )
    }

    /// Creates a string option restricted to a closed set of choices.
    ///
    /// # Examples
    ///
    /// ```
    /// use clargs_core::OptionSpec;
    ///
    /// let color = OptionSpec::one_of("rouletteColor", "select a color", ["red", "black"]);
    /// assert_eq!(color.name, "rouletteColor");
    /// ```
    pub fn one_of<I, S>(name: &str, description: &str, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            OptionKind::String {
                optional: false,
                one_of: choices.into_iter().map(Into::into).collect(),
            },
            description,
        )
    }

    /// Creates a signed 32-bit integer option. Pass `(0, 0)` for no bounds.
    pub fn integer(name: &str, description: &str, min: i32, max: i32) -> Self {
        Self::new(name, OptionKind::Int { min, max }, description)
    }

    /// Creates a floating-point option. Pass `(0.0, 0.0)` for no bounds.
    pub fn double(name: &str, description: &str, min: f64, max: f64) -> Self {
        Self::new(name, OptionKind::Double { min, max }, description)
    }

    /// Attaches a single-character short alias.
    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }
}

/// An ordered, immutable sequence of option declarations.
///
/// Built once before parsing and read-only afterwards. Construction
/// validates the schema invariants (unique names, unique non-NUL short
/// aliases, non-empty names, coherent string constraints); violations are
/// programmer errors and surface as a [`ValidationError`] the caller should
/// treat as fatal at startup.
///
/// # Examples
///
/// ```
/// use clargs_core::{OptionSpec, Schema};
///
/// let schema = Schema::new(vec![
///     OptionSpec::help(),
///     OptionSpec::boolean("verbose", "enable verbose output").with_short('v'),
///     OptionSpec::integer("randomvalue", "supply a random value", -1, 6),
/// ])
/// .unwrap();
///
/// assert_eq!(schema.len(), 3);
/// assert!(schema.find("verbose").is_some());
/// assert!(schema.find_short('v').is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    options: Vec<OptionSpec>,
}

impl Schema {
    /// Validates the given options and wraps them into a schema.
    ///
    /// Returns the first invariant violation found, if any.
    pub fn new(options: Vec<OptionSpec>) -> Result<Self, ValidationError> {
        match validate_options(&options).into_iter().next() {
            Some(error) => Err(error),
            None => Ok(Self { options }),
        }
    }

    /// The option declarations, in schema order.
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the schema declares no options at all.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Finds an option by its long-form name.
    ///
    /// Returns the schema position alongside the spec; the position is also
    /// the option's slot index in a parse result.
    pub fn find(&self, name: &str) -> Option<(usize, &OptionSpec)> {
        self.options
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.name == name)
    }

    /// Finds an option by its short alias.
    pub fn find_short(&self, short: char) -> Option<(usize, &OptionSpec)> {
        self.options
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.short == Some(short))
    }

    /// Iterates over the option declarations in schema order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionSpec> {
        self.options.iter()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a OptionSpec;
    type IntoIter = std::slice::Iter<'a, OptionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
