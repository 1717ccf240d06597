//! Parsed flag values and the parse result type.
//!
//! A [`FlagValue`] is a typed, explicitly present-or-absent value slot; an
//! [`Args`] owns one slot per declared option plus the bare positional
//! values. Boolean slots have no separate "absent" state: an unset boolean
//! reads `false` and is indistinguishable from one explicitly left off the
//! command line.

use serde::{Deserialize, Serialize};

use crate::types::OptionKind;

/// A typed option value, absent until the parser stores one.
///
/// The numeric and string variants wrap their payload in `Option` so that
/// "never seen on the command line" is distinguishable from any legitimate
/// user value, including `0`, `0.0`, and the empty string.
///
/// # Examples
///
/// ```
/// use clargs_core::FlagValue;
///
/// let unset = FlagValue::Int(None);
/// assert!(!unset.is_set());
/// assert_eq!(unset.as_int(), None);
///
/// let set = FlagValue::Str(Some("abc".to_string()));
/// assert!(set.is_set());
/// assert_eq!(set.as_str(), "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlagValue {
    /// Boolean flag state. `false` covers both "unset" and "off".
    Bool(bool),
    /// String value, `None` until set.
    Str(Option<String>),
    /// Signed 32-bit integer value, `None` until set.
    Int(Option<i32>),
    /// Floating-point value, `None` until set.
    Double(Option<f64>),
}

impl FlagValue {
    /// The value returned when a queried flag name was never declared.
    pub const ABSENT: FlagValue = FlagValue::Str(None);

    /// The unset slot for an option of the given kind.
    pub fn unset_for(kind: &OptionKind) -> FlagValue {
        match kind {
            OptionKind::Help | OptionKind::Boolean => FlagValue::Bool(false),
            OptionKind::String { .. } => FlagValue::Str(None),
            OptionKind::Int { .. } => FlagValue::Int(None),
            OptionKind::Double { .. } => FlagValue::Double(None),
        }
    }

    /// Whether the parser stored a value in this slot.
    ///
    /// For booleans this is simply the flag state, so an explicit `false`
    /// still reads as unset.
    pub fn is_set(&self) -> bool {
        match self {
            FlagValue::Bool(b) => *b,
            FlagValue::Str(s) => s.is_some(),
            FlagValue::Int(i) => i.is_some(),
            FlagValue::Double(d) => d.is_some(),
        }
    }

    /// Boolean state; `false` for unset slots and non-boolean variants.
    pub fn as_bool(&self) -> bool {
        matches!(self, FlagValue::Bool(true))
    }

    /// String value; the empty string for unset slots and non-string
    /// variants.
    pub fn as_str(&self) -> &str {
        match self {
            FlagValue::Str(Some(s)) => s,
            _ => "",
        }
    }

    /// Integer value, if this is a set integer slot.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            FlagValue::Int(i) => *i,
            _ => None,
        }
    }

    /// Floating-point value, if this is a set double slot.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            FlagValue::Double(d) => *d,
            _ => None,
        }
    }
}

/// A named option slot within an [`Args`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagOption {
    /// Long-form option name.
    pub name: String,
    /// Current value of the slot.
    pub value: FlagValue,
}

/// Result of a parse run.
///
/// Owns one option slot per schema entry, in schema order, each starting
/// unset; parsing without a schema appends string-valued slots dynamically
/// instead. Everything not recognized as a flag lands in `positionals`, in
/// command-line order. Both collections are released together when the
/// `Args` is dropped.
///
/// # Examples
///
/// ```
/// use clargs_core::{Args, FlagOption, FlagValue};
///
/// let args = Args {
///     program: "prog".to_string(),
///     options: vec![FlagOption {
///         name: "mode".to_string(),
///         value: FlagValue::Str(Some("fast".to_string())),
///     }],
///     positionals: vec!["input.txt".to_string()],
/// };
///
/// assert_eq!(args.flag("mode").as_str(), "fast");
/// assert_eq!(args.flag("missing").as_str(), "");
/// assert!(!args.flag("missing").is_set());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Args {
    /// Program path (argv\[0\]), or empty when the vector was empty.
    pub program: String,
    /// Option slots, one per schema entry (or dynamically grown without a
    /// schema).
    pub options: Vec<FlagOption>,
    /// Bare positional values, in order of appearance.
    pub positionals: Vec<String>,
}

impl Args {
    /// Looks up an option slot by long-form name.
    ///
    /// Linear scan over the slots, first match wins. Names that were never
    /// declared (or never appeared, without a schema) yield
    /// [`FlagValue::ABSENT`].
    pub fn flag(&self, name: &str) -> &FlagValue {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
            .unwrap_or(&FlagValue::ABSENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_for_matches_kind() {
        assert_eq!(
            FlagValue::unset_for(&OptionKind::Boolean),
            FlagValue::Bool(false)
        );
        assert_eq!(
            FlagValue::unset_for(&OptionKind::Help),
            FlagValue::Bool(false)
        );
        assert_eq!(
            FlagValue::unset_for(&OptionKind::Int { min: 0, max: 0 }),
            FlagValue::Int(None)
        );
        assert_eq!(
            FlagValue::unset_for(&OptionKind::Double { min: 0.0, max: 0.0 }),
            FlagValue::Double(None)
        );
    }

    #[test]
    fn test_accessors_on_unset_slots() {
        assert!(!FlagValue::Bool(false).is_set());
        assert_eq!(FlagValue::Str(None).as_str(), "");
        assert_eq!(FlagValue::Int(None).as_int(), None);
        assert_eq!(FlagValue::Double(None).as_double(), None);
    }

    #[test]
    fn test_zero_like_values_still_read_as_set() {
        assert!(FlagValue::Int(Some(0)).is_set());
        assert!(FlagValue::Double(Some(0.0)).is_set());
        assert!(FlagValue::Str(Some(String::new())).is_set());
    }

    #[test]
    fn test_flag_lookup_first_match_wins() {
        let args = Args {
            program: String::new(),
            options: vec![
                FlagOption {
                    name: "main".to_string(),
                    value: FlagValue::Str(Some("first".to_string())),
                },
                FlagOption {
                    name: "main".to_string(),
                    value: FlagValue::Str(Some("second".to_string())),
                },
            ],
            positionals: Vec::new(),
        };
        assert_eq!(args.flag("main").as_str(), "first");
    }

    #[test]
    fn test_flag_lookup_absent_name() {
        let args = Args::default();
        assert_eq!(args.flag("anything"), &FlagValue::ABSENT);
        assert!(!args.flag("anything").as_bool());
    }
}
