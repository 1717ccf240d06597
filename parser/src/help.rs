//! Schema-derived help menu rendering.
//!
//! The menu layout is a pure function of the schema: every entry gets a
//! header made of a short-alias marker, the long flag, and a value-type
//! hint, and the description column starts after the widest header. The
//! exact bytes are not a wire format, but the alignment and hint syntax are
//! a semi-stable CLI contract.

use clargs_core::{OptionKind, Schema};

/// Decides how the help menu is displayed.
///
/// Returning `true` tells the parser the process should exit (with success
/// status) after the menu is shown; returning `false` lets an embedder show
/// help without exiting.
pub trait HelpRenderer {
    /// Renders the help menu for the given schema.
    fn render(&mut self, schema: &Schema) -> bool;
}

/// Default renderer: prints the aligned menu to stdout and requests exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlignedHelp;

impl HelpRenderer for AlignedHelp {
    fn render(&mut self, schema: &Schema) -> bool {
        print!("{}", format_help(schema));
        true
    }
}

/// Value-type hint shown next to the flag, if the kind carries one.
fn value_hint(kind: &OptionKind) -> Option<String> {
    match kind {
        OptionKind::Help | OptionKind::Boolean => None,
        OptionKind::String { one_of, .. } if !one_of.is_empty() => {
            Some(format!("({})", one_of.join("/")))
        }
        OptionKind::String { optional: true, .. } => Some("[value]".to_string()),
        OptionKind::String { .. } => Some("(value)".to_string()),
        kind @ OptionKind::Int { .. } => Some(match kind.int_bounds() {
            Some((min, max)) => format!("({min}..{max})"),
            None => "(int)".to_string(),
        }),
        kind @ OptionKind::Double { .. } => Some(match kind.double_bounds() {
            Some((min, max)) => format!("({min}..{max})"),
            None => "(num)".to_string(),
        }),
    }
}

/// Formats the aligned option summary for a schema.
///
/// # Examples
///
/// ```
/// use clargs_core::{OptionSpec, Schema};
/// use clargs_parser::format_help;
///
/// let schema = Schema::new(vec![
///     OptionSpec::boolean("verbose", "enable verbose output").with_short('v'),
///     OptionSpec::one_of("color", "pick a color", ["red", "black"]),
/// ])
/// .unwrap();
///
/// let menu = format_help(&schema);
/// assert!(menu.starts_with("Options:\n"));
/// assert!(menu.contains("-v, --verbose"));
/// assert!(menu.contains("--color (red/black)"));
/// ```
pub fn format_help(schema: &Schema) -> String {
    let headers: Vec<String> = schema
        .iter()
        .map(|spec| {
            let mut header = format!("--{}", spec.name);
            if let Some(hint) = value_hint(&spec.kind) {
                header.push(' ');
                header.push_str(&hint);
            }
            header
        })
        .collect();

    let column = headers.iter().map(|h| h.chars().count()).max().unwrap_or(0);

    let mut out = String::from("Options:\n");
    for (spec, header) in schema.iter().zip(&headers) {
        let marker = match spec.short {
            Some(short) => format!("-{short}, "),
            None => "    ".to_string(),
        };
        out.push_str(&format!(
            "  {marker}{header:<column$}  {}\n",
            spec.description
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clargs_core::OptionSpec;

    fn schema() -> Schema {
        Schema::new(vec![
            OptionSpec::help(),
            OptionSpec::boolean("verbose", "enable verbose output").with_short('v'),
            OptionSpec::integer("randomvalue", "supply a random value", -1, 6),
            OptionSpec::integer("count", "how many times", 0, 0),
            OptionSpec::optional_string("smartMode", "enable smart mode"),
            OptionSpec::string("mode", "choose a mode"),
            OptionSpec::one_of("rouletteColor", "select a roulette color", ["red", "black"]),
            OptionSpec::double("ratio", "scaling ratio", 0.5, 2.0),
            OptionSpec::double("offset", "offset to apply", 0.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_value_hints() {
        let menu = format_help(&schema());
        assert!(menu.contains("--randomvalue (-1..6)"));
        assert!(menu.contains("--count (int)"));
        assert!(menu.contains("--smartMode [value]"));
        assert!(menu.contains("--mode (value)"));
        assert!(menu.contains("--rouletteColor (red/black)"));
        assert!(menu.contains("--ratio (0.5..2)"));
        assert!(menu.contains("--offset (num)"));
    }

    #[test]
    fn test_help_and_boolean_have_no_hint() {
        let menu = format_help(&schema());
        for line in menu.lines() {
            if line.contains("--help") {
                assert!(line.contains("display the help menu"));
                assert!(!line.contains('('));
            }
            if line.contains("--verbose") {
                assert!(line.contains("-v, "));
                assert!(!line.contains('('));
            }
        }
    }

    #[test]
    fn test_descriptions_align_to_one_column() {
        let menu = format_help(&schema());
        let columns: Vec<usize> = menu
            .lines()
            .skip(1)
            .map(|line| {
                let description_start = schema()
                    .iter()
                    .map(|spec| spec.description.clone())
                    .find(|desc| line.ends_with(desc.as_str()))
                    .map(|desc| line.len() - desc.len())
                    .expect("line should end with a known description");
                description_start
            })
            .collect();
        assert!(!columns.is_empty());
        assert!(
            columns.windows(2).all(|pair| pair[0] == pair[1]),
            "descriptions start at differing columns: {columns:?}"
        );
    }

    #[test]
    fn test_missing_short_alias_pads_evenly() {
        let menu = format_help(&schema());
        let verbose = menu.lines().find(|l| l.contains("--verbose")).unwrap();
        let mode = menu.lines().find(|l| l.contains("--mode")).unwrap();
        assert!(verbose.starts_with("  -v, --verbose"));
        assert!(mode.starts_with("      --mode"));
    }
}
