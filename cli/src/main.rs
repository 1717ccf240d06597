//! Arithmetic demo for the clargs crates.
//!
//! Performs an arithmetic operation on two floating-point operands, taken
//! either from `-x`/`-y` flags or from the first two positional arguments.
//! Exercises schema construction, short aliases, one-of choices, bounded
//! numeric options, and a custom help renderer wrapping the default menu.

use std::process::ExitCode;

use clargs_core::{OptionSpec, Schema};
use clargs_parser::{ExitReporter, HelpRenderer, Parser, format_help};

fn build_schema() -> Schema {
    // The declaration is static, so a validation failure here is a
    // programmer error, not a runtime condition.
    Schema::new(vec![
        OptionSpec::boolean("verbose", "enable verbose output").with_short('v'),
        OptionSpec::boolean("round", "round final value before output").with_short('r'),
        OptionSpec::one_of("mode", "operation to perform", ["add", "sub", "mul", "div"]),
        OptionSpec::double("xValue", "first value of operation", 0.0, 0.0).with_short('x'),
        OptionSpec::double("yValue", "second value of operation", 0.0, 0.0).with_short('y'),
        OptionSpec::integer("power", "power to raise the final result to", 0, 10).with_short('p'),
        OptionSpec::help(),
    ])
    .expect("static schema must validate")
}

/// Wraps the aligned menu with usage lines and a trailer.
struct ArithmeticHelp;

impl HelpRenderer for ArithmeticHelp {
    fn render(&mut self, schema: &Schema) -> bool {
        println!("Usage: clargs-demo [options] x y");
        println!("  Or : clargs-demo -x <x> -y <y> [options]");
        println!();
        print!("{}", format_help(schema));
        println!();
        println!("Example program for the clargs crates.");
        println!("Performs arithmetic operations on the provided floating point numbers.");
        true
    }
}

/// Resolves the two operands: flag values win, and positional arguments
/// fill only the slots the flags left unset.
fn resolve_operands(
    x: Option<f64>,
    y: Option<f64>,
    positionals: &[String],
) -> (Option<f64>, Option<f64>) {
    let mut fallbacks = positionals.iter().filter_map(|raw| raw.parse().ok());
    let x = x.or_else(|| fallbacks.next());
    let y = y.or_else(|| fallbacks.next());
    (x, y)
}

fn main() -> ExitCode {
    let schema = build_schema();
    let args =
        Parser::new(&schema).parse_with(std::env::args(), &mut ExitReporter, &mut ArithmeticHelp);

    let (x, y) = resolve_operands(
        args.flag("xValue").as_double(),
        args.flag("yValue").as_double(),
        &args.positionals,
    );
    let (Some(x), Some(y)) = (x, y) else {
        eprintln!("clargs-demo: expected two operands (positional or -x/-y); see --help");
        return ExitCode::FAILURE;
    };

    let verbose = args.flag("verbose").as_bool();
    let mode = args.flag("mode").as_str();
    let mut result = match mode {
        "sub" => x - y,
        "mul" => x * y,
        "div" => x / y,
        // either "add" or unset; both mean add
        _ => x + y,
    };
    if verbose {
        let mode_name = if mode.is_empty() { "add" } else { mode };
        println!("{mode_name}({x}, {y}) = {result}");
    }

    if let Some(power) = args.flag("power").as_int() {
        result = result.powi(power);
        if verbose {
            println!("raised to power {power}: {result}");
        }
    }

    if args.flag("round").as_bool() {
        result = result.round();
        if verbose {
            println!("rounded: {result}");
        }
    }

    println!("{result}");
    ExitCode::SUCCESS
}
