//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction, value_parser};

/// One or more annotations (positional). `-` reads them from stdin.
pub fn annotations_arg() -> Arg {
    Arg::new("annotations")
        .value_name("ANNOTATION")
        .num_args(1..)
        .required(true)
        .help("Closure type annotations, or `-` to read one per line from stdin")
}

/// A single annotation (positional).
pub fn annotation_arg() -> Arg {
    Arg::new("annotation")
        .value_name("ANNOTATION")
        .required(true)
        .help("Closure type annotation, or `-` to read it from stdin")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("dump")
        .value_parser(["dump", "json"])
        .help("Output format")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Fail on approximated conversions (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Exit with an error when any conversion was approximated")
}

/// Use the parameter entry point (--param).
pub fn param_arg() -> Arg {
    Arg::new("param")
        .long("param")
        .action(ArgAction::SetTrue)
        .help("Parse as a parameter annotation (allows `T=` and `...T`)")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Nesting limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting depth of an annotation [default: 256]")
}

/// Parser fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum number of tokens to parse per annotation")
}
