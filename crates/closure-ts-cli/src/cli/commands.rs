//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Parser limits shared by every command.
fn with_limit_args(cmd: Command) -> Command {
    cmd.arg(recursion_limit_arg()).arg(fuel_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("closure-ts")
        .about("Translate Closure Compiler type annotations into TypeScript types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(type_command())
        .subcommand(param_command())
        .subcommand(ast_command())
}

/// Convert type annotations (`@type`, `@return`).
pub fn type_command() -> Command {
    let cmd = Command::new("type")
        .about("Convert type annotations")
        .override_usage(
            "\
  closure-ts type <ANNOTATION>...
  closure-ts type -",
        )
        .after_help(
            r#"EXAMPLES:
  closure-ts type '?Array.<string>'            # nullable array of strings
  closure-ts type Object '!Object'             # several at once
  closure-ts type --format json 'function(number): boolean'
  cat annotations.txt | closure-ts type -      # one annotation per line"#,
        )
        .arg(annotations_arg())
        .arg(format_arg())
        .arg(strict_arg())
        .arg(color_arg());

    with_limit_args(cmd)
}

/// Convert parameter annotations (`@param`).
pub fn param_command() -> Command {
    let cmd = Command::new("param")
        .about("Convert parameter annotations, reporting the optional marker")
        .override_usage(
            "\
  closure-ts param <ANNOTATION>...
  closure-ts param -",
        )
        .after_help(
            r#"EXAMPLES:
  closure-ts param 'number='                   # optional number
  closure-ts param --format json 'Array='"#,
        )
        .arg(annotations_arg())
        .arg(format_arg())
        .arg(strict_arg())
        .arg(color_arg());

    with_limit_args(cmd)
}

/// Show the parsed annotation.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the parsed annotation")
        .after_help(
            r#"EXAMPLES:
  closure-ts ast 'function(this:Foo, string=): void'
  closure-ts ast --param 'number='
  closure-ts ast --spans '?Array.<string>'"#,
        )
        .arg(annotation_arg())
        .arg(param_arg())
        .arg(spans_arg())
        .arg(color_arg());

    with_limit_args(cmd)
}
