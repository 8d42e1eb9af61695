//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use clap::ArgMatches;

use closure_ts::Config;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::output::OutputFormat;
use crate::commands::param::ParamArgs;
use crate::commands::types::TypeArgs;

pub struct TypeParams {
    pub annotations: Vec<String>,
    pub format: OutputFormat,
    pub strict: bool,
    pub color: ColorChoice,
    pub config: Config,
}

impl TypeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            annotations: parse_annotations(m),
            format: parse_format(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
            config: parse_config(m),
        }
    }
}

impl From<TypeParams> for TypeArgs {
    fn from(p: TypeParams) -> Self {
        Self {
            annotations: p.annotations,
            format: p.format,
            strict: p.strict,
            color: p.color.should_colorize(),
            config: p.config,
        }
    }
}

pub struct ParamParams {
    pub annotations: Vec<String>,
    pub format: OutputFormat,
    pub strict: bool,
    pub color: ColorChoice,
    pub config: Config,
}

impl ParamParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            annotations: parse_annotations(m),
            format: parse_format(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
            config: parse_config(m),
        }
    }
}

impl From<ParamParams> for ParamArgs {
    fn from(p: ParamParams) -> Self {
        Self {
            annotations: p.annotations,
            format: p.format,
            strict: p.strict,
            color: p.color.should_colorize(),
            config: p.config,
        }
    }
}

pub struct AstParams {
    pub annotation: String,
    pub param: bool,
    pub spans: bool,
    pub color: ColorChoice,
    pub config: Config,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            annotation: m
                .get_one::<String>("annotation")
                .cloned()
                .unwrap_or_default(),
            param: m.get_flag("param"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
            config: parse_config(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            annotation: p.annotation,
            param: p.param,
            spans: p.spans,
            color: p.color.should_colorize(),
            config: p.config,
        }
    }
}

fn parse_annotations(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("annotations")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Dump,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_config(m: &ArgMatches) -> Config {
    let mut config = Config::default();
    if let Some(limit) = m.get_one::<u32>("recursion_limit") {
        config = config.recursion_limit(Some(*limit));
    }
    config.exec_fuel(m.get_one::<u32>("fuel").copied())
}
