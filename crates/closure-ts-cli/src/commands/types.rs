//! Convert type annotations.

use closure_ts::{Config, Converter, Type};

use super::annotation_loader::load_annotations;
use super::output::{self, OutputFormat};

pub struct TypeArgs {
    pub annotations: Vec<String>,
    pub format: OutputFormat,
    pub strict: bool,
    pub color: bool,
    pub config: Config,
}

#[derive(serde::Serialize)]
struct TypeRecord<'a> {
    annotation: &'a str,
    #[serde(rename = "type")]
    ty: &'a Type,
}

pub fn run(args: TypeArgs) {
    let annotations = match load_annotations(&args.annotations) {
        Ok(annotations) => annotations,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let converter = Converter::with_config(args.config);
    let show_headers = annotations.len() > 1;
    let mut degraded = false;

    for annotation in &annotations {
        let conversion = converter.convert_type_with_diagnostics(annotation);
        output::report_conversion(annotation, &conversion, args.color);
        degraded |= conversion.is_degraded();

        match args.format {
            OutputFormat::Dump => {
                if show_headers {
                    println!("# {}", annotation);
                }
                print!("{}", conversion.value().printer().dump());
            }
            OutputFormat::Json => output::print_json(&TypeRecord {
                annotation,
                ty: conversion.value(),
            }),
        }
    }

    if args.strict && degraded {
        std::process::exit(1);
    }
}
