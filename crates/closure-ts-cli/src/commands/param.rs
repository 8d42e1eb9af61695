//! Convert parameter annotations.

use closure_ts::{Config, Converter, ParamType};

use super::annotation_loader::load_annotations;
use super::output::{self, OutputFormat};

pub struct ParamArgs {
    pub annotations: Vec<String>,
    pub format: OutputFormat,
    pub strict: bool,
    pub color: bool,
    pub config: Config,
}

#[derive(serde::Serialize)]
struct ParamRecord<'a> {
    annotation: &'a str,
    #[serde(flatten)]
    param: &'a ParamType,
}

pub fn run(args: ParamArgs) {
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
        let conversion = converter.convert_param_type_with_diagnostics(annotation);
        output::report_conversion(annotation, &conversion, args.color);
        degraded |= conversion.is_degraded();

        let param = conversion.value();
        match args.format {
            OutputFormat::Dump => {
                if show_headers {
                    println!("# {}", annotation);
                }
                println!("optional: {}", param.optional);
                print!("{}", param.ty.printer().dump());
            }
            OutputFormat::Json => output::print_json(&ParamRecord { annotation, param }),
        }
    }

    if args.strict && degraded {
        std::process::exit(1);
    }
}
