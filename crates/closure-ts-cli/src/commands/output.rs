//! Output shared by the conversion commands.

use closure_ts::Conversion;
use closure_ts_syntax::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Dump,
    Json,
}

/// Print why an annotation could not be parsed.
pub fn report_parse_error(annotation: &str, err: &Error, color: bool) {
    match err.diagnostics() {
        Some(diagnostics) => eprintln!("{}", diagnostics.render_colored(annotation, color)),
        None => eprintln!("error: {}", err),
    }
}

/// Print everything that made a conversion approximate.
pub fn report_conversion<T>(annotation: &str, conversion: &Conversion<T>, color: bool) {
    if let Some(err) = conversion.parse_error() {
        report_parse_error(annotation, err, color);
    }
    let diagnostics = conversion.diagnostics();
    if !diagnostics.is_empty() {
        eprintln!("{}", diagnostics.render_colored(annotation, color));
    }
}

pub fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
