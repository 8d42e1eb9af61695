//! Show the parsed annotation.

use closure_ts::Config;
use closure_ts_syntax::Parser;
use closure_ts_syntax::parser::lexer::lex;

use super::annotation_loader::load_annotation;
use super::output::report_parse_error;

pub struct AstArgs {
    pub annotation: String,
    pub param: bool,
    pub spans: bool,
    pub color: bool,
    pub config: Config,
}

pub fn run(args: AstArgs) {
    let annotation = match load_annotation(&args.annotation) {
        Ok(annotation) => annotation,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let parser = Parser::new(&annotation, lex(&annotation))
        .with_recursion_fuel(args.config.recursion_limit)
        .with_exec_fuel(args.config.exec_fuel);
    let parsed = if args.param {
        parser.parse_param_type()
    } else {
        parser.parse_type()
    };

    match parsed {
        Ok(node) => print!("{}", node.printer().with_spans(args.spans).dump()),
        Err(e) => {
            report_parse_error(&annotation, &e, args.color);
            std::process::exit(1);
        }
    }
}
