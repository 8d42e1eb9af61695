mod cli;
mod commands;

use cli::{AstParams, ParamParams, TypeParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("type", m)) => {
            let params = TypeParams::from_matches(m);
            commands::types::run(params.into());
        }
        Some(("param", m)) => {
            let params = ParamParams::from_matches(m);
            commands::param::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
