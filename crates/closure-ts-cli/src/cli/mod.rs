mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{AstParams, ParamParams, TypeParams};

/// Color output mode for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Diagnostics go to stderr; results to stdout may be piped freely.
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}
