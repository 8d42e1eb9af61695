use closure_ts_syntax::parser::DEFAULT_RECURSION_LIMIT;

/// Parser limits applied by a [`Converter`](crate::Converter).
///
/// Exceeding either limit makes the annotation unparseable, which the
/// converter turns into `any` like any other parse failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting depth of type expressions
    pub recursion_limit: Option<u32>,
    /// Maximum number of tokens the parser may consume
    pub exec_fuel: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
            exec_fuel: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }
}
