//! Closure Compiler type annotations to TypeScript types.
//!
//! Closure's nullability rules are reproduced exactly: named object types are
//! nullable unless marked `!`, the value primitives are not unless marked `?`.
//!
//! # Example
//!
//! ```
//! use closure_ts::{Type, convert_param_type, convert_type};
//!
//! assert_eq!(convert_type("string"), Type::name("string"));
//! assert_eq!(convert_type("Object"), Type::name("Object").or_null());
//!
//! let param = convert_param_type("number=");
//! assert!(param.optional);
//! assert_eq!(param.ty, Type::name("number"));
//! ```
//!
//! Conversion never fails. Use [`Converter::convert_type_with_diagnostics`]
//! to find out whether anything was approximated along the way.

pub mod config;
pub mod convert;
pub mod nullability;
pub mod ts;

#[cfg(test)]
mod convert_tests;
#[cfg(test)]
mod ts_tests;

pub use config::Config;
pub use convert::{Conversion, Converter, ParamType};
pub use ts::{FunctionType, Param, Type, TypePrinter};

/// Convert a type annotation (`@type`, `@return`) with the default limits.
///
/// Unparseable input yields [`Type::Any`].
pub fn convert_type(annotation: &str) -> Type {
    Converter::new().convert_type(annotation)
}

/// Convert a parameter annotation, extracting the trailing `=` optional marker.
///
/// When the annotation cannot be parsed the type is [`Type::Any`] and
/// `optional` falls back to whether the text ends with `=`.
pub fn convert_param_type(annotation: &str) -> ParamType {
    Converter::new().convert_param_type(annotation)
}
