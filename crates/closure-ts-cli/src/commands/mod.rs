pub mod annotation_loader;
pub mod ast;
pub mod output;
pub mod param;
pub mod types;
