//! Parsers for form templates and `.strings` translation resources.

pub mod ast;
pub mod error;
mod strings;
mod template;

pub use ast::{FormTemplate, Segment, StringsEntry};
pub use error::ParseError;
pub use strings::parse_strings;
