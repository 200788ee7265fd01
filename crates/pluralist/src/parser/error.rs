//! Parse error types for `.strings` resources.

use thiserror::Error;

/// An error that occurred while parsing a `.strings` resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with a 1-based line and column.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}
