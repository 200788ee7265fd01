//! Miette diagnostic wrapper for `.strings` parse errors.

use miette::{Diagnostic, NamedSource, SourceSpan};
use pluralist::ParseError;
use std::path::Path;
use thiserror::Error;

/// A miette-compatible diagnostic for `.strings` parse errors.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(
    code(pluralist::syntax),
    help("entries look like \"key\" = \"value\";")
)]
pub struct StringsDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl StringsDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let ParseError::Syntax {
            line,
            column,
            message,
        } = err;

        // Line/column count characters; the span needs a byte offset.
        let line_start: usize = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum();
        let column_bytes: usize = content[line_start.min(content.len())..]
            .chars()
            .take(column.saturating_sub(1))
            .map(char::len_utf8)
            .sum();

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = (line_start + column_bytes).min(content.len());

        StringsDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: message.clone(),
        }
    }
}
