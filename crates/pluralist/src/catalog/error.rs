//! Error and warning types for translation catalogs.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

use pluralist_rules::ParseRuleError;
use serde::Serialize;
use thiserror::Error;

use crate::selector::SelectionError;

/// Errors that occur while loading `.strings` resources.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a resource file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Attempted to reload a catalog that was loaded from a string.
    #[error("cannot reload '{language}': was loaded from string, not file")]
    NoPathForReload { language: String },
}

/// Errors that occur when pluralizing through a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No catalog has been loaded for the language.
    #[error("no catalog loaded for language '{language}'")]
    LanguageNotLoaded { language: String },

    /// The catalog does not declare its plural rule.
    #[error("catalog has no plural rule entry '{key}'")]
    MissingRule { key: String },

    /// The declared plural rule is not a known rule.
    #[error("invalid plural rule '{value}'")]
    InvalidRule {
        value: String,
        #[source]
        source: ParseRuleError,
    },

    /// The requested key is not in the catalog.
    #[error("no entry for key '{key}'")]
    MissingKey { key: String },

    /// The entry's forms could not be used for the count.
    #[error("cannot pluralize '{key}': {source}")]
    Selection {
        key: String,
        #[source]
        source: SelectionError,
    },
}

/// A problem found by validating a catalog against its plural rule.
///
/// Warnings never prevent loading; they report entries that would fail at
/// selection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogWarning {
    /// The catalog does not declare a plural rule.
    MissingRule { key: String },

    /// The declared plural rule is not a known rule.
    InvalidRule { value: String },

    /// The declared plural rule is the `none` sentinel.
    NoRuleConfigured,

    /// A plural entry holds the wrong number of forms for the rule.
    FormCountMismatch {
        key: String,
        expected: usize,
        found: usize,
    },
}

impl Display for CatalogWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CatalogWarning::MissingRule { key } => {
                write!(f, "missing plural rule entry '{key}'")
            }
            CatalogWarning::InvalidRule { value } => write!(f, "invalid plural rule '{value}'"),
            CatalogWarning::NoRuleConfigured => f.write_str("plural rule is 'none'"),
            CatalogWarning::FormCountMismatch {
                key,
                expected,
                found,
            } => write!(f, "'{key}' has {found} forms, rule expects {expected}"),
        }
    }
}
