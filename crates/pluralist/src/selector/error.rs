//! Error types for plural form selection.

use thiserror::Error;

/// Why a plural form could not be selected.
///
/// Every variant means the caller must not display the string; no best-effort
/// form is ever substituted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The rule is the `None` sentinel and defines no categories.
    #[error("no plural rule configured")]
    NoRuleConfigured,

    /// The forms string does not hold one form per category of the rule.
    #[error("plural rule expects {expected} forms, got {found}")]
    FormCountMismatch { expected: usize, found: usize },

    /// The resolved category has no form. Unreachable once the form count matches.
    #[error("plural form index {index} out of range for {len} forms")]
    IndexOutOfRange { index: usize, len: usize },

    /// The numeral formatter could not render the count.
    #[error("failed to format {count} as a localized numeral")]
    NumeralFormattingFailed { count: u64 },
}
