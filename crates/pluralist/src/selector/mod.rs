//! Plural form selection.
//!
//! Resolves the count's category under the rule, checks that the forms string
//! holds exactly one form per category, then renders the chosen form with the
//! count substituted.

mod error;
mod numerals;
mod pluralizer;

use pluralist_rules::{CategoryResolution, PluralRule, resolve};
use tracing::{debug, warn};

use crate::parser::FormTemplate;

pub use error::SelectionError;
pub use numerals::{
    LocaleNumerals, NumeralError, NumeralFormatter, PlainNumerals, system_locale_tag,
    with_system_numerals,
};
pub use pluralizer::Pluralizer;

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = "|";

/// Returned by the `*_or_err` helpers in place of any selection error.
pub const ERROR_SENTINEL: &str = "ERR";

/// Select and fill the plural form for `count`.
///
/// With `localize_numerals`, the count is rendered by this thread's system
/// numeral formatter (see [`system_locale_tag`]); if that formatter cannot be
/// built the call fails with [`SelectionError::NumeralFormattingFailed`].
///
/// ```
/// use pluralist::{PluralRule, SelectionError, select};
///
/// let forms = "%@ file|%@ files";
/// assert_eq!(select(1, forms, "|", PluralRule::English, false).unwrap(), "1 file");
/// assert_eq!(select(5, forms, "|", PluralRule::English, false).unwrap(), "5 files");
/// assert_eq!(
///     select(5, forms, "|", PluralRule::Russian, false),
///     Err(SelectionError::FormCountMismatch { expected: 3, found: 2 }),
/// );
/// ```
pub fn select(
    count: u64,
    forms: &str,
    separator: &str,
    rule: PluralRule,
    localize_numerals: bool,
) -> Result<String, SelectionError> {
    if !localize_numerals {
        return select_with(count, forms, separator, rule, None);
    }

    with_system_numerals(|numerals| match numerals {
        Some(numerals) => select_with(count, forms, separator, rule, Some(numerals)),
        None => {
            let unavailable = |_: u64| None::<String>;
            select_with(count, forms, separator, rule, Some(&unavailable))
        }
    })
}

/// Select and fill the plural form for `count` using an explicit numeral
/// formatter. `None` renders plain ASCII digits.
pub fn select_with(
    count: u64,
    forms: &str,
    separator: &str,
    rule: PluralRule,
    numerals: Option<&dyn NumeralFormatter>,
) -> Result<String, SelectionError> {
    let CategoryResolution {
        index,
        count: expected,
    } = resolve(count, rule);
    if expected == 0 {
        warn!(count, "no plural rule is configured");
        return Err(SelectionError::NoRuleConfigured);
    }

    let candidates = split_forms(forms, separator);
    if candidates.len() != expected {
        return Err(SelectionError::FormCountMismatch {
            expected,
            found: candidates.len(),
        });
    }

    let form = candidates
        .get(index)
        .ok_or(SelectionError::IndexOutOfRange {
            index,
            len: candidates.len(),
        })?;

    let numeral = match numerals {
        Some(formatter) => formatter
            .format_count(count)
            .ok_or(SelectionError::NumeralFormattingFailed { count })?,
        None => count.to_string(),
    };

    debug!(count, %rule, index, "selected plural form");
    Ok(FormTemplate::parse(form).render(&numeral))
}

/// Like [`select`], but any error becomes [`ERROR_SENTINEL`].
pub fn select_or_err(
    count: u64,
    forms: &str,
    separator: &str,
    rule: PluralRule,
    localize_numerals: bool,
) -> String {
    select(count, forms, separator, rule, localize_numerals).unwrap_or_else(|err| {
        debug!(%err, count, %rule, "plural selection failed");
        ERROR_SENTINEL.to_string()
    })
}

/// Split a forms string into its ordered forms.
///
/// Empty pieces are dropped, so doubled or trailing separators do not create
/// forms. An empty separator leaves the string whole.
pub fn split_forms<'a>(forms: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return if forms.is_empty() { Vec::new() } else { vec![forms] };
    }
    forms
        .split(separator)
        .filter(|form| !form.is_empty())
        .collect()
}
