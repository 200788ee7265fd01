//! Rendering counts as numeral strings.
//!
//! Plain rendering is ASCII decimal. Localized rendering goes through a
//! [`NumeralFormatter`], normally [`LocaleNumerals`] backed by ICU decimal
//! formatting data.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use icu_decimal::DecimalFormatter;
use icu_decimal::input::Decimal;
use icu_decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu_locale_core::Locale;
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variables consulted for the system numeral locale, in order.
const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_NUMERIC", "LANG"];

/// Renders a count as a (possibly localized) numeral string.
///
/// Returning `None` signals that the count cannot be rendered; selection then
/// fails instead of falling back to plain digits.
pub trait NumeralFormatter {
    fn format_count(&self, count: u64) -> Option<String>;
}

impl<F> NumeralFormatter for F
where
    F: Fn(u64) -> Option<String>,
{
    fn format_count(&self, count: u64) -> Option<String> {
        self(count)
    }
}

/// ASCII decimal digits, no grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainNumerals;

impl NumeralFormatter for PlainNumerals {
    fn format_count(&self, count: u64) -> Option<String> {
        Some(count.to_string())
    }
}

/// Errors creating a [`LocaleNumerals`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// The locale identifier could not be parsed.
    #[error("invalid locale '{tag}': {message}")]
    InvalidLocale { tag: String, message: String },

    /// No decimal formatting data could be loaded for the locale.
    #[error("no decimal formatting data for '{locale}': {message}")]
    Data { locale: String, message: String },
}

/// Locale-aware numerals: the locale's native digits, without grouping
/// separators.
///
/// ```
/// use pluralist::{LocaleNumerals, NumeralFormatter};
///
/// let numerals = LocaleNumerals::for_locale("bn").unwrap();
/// assert_eq!(numerals.format_count(1500).as_deref(), Some("১৫০০"));
/// ```
pub struct LocaleNumerals {
    locale: Locale,
    formatter: DecimalFormatter,
}

impl LocaleNumerals {
    /// Build a formatter for a locale identifier.
    ///
    /// Accepts BCP 47 (`"de-CH"`) as well as POSIX (`"de_CH.UTF-8"`) forms.
    pub fn for_locale(tag: &str) -> Result<Self, NumeralError> {
        let normalized = posix_to_bcp47(tag);
        let locale: Locale = normalized
            .parse()
            .map_err(|e| NumeralError::InvalidLocale {
                tag: tag.to_string(),
                message: format!("{e}"),
            })?;
        Self::new(locale)
    }

    /// Build a formatter for an already parsed locale.
    pub fn new(locale: Locale) -> Result<Self, NumeralError> {
        let mut options = DecimalFormatterOptions::default();
        options.grouping_strategy = Some(GroupingStrategy::Never);
        let formatter = DecimalFormatter::try_new(locale.clone().into(), options)
            .map_err(|e| NumeralError::Data {
                locale: locale.to_string(),
                message: format!("{e}"),
            })?;
        Ok(Self { locale, formatter })
    }

    /// Build a formatter for the locale named by the environment.
    ///
    /// See [`system_locale_tag`].
    pub fn system() -> Result<Self, NumeralError> {
        Self::for_locale(&system_locale_tag())
    }

    /// The locale this formatter renders for.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl Debug for LocaleNumerals {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LocaleNumerals")
            .field("locale", &self.locale.to_string())
            .finish_non_exhaustive()
    }
}

impl NumeralFormatter for LocaleNumerals {
    fn format_count(&self, count: u64) -> Option<String> {
        let decimal = Decimal::from(count);
        Some(self.formatter.format(&decimal).to_string())
    }
}

thread_local! {
    /// Per-thread system numeral formatter, built on first use.
    static SYSTEM_NUMERALS: Option<LocaleNumerals> = match LocaleNumerals::system() {
        Ok(numerals) => {
            debug!(locale = %numerals.locale(), "initialized system numeral formatter");
            Some(numerals)
        }
        Err(err) => {
            warn!(%err, "system numeral formatter unavailable");
            None
        }
    };
}

/// Run `f` with this thread's system numeral formatter, if one could be built.
pub fn with_system_numerals<T>(f: impl FnOnce(Option<&LocaleNumerals>) -> T) -> T {
    SYSTEM_NUMERALS.with(|numerals| f(numerals.as_ref()))
}

/// Locale identifier for system numerals.
///
/// Reads `LC_ALL`, `LC_NUMERIC` and `LANG` in that order, skipping unset or
/// empty values, and converts the first hit from POSIX to BCP 47 form. Falls
/// back to the root locale `"und"`.
pub fn system_locale_tag() -> String {
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
        .map_or_else(|| "und".to_string(), |value| posix_to_bcp47(&value))
}

/// Convert `ll_CC.encoding@modifier` to `ll-CC`. `C` and `POSIX` map to `und`.
fn posix_to_bcp47(tag: &str) -> String {
    let base = tag
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return "und".to_string();
    }
    base.replace('_', "-")
}
