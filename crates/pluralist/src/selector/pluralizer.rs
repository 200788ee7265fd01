//! Reusable selection settings.

use bon::Builder;
use pluralist_rules::PluralRule;

use super::numerals::NumeralFormatter;
use super::{DEFAULT_SEPARATOR, ERROR_SENTINEL, SelectionError, select_with};

/// Separator and numeral settings shared by many selections.
///
/// Without a numeral formatter counts render as plain ASCII digits.
///
/// # Example
///
/// ```
/// use pluralist::{LocaleNumerals, Pluralizer, PluralRule};
///
/// let plain = Pluralizer::builder().separator(";").build();
/// assert_eq!(
///     plain.select(1500, "%@ ফাইল;%@ ফাইল", PluralRule::English).unwrap(),
///     "1500 ফাইল"
/// );
///
/// let bengali = Pluralizer::builder()
///     .separator(";")
///     .numerals(Box::new(LocaleNumerals::for_locale("bn").unwrap()))
///     .build();
/// assert_eq!(
///     bengali.select(1500, "%@ ফাইল;%@ ফাইল", PluralRule::English).unwrap(),
///     "১৫০০ ফাইল"
/// );
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Pluralizer {
    /// Separator between forms.
    #[builder(default = DEFAULT_SEPARATOR.to_string())]
    separator: String,

    /// Formatter for localized numerals.
    numerals: Option<Box<dyn NumeralFormatter>>,
}

impl Default for Pluralizer {
    fn default() -> Self {
        Pluralizer::builder().build()
    }
}

impl Pluralizer {
    /// Create a pluralizer with the default separator and plain numerals.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Whether counts are rendered through a numeral formatter.
    pub fn localizes_numerals(&self) -> bool {
        self.numerals.is_some()
    }

    /// Select and fill the plural form for `count`.
    pub fn select(
        &self,
        count: u64,
        forms: &str,
        rule: PluralRule,
    ) -> Result<String, SelectionError> {
        select_with(count, forms, &self.separator, rule, self.numerals.as_deref())
    }

    /// Like [`Pluralizer::select`], but any error becomes [`ERROR_SENTINEL`].
    pub fn select_or_err(&self, count: u64, forms: &str, rule: PluralRule) -> String {
        self.select(count, forms, rule)
            .unwrap_or_else(|_| ERROR_SENTINEL.to_string())
    }
}
