//! Plural form selection for pre-translated strings.
//!
//! Translations store one form per plural category of their language, joined
//! by a separator (`"%@ file|%@ files"`). Given a count and the language's
//! [`PluralRule`], [`select`] validates the forms, picks the one for the
//! count's category and substitutes the count into its placeholder.
//!
//! ```
//! use pluralist::{PluralRule, select};
//!
//! let forms = "%@ файл|%@ файла|%@ файлов";
//! assert_eq!(select(1, forms, "|", PluralRule::Russian, false).unwrap(), "1 файл");
//! assert_eq!(select(3, forms, "|", PluralRule::Russian, false).unwrap(), "3 файла");
//! assert_eq!(select(11, forms, "|", PluralRule::Russian, false).unwrap(), "11 файлов");
//! ```
//!
//! [`Catalog`] and [`Localizer`] read both the rule and the forms from
//! `.strings` translation resources.

pub mod catalog;
pub mod parser;
pub mod selector;

pub use catalog::{Catalog, CatalogError, CatalogWarning, LoadError, Localizer, PLURAL_RULE_KEY};
pub use parser::{FormTemplate, ParseError};
pub use pluralist_rules::{CategoryResolution, ParseRuleError, PluralRule, resolve};
pub use selector::{
    DEFAULT_SEPARATOR, ERROR_SENTINEL, LocaleNumerals, NumeralError, NumeralFormatter,
    PlainNumerals, Pluralizer, SelectionError, select, select_or_err, select_with, split_forms,
    system_locale_tag, with_system_numerals,
};
