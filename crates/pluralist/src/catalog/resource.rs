//! A single language's translation resource.

use std::collections::BTreeMap;

use pluralist_rules::PluralRule;

use crate::catalog::error::{CatalogError, CatalogWarning};
use crate::parser::{ParseError, StringsEntry, parse_strings};
use crate::selector::{Pluralizer, split_forms};

/// Key under which a catalog declares its plural rule.
///
/// The value is a rule tag (`"7"`) or name (`"russian"`).
pub const PLURAL_RULE_KEY: &str = "PLURAL_FORM_RULE";

/// Key/value translations for one language, parsed from `.strings` content.
///
/// When a key appears more than once the last entry wins.
///
/// # Example
///
/// ```
/// use pluralist::{Catalog, Pluralizer, PluralRule};
///
/// let catalog = Catalog::parse(r#"
///     "PLURAL_FORM_RULE" = "polish";
///     "files" = "%@ plik|%@ pliki|%@ plików";
/// "#).unwrap();
///
/// assert_eq!(catalog.plural_rule().unwrap(), PluralRule::Polish);
/// let pluralizer = Pluralizer::new();
/// assert_eq!(catalog.pluralize("files", 22, &pluralizer).unwrap(), "22 pliki");
/// assert_eq!(catalog.pluralize("files", 25, &pluralizer).unwrap(), "25 plików");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `.strings` content.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        Ok(Self::from_entries(parse_strings(content)?))
    }

    /// Build a catalog from parsed entries.
    pub fn from_entries(entries: impl IntoIterator<Item = StringsEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.key, entry.value))
                .collect(),
        }
    }

    /// Look up the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of entries, including the plural rule entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The plural rule declared under [`PLURAL_RULE_KEY`].
    pub fn plural_rule(&self) -> Result<PluralRule, CatalogError> {
        let value = self.get(PLURAL_RULE_KEY).ok_or_else(|| CatalogError::MissingRule {
            key: PLURAL_RULE_KEY.to_string(),
        })?;
        value.parse().map_err(|source| CatalogError::InvalidRule {
            value: value.to_string(),
            source,
        })
    }

    /// Select and fill the plural form of `key` for `count`, using the
    /// catalog's declared rule.
    pub fn pluralize(
        &self,
        key: &str,
        count: u64,
        pluralizer: &Pluralizer,
    ) -> Result<String, CatalogError> {
        let rule = self.plural_rule()?;
        let forms = self.get(key).ok_or_else(|| CatalogError::MissingKey {
            key: key.to_string(),
        })?;
        pluralizer
            .select(count, forms, rule)
            .map_err(|source| CatalogError::Selection {
                key: key.to_string(),
                source,
            })
    }

    /// Check every plural entry against the declared rule.
    ///
    /// An entry counts as plural when its value contains `separator`. Entries
    /// are reported in key order.
    pub fn validate(&self, separator: &str) -> Vec<CatalogWarning> {
        let rule = match self.plural_rule() {
            Ok(rule) => rule,
            Err(CatalogError::InvalidRule { value, .. }) => {
                return vec![CatalogWarning::InvalidRule { value }];
            }
            Err(_) => {
                return vec![CatalogWarning::MissingRule {
                    key: PLURAL_RULE_KEY.to_string(),
                }];
            }
        };
        if !rule.is_configured() {
            return vec![CatalogWarning::NoRuleConfigured];
        }
        if separator.is_empty() {
            return Vec::new();
        }

        let expected = rule.category_count();
        self.entries
            .iter()
            .filter(|(key, value)| key.as_str() != PLURAL_RULE_KEY && value.contains(separator))
            .filter_map(|(key, value)| {
                let found = split_forms(value, separator).len();
                (found != expected).then(|| CatalogWarning::FormCountMismatch {
                    key: key.clone(),
                    expected,
                    found,
                })
            })
            .collect()
    }
}
