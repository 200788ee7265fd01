//! Multi-language catalog management.
//!
//! The Localizer holds one [`Catalog`] per language, tracks the current
//! language and pluralizes keys through the current language's catalog.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::{debug, warn};

use crate::catalog::error::{CatalogError, CatalogWarning, LoadError};
use crate::catalog::resource::Catalog;
use crate::parser::ParseError;
use crate::selector::{DEFAULT_SEPARATOR, LocaleNumerals, NumeralFormatter, Pluralizer};

/// User-facing management of per-language `.strings` catalogs.
///
/// Each catalog declares its own plural rule; the Localizer never derives a
/// rule from the language code. Missing catalogs, keys and rules are errors,
/// never papered over with another language's text.
///
/// # Example
///
/// ```
/// use pluralist::Localizer;
///
/// let mut localizer = Localizer::builder().language("ru").build();
/// localizer.load_strings_str("ru", r#"
///     "PLURAL_FORM_RULE" = "7";
///     "files" = "%@ файл|%@ файла|%@ файлов";
/// "#).unwrap();
///
/// assert_eq!(localizer.pluralize("files", 21).unwrap(), "21 файл");
/// assert_eq!(localizer.pluralize("files", 24).unwrap(), "24 файла");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Localizer {
    /// Current language code (e.g., "en", "ru").
    #[builder(default = "en".to_string())]
    language: String,

    /// Separator between forms in plural entries.
    #[builder(default = DEFAULT_SEPARATOR.to_string())]
    separator: String,

    /// Render counts with the current language's numerals.
    #[builder(default)]
    localize_numerals: bool,

    /// Per-language catalogs.
    #[builder(skip)]
    catalogs: HashMap<String, Catalog>,

    /// File paths for reload support. Only populated for file-loaded catalogs.
    #[builder(skip)]
    loaded_paths: HashMap<String, PathBuf>,
}

impl Default for Localizer {
    fn default() -> Self {
        Localizer::builder().build()
    }
}

impl Localizer {
    /// Create a Localizer with default settings (English, `|` separator,
    /// plain numerals).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Localizer for the given language.
    pub fn with_language(language: impl Into<String>) -> Self {
        Localizer::builder().language(language.into()).build()
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Get the current language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the current language.
    ///
    /// The language's catalog must already be loaded before pluralizing.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn localize_numerals(&self) -> bool {
        self.localize_numerals
    }

    pub fn set_localize_numerals(&mut self, localize: bool) {
        self.localize_numerals = localize;
    }

    // =========================================================================
    // Catalog Access
    // =========================================================================

    /// The catalog for a specific language, if loaded.
    pub fn catalog_for(&self, language: &str) -> Option<&Catalog> {
        self.catalogs.get(language)
    }

    /// The catalog for the current language, if loaded.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalogs.get(&self.language)
    }

    /// Languages with a loaded catalog, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Load a `.strings` file for a language.
    ///
    /// Replaces any catalog previously loaded for the language and remembers the
    /// path for [`Localizer::reload_strings`]. Returns the number of entries.
    pub fn load_strings(
        &mut self,
        language: &str,
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let count = self.load_internal(language, &content, Some(path))?;
        self.loaded_paths
            .insert(language.to_string(), path.to_path_buf());
        Ok(count)
    }

    /// Load `.strings` content for a language.
    ///
    /// Catalogs loaded this way cannot be reloaded. On a parse error the
    /// previous catalog, and its reload path, stay in place. Returns the
    /// number of entries.
    pub fn load_strings_str(&mut self, language: &str, content: &str) -> Result<usize, LoadError> {
        let count = self.load_internal(language, content, None)?;
        self.loaded_paths.remove(language);
        Ok(count)
    }

    /// Re-read a language's catalog from the file it was loaded from.
    pub fn reload_strings(&mut self, language: &str) -> Result<usize, LoadError> {
        let path = self
            .loaded_paths
            .get(language)
            .cloned()
            .ok_or_else(|| LoadError::NoPathForReload {
                language: language.to_string(),
            })?;

        self.load_strings(language, path)
    }

    fn load_internal(
        &mut self,
        language: &str,
        content: &str,
        path: Option<&Path>,
    ) -> Result<usize, LoadError> {
        let catalog = Catalog::parse(content).map_err(|e| {
            let default_path = PathBuf::from(format!("<{language}>"));
            let ParseError::Syntax {
                line,
                column,
                message,
            } = e;
            LoadError::Parse {
                path: path.map(Path::to_path_buf).unwrap_or(default_path),
                line,
                column,
                message,
            }
        })?;

        let count = catalog.len();
        debug!(language, entries = count, "loaded catalog");
        self.catalogs.insert(language.to_string(), catalog);
        Ok(count)
    }

    // =========================================================================
    // Pluralization
    // =========================================================================

    /// Select and fill the plural form of `key` for `count` in the current
    /// language.
    pub fn pluralize(&self, key: &str, count: u64) -> Result<String, CatalogError> {
        let catalog = self
            .catalog()
            .ok_or_else(|| CatalogError::LanguageNotLoaded {
                language: self.language.clone(),
            })?;
        catalog.pluralize(key, count, &self.pluralizer())
    }

    /// Validate a loaded language's catalog.
    ///
    /// Returns an empty vector if the language is not loaded.
    ///
    /// # Example
    ///
    /// ```
    /// use pluralist::{CatalogWarning, Localizer};
    ///
    /// let mut localizer = Localizer::new();
    /// localizer.load_strings_str("cs", r#"
    ///     "PLURAL_FORM_RULE" = "czech";
    ///     "files" = "%@ soubor|%@ soubory";
    /// "#).unwrap();
    ///
    /// let warnings = localizer.validate("cs");
    /// assert_eq!(warnings, vec![CatalogWarning::FormCountMismatch {
    ///     key: "files".to_string(),
    ///     expected: 3,
    ///     found: 2,
    /// }]);
    /// ```
    pub fn validate(&self, language: &str) -> Vec<CatalogWarning> {
        self.catalogs
            .get(language)
            .map(|catalog| catalog.validate(&self.separator))
            .unwrap_or_default()
    }

    /// Pluralizer for the current settings.
    ///
    /// When numeral localization is on but no formatter can be built for the
    /// language, the pluralizer gets a formatter that always fails, so selection
    /// reports the problem instead of printing unlocalized digits.
    fn pluralizer(&self) -> Pluralizer {
        let numerals: Option<Box<dyn NumeralFormatter>> = if self.localize_numerals {
            match LocaleNumerals::for_locale(&self.language) {
                Ok(numerals) => Some(Box::new(numerals)),
                Err(err) => {
                    warn!(%err, language = %self.language, "no numeral formatter for language");
                    Some(Box::new(|_: u64| None::<String>))
                }
            }
        } else {
            None
        };

        Pluralizer::builder()
            .separator(self.separator.clone())
            .maybe_numerals(numerals)
            .build()
    }
}
