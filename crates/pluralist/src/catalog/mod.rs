//! Translation catalogs.
//!
//! A catalog supplies, per language, the plural rule to use and the delimited
//! forms strings to select from.

mod error;
mod localizer;
mod resource;

pub use error::{CatalogError, CatalogWarning, LoadError};
pub use localizer::Localizer;
pub use resource::{Catalog, PLURAL_RULE_KEY};
