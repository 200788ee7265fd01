//! Cardinal plural rule table.
//!
//! A [`PluralRule`] names one language family's cardinality grammar. Given a
//! count, [`resolve`] returns which plural-form slot applies together with the
//! number of slots the rule defines. Callers store one translated form per slot,
//! in slot order, and pick the form at the resolved index.
//!
//! This crate holds no state and performs no I/O. It is shared by the form
//! selector in `pluralist` and by the `pluralist` command line tool so the two
//! never disagree on a rule.

mod parse;
mod resolve;

use std::fmt::{Display, Formatter, Result as FmtResult};

pub use parse::{ParseRuleError, compute_suggestions};
pub use resolve::{CategoryResolution, resolve};

/// Supported cardinal plural rules.
///
/// Each variant carries a stable numeric tag (see [`PluralRule::tag`]) that
/// translation resources use to declare their rule. The extended variants
/// split the same language families into more categories than their base rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralRule {
    /// Chinese, Japanese, Korean, Thai, Vietnamese: one form for every count.
    Asian,
    /// English, German, Dutch, Spanish, Italian and most Germanic/Romance languages.
    English,
    /// French, Brazilian Portuguese: 0 and 1 share the singular.
    French,
    Latvian,
    ScottishGaelic,
    Romanian,
    Lithuanian,
    /// Russian, Ukrainian, Belarusian, Serbian, Croatian.
    Russian,
    /// Czech, Slovak.
    Czech,
    Polish,
    Slovenian,
    IrishGaelic,
    Arabic,
    Maltese,
    Macedonian,
    Icelandic,
    Breton,
    /// Asian languages with distinct forms for one and two.
    AsianExtended,
    /// French with a distinct form for zero.
    FrenchExtended,
    /// Russian with a distinct form for exactly one.
    RussianExtended,
    /// No rule configured. Resolves to zero categories and is never usable.
    None,
}

impl PluralRule {
    /// Every configured rule, in tag order. Excludes [`PluralRule::None`].
    pub const ALL: &'static [PluralRule] = &[
        PluralRule::Asian,
        PluralRule::English,
        PluralRule::French,
        PluralRule::Latvian,
        PluralRule::ScottishGaelic,
        PluralRule::Romanian,
        PluralRule::Lithuanian,
        PluralRule::Russian,
        PluralRule::Czech,
        PluralRule::Polish,
        PluralRule::Slovenian,
        PluralRule::IrishGaelic,
        PluralRule::Arabic,
        PluralRule::Maltese,
        PluralRule::Macedonian,
        PluralRule::Icelandic,
        PluralRule::Breton,
        PluralRule::AsianExtended,
        PluralRule::FrenchExtended,
        PluralRule::RussianExtended,
    ];

    /// Number of plural categories this rule defines.
    ///
    /// A forms string used with this rule must contain exactly this many forms.
    /// [`PluralRule::None`] defines zero categories.
    pub const fn category_count(self) -> usize {
        match self {
            PluralRule::Asian => 1,
            PluralRule::English | PluralRule::French | PluralRule::Icelandic => 2,
            PluralRule::Latvian
            | PluralRule::Romanian
            | PluralRule::Lithuanian
            | PluralRule::Russian
            | PluralRule::Czech
            | PluralRule::Polish
            | PluralRule::Macedonian
            | PluralRule::AsianExtended
            | PluralRule::FrenchExtended => 3,
            PluralRule::ScottishGaelic
            | PluralRule::Slovenian
            | PluralRule::Maltese
            | PluralRule::RussianExtended => 4,
            PluralRule::IrishGaelic => 5,
            PluralRule::Arabic | PluralRule::Breton => 6,
            PluralRule::None => 0,
        }
    }

    /// Stable numeric tag used by translation resources.
    pub const fn tag(self) -> u32 {
        match self {
            PluralRule::Asian => 0,
            PluralRule::English => 1,
            PluralRule::French => 2,
            PluralRule::Latvian => 3,
            PluralRule::ScottishGaelic => 4,
            PluralRule::Romanian => 5,
            PluralRule::Lithuanian => 6,
            PluralRule::Russian => 7,
            PluralRule::Czech => 8,
            PluralRule::Polish => 9,
            PluralRule::Slovenian => 10,
            PluralRule::IrishGaelic => 11,
            PluralRule::Arabic => 12,
            PluralRule::Maltese => 13,
            PluralRule::Macedonian => 14,
            PluralRule::Icelandic => 15,
            PluralRule::Breton => 16,
            PluralRule::AsianExtended => 100,
            PluralRule::FrenchExtended => 102,
            PluralRule::RussianExtended => 107,
            PluralRule::None => 999_999,
        }
    }

    /// Look up a rule by its numeric tag.
    pub fn from_tag(tag: u32) -> Option<PluralRule> {
        if tag == PluralRule::None.tag() {
            return Some(PluralRule::None);
        }
        PluralRule::ALL.iter().copied().find(|rule| rule.tag() == tag)
    }

    /// Kebab-case name of the rule, e.g. `"scottish-gaelic"`.
    pub const fn name(self) -> &'static str {
        match self {
            PluralRule::Asian => "asian",
            PluralRule::English => "english",
            PluralRule::French => "french",
            PluralRule::Latvian => "latvian",
            PluralRule::ScottishGaelic => "scottish-gaelic",
            PluralRule::Romanian => "romanian",
            PluralRule::Lithuanian => "lithuanian",
            PluralRule::Russian => "russian",
            PluralRule::Czech => "czech",
            PluralRule::Polish => "polish",
            PluralRule::Slovenian => "slovenian",
            PluralRule::IrishGaelic => "irish-gaelic",
            PluralRule::Arabic => "arabic",
            PluralRule::Maltese => "maltese",
            PluralRule::Macedonian => "macedonian",
            PluralRule::Icelandic => "icelandic",
            PluralRule::Breton => "breton",
            PluralRule::AsianExtended => "asian-extended",
            PluralRule::FrenchExtended => "french-extended",
            PluralRule::RussianExtended => "russian-extended",
            PluralRule::None => "none",
        }
    }

    /// Label for each category slot, indexed like [`CategoryResolution::index`].
    ///
    /// Rules that follow CLDR use CLDR category names. Breton reserves a sixth
    /// slot that no count selects.
    pub const fn categories(self) -> &'static [&'static str] {
        match self {
            PluralRule::Asian => &["other"],
            PluralRule::English | PluralRule::French | PluralRule::Icelandic => {
                &["one", "other"]
            }
            PluralRule::Latvian => &["zero", "one", "other"],
            PluralRule::ScottishGaelic | PluralRule::Slovenian => &["one", "two", "few", "other"],
            PluralRule::Romanian | PluralRule::Czech => &["one", "few", "other"],
            PluralRule::Lithuanian => &["one", "other", "few"],
            PluralRule::Russian | PluralRule::Polish => &["one", "few", "many"],
            PluralRule::IrishGaelic => &["one", "two", "few", "many", "other"],
            PluralRule::Arabic => &["one", "two", "few", "many", "other", "zero"],
            PluralRule::Maltese => &["one", "few", "many", "other"],
            PluralRule::Macedonian | PluralRule::AsianExtended => &["one", "two", "other"],
            PluralRule::Breton => &["one", "two", "few", "many", "other", "reserved"],
            PluralRule::FrenchExtended => &["zero", "one", "other"],
            PluralRule::RussianExtended => &["single", "one", "few", "many"],
            PluralRule::None => &[],
        }
    }

    /// Returns false only for [`PluralRule::None`].
    pub const fn is_configured(self) -> bool {
        !matches!(self, PluralRule::None)
    }
}

impl Display for PluralRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}
