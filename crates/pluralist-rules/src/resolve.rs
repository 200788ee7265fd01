//! Count to category slot resolution.

use crate::PluralRule;

/// The plural-form slot selected for a count under a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryResolution {
    /// Zero-based slot chosen for the count.
    pub index: usize,
    /// Total number of slots the rule defines.
    pub count: usize,
}

impl CategoryResolution {
    /// False when the rule defines no categories, i.e. no rule was configured.
    pub fn is_usable(&self) -> bool {
        self.count > 0
    }
}

/// Resolve the plural-form slot for `count` under `rule`.
///
/// Never fails. [`PluralRule::None`] resolves to index 0 of 0 categories,
/// which callers must treat as unusable.
///
/// # Examples
///
/// ```
/// use pluralist_rules::{PluralRule, resolve};
///
/// assert_eq!(resolve(1, PluralRule::Russian).index, 0);
/// assert_eq!(resolve(3, PluralRule::Russian).index, 1);
/// assert_eq!(resolve(11, PluralRule::Russian).index, 2);
/// assert_eq!(resolve(21, PluralRule::Russian).count, 3);
/// ```
pub fn resolve(count: u64, rule: PluralRule) -> CategoryResolution {
    CategoryResolution {
        index: category_index(count, rule),
        count: rule.category_count(),
    }
}

fn category_index(n: u64, rule: PluralRule) -> usize {
    match rule {
        PluralRule::Asian | PluralRule::None => 0,
        PluralRule::English => usize::from(n != 1),
        PluralRule::French => usize::from(n > 1),
        PluralRule::Latvian => {
            if ends_in_one(n) {
                1
            } else if n != 0 {
                2
            } else {
                0
            }
        }
        PluralRule::ScottishGaelic => match n {
            1 | 11 => 0,
            2 | 12 => 1,
            1..=19 => 2,
            _ => 3,
        },
        PluralRule::Romanian => {
            if n == 1 {
                0
            } else if n == 0 || (1..20).contains(&(n % 100)) {
                1
            } else {
                2
            }
        }
        PluralRule::Lithuanian => {
            if ends_in_one(n) {
                0
            } else if n % 10 >= 2 && !in_teens(n) {
                2
            } else {
                1
            }
        }
        PluralRule::Russian => {
            if ends_in_one(n) {
                0
            } else if slavic_few(n) {
                1
            } else {
                2
            }
        }
        PluralRule::Czech => match n {
            1 => 0,
            2..=4 => 1,
            _ => 2,
        },
        PluralRule::Polish => {
            if n == 1 {
                0
            } else if slavic_few(n) {
                1
            } else {
                2
            }
        }
        PluralRule::Slovenian => match n % 100 {
            1 => 0,
            2 => 1,
            3 | 4 => 2,
            _ => 3,
        },
        PluralRule::IrishGaelic => match n {
            1 => 0,
            2 => 1,
            3..=6 => 2,
            7..=10 => 3,
            _ => 4,
        },
        // Zero is checked before the exact small counts; it takes the last slot.
        PluralRule::Arabic => match n {
            0 => 5,
            1 => 0,
            2 => 1,
            _ => match n % 100 {
                3..=10 => 2,
                11..=99 => 3,
                _ => 4,
            },
        },
        PluralRule::Maltese => {
            if n == 1 {
                0
            } else if n == 0 || (1..=10).contains(&(n % 100)) {
                1
            } else if (11..20).contains(&(n % 100)) {
                2
            } else {
                3
            }
        }
        PluralRule::Macedonian => match n % 10 {
            1 => 0,
            2 => 1,
            _ => 2,
        },
        PluralRule::Icelandic => usize::from(!ends_in_one(n)),
        PluralRule::Breton => breton_index(n),
        PluralRule::AsianExtended => match n {
            1 => 0,
            2 => 1,
            _ => 2,
        },
        PluralRule::FrenchExtended => match n {
            0 => 0,
            1 => 1,
            _ => 2,
        },
        PluralRule::RussianExtended => {
            if n == 1 {
                0
            } else if ends_in_one(n) {
                1
            } else if slavic_few(n) {
                2
            } else {
                3
            }
        }
    }
}

/// Breton checks its conditions in order; the first match wins.
fn breton_index(n: u64) -> usize {
    let last_two = n % 100;
    let one = n % 10 == 1 && !matches!(last_two, 11 | 71 | 91);
    let two = n % 10 == 2 && !matches!(last_two, 12 | 72 | 92);
    let few = matches!(n % 10, 3 | 4 | 9)
        && !matches!(last_two, 13 | 14 | 19 | 73 | 74 | 79 | 93 | 94 | 99);

    if one {
        0
    } else if two {
        1
    } else if few {
        2
    } else if n != 0 && n % 1_000_000 == 0 {
        3
    } else {
        4
    }
}

/// Last digit 1, except numbers ending in 11.
fn ends_in_one(n: u64) -> bool {
    n % 10 == 1 && n % 100 != 11
}

/// Last two digits in 10..=19.
fn in_teens(n: u64) -> bool {
    (10..20).contains(&(n % 100))
}

/// Last digit 2..=4, except numbers ending in 12..=14.
fn slavic_few(n: u64) -> bool {
    (2..=4).contains(&(n % 10)) && !in_teens(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teens_are_never_slavic_few() {
        for n in [12, 13, 14, 112, 1013] {
            assert!(!slavic_few(n), "{n}");
        }
        for n in [2, 3, 4, 22, 104] {
            assert!(slavic_few(n), "{n}");
        }
    }

    #[test]
    fn breton_million_is_many_but_zero_is_other() {
        assert_eq!(breton_index(1_000_000), 3);
        assert_eq!(breton_index(2_000_000), 3);
        assert_eq!(breton_index(0), 4);
        assert_eq!(breton_index(1_000_001), 0);
    }
}
