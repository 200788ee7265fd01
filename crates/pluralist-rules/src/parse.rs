//! Parsing rule identifiers from text.

use std::str::FromStr;

use thiserror::Error;

use crate::PluralRule;

/// Text that names no known plural rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown plural rule '{input}'{}", format_suggestions(suggestions))]
pub struct ParseRuleError {
    pub input: String,
    /// Close rule names, nearest first.
    pub suggestions: Vec<String>,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

impl FromStr for PluralRule {
    type Err = ParseRuleError;

    /// Accepts a numeric tag (`"7"`) or a rule name in any common casing
    /// (`"russian"`, `"ScottishGaelic"`, `"irish_gaelic"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(tag) = trimmed.parse::<u32>() {
            return PluralRule::from_tag(tag).ok_or_else(|| ParseRuleError {
                input: trimmed.to_string(),
                suggestions: Vec::new(),
            });
        }

        let wanted = normalize(trimmed);
        let found = PluralRule::ALL
            .iter()
            .chain([PluralRule::None].iter())
            .copied()
            .find(|rule| normalize(rule.name()) == wanted);

        found.ok_or_else(|| {
            let available: Vec<String> = PluralRule::ALL
                .iter()
                .map(|rule| rule.name().to_string())
                .collect();
            ParseRuleError {
                input: trimmed.to_string(),
                suggestions: compute_suggestions(trimmed, &available),
            }
        })
    }
}

/// Lowercase with word separators removed, so `ScottishGaelic`,
/// `scottish_gaelic` and `scottish-gaelic` compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Up to three entries of `available` within a small edit distance of `key`,
/// closest first.
///
/// The allowed distance is 1 for keys of three characters or fewer and 2
/// otherwise. Comparison ignores case and word separators.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let key = normalize(key);
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };

    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(&key, &normalize(candidate)), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_separators_and_case() {
        assert_eq!(normalize("Scottish_Gaelic"), "scottishgaelic");
        assert_eq!(normalize("russian-extended"), "russianextended");
        assert_eq!(normalize("Irish Gaelic"), "irishgaelic");
    }

    #[test]
    fn suggestion_message_lists_names() {
        let err = ParseRuleError {
            input: "rusian".to_string(),
            suggestions: vec!["russian".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown plural rule 'rusian', did you mean: russian?"
        );
    }

    #[test]
    fn message_without_suggestions() {
        let err = ParseRuleError {
            input: "klingon".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown plural rule 'klingon'");
    }
}
