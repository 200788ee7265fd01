//! Integration tests for the plural rule table.

use pluralist_rules::{CategoryResolution, PluralRule, compute_suggestions, resolve};

fn pair(count: u64, rule: PluralRule) -> (usize, usize) {
    let CategoryResolution { index, count } = resolve(count, rule);
    (index, count)
}

fn indices(rule: PluralRule, counts: &[u64]) -> Vec<usize> {
    counts.iter().map(|&n| resolve(n, rule).index).collect()
}

// =============================================================================
// Table-wide properties
// =============================================================================

#[test]
fn every_rule_reports_its_fixed_category_count() {
    let expected = [
        (PluralRule::Asian, 1),
        (PluralRule::English, 2),
        (PluralRule::French, 2),
        (PluralRule::Latvian, 3),
        (PluralRule::ScottishGaelic, 4),
        (PluralRule::Romanian, 3),
        (PluralRule::Lithuanian, 3),
        (PluralRule::Russian, 3),
        (PluralRule::Czech, 3),
        (PluralRule::Polish, 3),
        (PluralRule::Slovenian, 4),
        (PluralRule::IrishGaelic, 5),
        (PluralRule::Arabic, 6),
        (PluralRule::Maltese, 4),
        (PluralRule::Macedonian, 3),
        (PluralRule::Icelandic, 2),
        (PluralRule::Breton, 6),
        (PluralRule::AsianExtended, 3),
        (PluralRule::FrenchExtended, 3),
        (PluralRule::RussianExtended, 4),
    ];
    assert_eq!(expected.len(), PluralRule::ALL.len());

    for (rule, categories) in expected {
        for n in 0..200 {
            assert_eq!(resolve(n, rule).count, categories, "{rule} at {n}");
        }
        assert_eq!(rule.category_count(), categories, "{rule}");
    }
}

#[test]
fn index_is_always_within_category_count() {
    let large = [1_000, 1_001, 1_000_000, 2_000_000, 1_000_011, u64::MAX];
    for &rule in PluralRule::ALL {
        for n in (0..200).chain(large) {
            let resolution = resolve(n, rule);
            assert!(
                resolution.index < resolution.count,
                "{rule} at {n}: {resolution:?}"
            );
        }
    }
}

#[test]
fn category_labels_match_category_count() {
    for &rule in PluralRule::ALL {
        assert_eq!(rule.categories().len(), rule.category_count(), "{rule}");
    }
    assert!(PluralRule::None.categories().is_empty());
}

#[test]
fn none_rule_is_unusable() {
    for n in [0, 1, 2, 11, 100, 1_000_000] {
        let resolution = resolve(n, PluralRule::None);
        assert_eq!(resolution, CategoryResolution { index: 0, count: 0 });
        assert!(!resolution.is_usable());
    }
    assert!(!PluralRule::None.is_configured());
    assert!(!PluralRule::ALL.contains(&PluralRule::None));
}

#[test]
fn resolve_is_idempotent() {
    for &rule in PluralRule::ALL {
        for n in 0..200 {
            assert_eq!(resolve(n, rule), resolve(n, rule));
        }
    }
}

// =============================================================================
// Boundary cases per rule
// =============================================================================

#[test]
fn english_boundaries() {
    assert_eq!(pair(1, PluralRule::English), (0, 2));
    assert_eq!(pair(0, PluralRule::English), (1, 2));
    assert_eq!(pair(2, PluralRule::English), (1, 2));
}

#[test]
fn french_groups_zero_with_one() {
    assert_eq!(indices(PluralRule::French, &[0, 1, 2, 100]), [0, 0, 1, 1]);
}

#[test]
fn russian_boundaries() {
    assert_eq!(pair(1, PluralRule::Russian), (0, 3));
    assert_eq!(pair(2, PluralRule::Russian), (1, 3));
    assert_eq!(pair(11, PluralRule::Russian), (2, 3));
    assert_eq!(pair(21, PluralRule::Russian), (0, 3));
    assert_eq!(
        indices(PluralRule::Russian, &[0, 4, 5, 12, 14, 22, 25, 111, 112, 122]),
        [2, 1, 2, 2, 2, 1, 2, 2, 2, 1]
    );
}

#[test]
fn arabic_boundaries() {
    assert_eq!(pair(0, PluralRule::Arabic), (5, 6));
    assert_eq!(pair(1, PluralRule::Arabic), (0, 6));
    assert_eq!(pair(2, PluralRule::Arabic), (1, 6));
    assert_eq!(pair(3, PluralRule::Arabic), (2, 6));
    assert_eq!(pair(11, PluralRule::Arabic), (3, 6));
    assert_eq!(pair(100, PluralRule::Arabic), (4, 6));
    assert_eq!(indices(PluralRule::Arabic, &[101, 102, 103, 111, 200]), [4, 4, 2, 3, 4]);
}

#[test]
fn latvian_zero_takes_first_slot() {
    assert_eq!(
        indices(PluralRule::Latvian, &[0, 1, 2, 10, 11, 21, 111]),
        [0, 1, 2, 2, 2, 1, 2]
    );
}

#[test]
fn scottish_gaelic_boundaries() {
    assert_eq!(
        indices(PluralRule::ScottishGaelic, &[0, 1, 2, 3, 11, 12, 13, 19, 20, 21]),
        [3, 0, 1, 2, 0, 1, 2, 2, 3, 3]
    );
}

#[test]
fn romanian_boundaries() {
    assert_eq!(
        indices(PluralRule::Romanian, &[0, 1, 2, 19, 20, 101, 119, 120]),
        [1, 0, 1, 1, 2, 1, 1, 2]
    );
}

#[test]
fn lithuanian_boundaries() {
    assert_eq!(
        indices(PluralRule::Lithuanian, &[0, 1, 2, 9, 10, 11, 12, 21, 22, 30]),
        [1, 0, 2, 2, 1, 1, 1, 0, 2, 1]
    );
}

#[test]
fn czech_uses_exact_counts() {
    assert_eq!(
        indices(PluralRule::Czech, &[0, 1, 2, 4, 5, 22]),
        [2, 0, 1, 1, 2, 2]
    );
}

#[test]
fn polish_only_exact_one_is_singular() {
    assert_eq!(
        indices(PluralRule::Polish, &[0, 1, 2, 5, 12, 21, 22, 25]),
        [2, 0, 1, 2, 2, 2, 1, 2]
    );
}

#[test]
fn slovenian_uses_last_two_digits() {
    assert_eq!(
        indices(PluralRule::Slovenian, &[0, 1, 2, 3, 4, 5, 101, 102, 104, 111]),
        [3, 0, 1, 2, 2, 3, 0, 1, 2, 3]
    );
}

#[test]
fn irish_gaelic_boundaries() {
    assert_eq!(
        indices(PluralRule::IrishGaelic, &[0, 1, 2, 3, 6, 7, 10, 11, 21]),
        [4, 0, 1, 2, 2, 3, 3, 4, 4]
    );
}

#[test]
fn maltese_boundaries() {
    assert_eq!(
        indices(PluralRule::Maltese, &[0, 1, 2, 10, 11, 19, 20, 101, 111, 120]),
        [1, 0, 1, 1, 2, 2, 3, 1, 2, 3]
    );
}

#[test]
fn macedonian_uses_last_digit_only() {
    assert_eq!(
        indices(PluralRule::Macedonian, &[0, 1, 2, 3, 11, 12, 21]),
        [2, 0, 1, 2, 0, 1, 0]
    );
}

#[test]
fn icelandic_boundaries() {
    assert_eq!(
        indices(PluralRule::Icelandic, &[0, 1, 11, 21, 111, 121]),
        [1, 0, 1, 0, 1, 0]
    );
}

#[test]
fn breton_checks_conditions_in_order() {
    assert_eq!(
        indices(
            PluralRule::Breton,
            &[0, 1, 2, 3, 4, 5, 9, 11, 12, 13, 19, 21, 71, 72, 79, 81, 91, 99, 103]
        ),
        [4, 0, 1, 2, 2, 4, 2, 4, 4, 4, 4, 0, 4, 4, 4, 0, 4, 4, 2]
    );
    assert_eq!(pair(1_000_000, PluralRule::Breton), (3, 6));
    assert_eq!(pair(1_000_001, PluralRule::Breton), (0, 6));
}

#[test]
fn extended_rules() {
    assert_eq!(indices(PluralRule::AsianExtended, &[0, 1, 2, 3]), [2, 0, 1, 2]);
    assert_eq!(indices(PluralRule::FrenchExtended, &[0, 1, 2, 3]), [0, 1, 2, 2]);
    assert_eq!(
        indices(PluralRule::RussianExtended, &[0, 1, 2, 5, 11, 21, 22, 101]),
        [3, 0, 2, 3, 3, 1, 2, 1]
    );
}

#[test]
fn asian_always_single_slot() {
    for n in 0..200 {
        assert_eq!(pair(n, PluralRule::Asian), (0, 1));
    }
}

// =============================================================================
// Tags and names
// =============================================================================

#[test]
fn tags_round_trip() {
    for &rule in PluralRule::ALL {
        assert_eq!(PluralRule::from_tag(rule.tag()), Some(rule));
    }
    assert_eq!(PluralRule::from_tag(999_999), Some(PluralRule::None));
    assert_eq!(PluralRule::from_tag(7), Some(PluralRule::Russian));
    assert_eq!(PluralRule::from_tag(107), Some(PluralRule::RussianExtended));
    assert_eq!(PluralRule::from_tag(17), None);
    assert_eq!(PluralRule::from_tag(101), None);
}

#[test]
fn names_round_trip_through_from_str() {
    for &rule in PluralRule::ALL {
        assert_eq!(rule.name().parse::<PluralRule>(), Ok(rule));
        assert_eq!(rule.to_string().parse::<PluralRule>(), Ok(rule));
    }
    assert_eq!("none".parse::<PluralRule>(), Ok(PluralRule::None));
}

#[test]
fn from_str_accepts_tags_and_casings() {
    assert_eq!("7".parse::<PluralRule>(), Ok(PluralRule::Russian));
    assert_eq!(" 12 ".parse::<PluralRule>(), Ok(PluralRule::Arabic));
    assert_eq!(
        "ScottishGaelic".parse::<PluralRule>(),
        Ok(PluralRule::ScottishGaelic)
    );
    assert_eq!(
        "irish_gaelic".parse::<PluralRule>(),
        Ok(PluralRule::IrishGaelic)
    );
    assert_eq!(
        "RUSSIAN-EXTENDED".parse::<PluralRule>(),
        Ok(PluralRule::RussianExtended)
    );
}

#[test]
fn from_str_rejects_unknown_tag_without_suggestions() {
    let err = "42".parse::<PluralRule>().unwrap_err();
    assert_eq!(err.input, "42");
    assert!(err.suggestions.is_empty());
}

#[test]
fn from_str_suggests_close_names() {
    let err = "polsh".parse::<PluralRule>().unwrap_err();
    assert_eq!(err.suggestions.first().map(String::as_str), Some("polish"));
    assert!(err.to_string().contains("did you mean"));

    let err = "klingon".parse::<PluralRule>().unwrap_err();
    assert!(err.suggestions.is_empty());
}

#[test]
fn compute_suggestions_limits_to_three() {
    let available: Vec<String> = (0..10).map(|i| format!("rule{i}")).collect();
    let suggestions = compute_suggestions("rule", &available);
    assert_eq!(suggestions.len(), 3);
}
