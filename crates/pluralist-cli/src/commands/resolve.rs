//! Implementation of the `pluralist resolve` command.

use std::ops::RangeInclusive;

use pluralist::{resolve, PluralRule};
use serde::Serialize;

use crate::output::table::{format_resolution_table, ResolvedRow};

/// Arguments for the resolve command.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Plural rule by tag or name (e.g. 7, russian, ScottishGaelic)
    #[arg(long, short)]
    pub rule: PluralRule,

    /// Single count to resolve; omit to resolve a range
    pub count: Option<u64>,

    /// First count of the range
    #[arg(long, default_value_t = 0, conflicts_with = "count")]
    pub from: u64,

    /// Last count of the range (inclusive)
    #[arg(long, default_value_t = 20, conflicts_with = "count")]
    pub to: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a resolved count.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Resolution {
    pub count: u64,
    pub index: usize,
    pub category: String,
}

/// Most counts a single range may cover.
const MAX_RANGE_COUNTS: u64 = 10_000;

/// Validate `--from`/`--to` as an inclusive range of at most
/// [`MAX_RANGE_COUNTS`] counts.
fn count_range(from: u64, to: u64) -> miette::Result<RangeInclusive<u64>> {
    if from > to {
        return Err(miette::miette!(
            "Invalid range: --from {} is greater than --to {}",
            from,
            to
        ));
    }
    if to - from >= MAX_RANGE_COUNTS {
        return Err(miette::miette!(
            "Range {}..={} covers more than {} counts",
            from,
            to,
            MAX_RANGE_COUNTS
        ));
    }
    Ok(from..=to)
}

/// Resolve every count in `counts` under `rule`.
fn resolve_counts(rule: PluralRule, counts: impl Iterator<Item = u64>) -> Vec<Resolution> {
    counts
        .map(|count| {
            let resolution = resolve(count, rule);
            let category = rule
                .categories()
                .get(resolution.index)
                .copied()
                .unwrap_or("-");
            Resolution {
                count,
                index: resolution.index,
                category: category.to_string(),
            }
        })
        .collect()
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> miette::Result<i32> {
    if !args.rule.is_configured() {
        eprintln!("error: rule 'none' has no plural categories");
        return Ok(exitcode::DATAERR);
    }
    let counts = match args.count {
        Some(count) => count..=count,
        None => count_range(args.from, args.to)?,
    };
    let resolutions = resolve_counts(args.rule, counts);

    if args.json {
        let json = serde_json::to_string_pretty(&resolutions)
            .map_err(|e| miette::miette!("Failed to serialize resolutions: {}", e))?;
        println!("{json}");
    } else {
        let rows: Vec<ResolvedRow> = resolutions
            .into_iter()
            .map(|r| ResolvedRow {
                count: r.count,
                index: r.index,
                category: r.category,
            })
            .collect();
        println!("{} ({} forms)", args.rule, args.rule.category_count());
        println!("{}", format_resolution_table(&rows));
    }
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_range_with_labels() {
        let resolved = resolve_counts(PluralRule::Russian, 20..=22);
        assert_eq!(
            resolved,
            vec![
                Resolution {
                    count: 20,
                    index: 2,
                    category: "many".to_string()
                },
                Resolution {
                    count: 21,
                    index: 0,
                    category: "one".to_string()
                },
                Resolution {
                    count: 22,
                    index: 1,
                    category: "few".to_string()
                },
            ]
        );
    }

    #[test]
    fn range_is_bounded() {
        assert_eq!(count_range(0, 20).unwrap(), 0..=20);
        assert_eq!(count_range(u64::MAX, u64::MAX).unwrap(), u64::MAX..=u64::MAX);
        assert!(count_range(0, MAX_RANGE_COUNTS - 1).is_ok());
        assert!(count_range(0, MAX_RANGE_COUNTS).is_err());
        assert!(count_range(0, u64::MAX).is_err());
        assert!(count_range(5, 4).is_err());
    }

    #[test]
    fn arabic_zero_uses_last_slot() {
        let resolved = resolve_counts(PluralRule::Arabic, 0..=0);
        assert_eq!(resolved[0].index, 5);
        assert_eq!(resolved[0].category, "zero");
    }
}
