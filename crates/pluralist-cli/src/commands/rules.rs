//! Implementation of the `pluralist rules` command.

use pluralist::PluralRule;
use serde::Serialize;

use crate::output::table::format_rules_table;

/// Arguments for the rules command.
#[derive(Debug, clap::Args)]
pub struct RulesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single rule.
#[derive(Serialize)]
pub struct RuleInfo {
    pub tag: u32,
    pub name: &'static str,
    pub forms: usize,
    pub categories: &'static [&'static str],
}

impl From<PluralRule> for RuleInfo {
    fn from(rule: PluralRule) -> Self {
        RuleInfo {
            tag: rule.tag(),
            name: rule.name(),
            forms: rule.category_count(),
            categories: rule.categories(),
        }
    }
}

/// Run the rules command.
pub fn run_rules(args: RulesArgs) -> miette::Result<i32> {
    if args.json {
        let rules: Vec<RuleInfo> = PluralRule::ALL.iter().copied().map(RuleInfo::from).collect();
        let json = serde_json::to_string_pretty(&rules)
            .map_err(|e| miette::miette!("Failed to serialize rules: {}", e))?;
        println!("{json}");
    } else {
        println!("{}", format_rules_table(PluralRule::ALL));
    }
    Ok(exitcode::OK)
}
