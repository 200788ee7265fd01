//! Implementation of the `pluralist select` command.

use pluralist::{select, select_with, LocaleNumerals, PluralRule, DEFAULT_SEPARATOR};
use serde::Serialize;
use tracing::debug;

/// Arguments for the select command.
#[derive(Debug, clap::Args)]
pub struct SelectArgs {
    /// Count to pluralize
    pub count: u64,

    /// Plural rule by tag or name (e.g. 7, russian, ScottishGaelic)
    #[arg(long, short)]
    pub rule: PluralRule,

    /// Forms joined by the separator (e.g. "%@ file|%@ files")
    #[arg(long, short)]
    pub forms: String,

    /// Separator between forms
    #[arg(long, short, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Render the count with the system locale's numerals
    #[arg(long)]
    pub localize: bool,

    /// Render the count with this locale's numerals (e.g. de, bn, ar-EG);
    /// ignored when --localize is given
    #[arg(long, env = "PLURALIST_LOCALE")]
    pub locale: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for select results.
#[derive(Serialize)]
pub struct SelectResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The explicit numeral locale, unless `--localize` asks for the system one.
fn explicit_locale(args: &SelectArgs) -> Option<&str> {
    if args.localize {
        None
    } else {
        args.locale.as_deref()
    }
}

/// Run the select command.
pub fn run_select(args: SelectArgs) -> miette::Result<i32> {
    let result = match explicit_locale(&args) {
        Some(tag) => {
            let numerals = LocaleNumerals::for_locale(tag)
                .map_err(|e| miette::miette!("Cannot localize numerals: {}", e))?;
            debug!(locale = %numerals.locale(), "using explicit numeral locale");
            select_with(
                args.count,
                &args.forms,
                &args.separator,
                args.rule,
                Some(&numerals),
            )
        }
        None => select(
            args.count,
            &args.forms,
            &args.separator,
            args.rule,
            args.localize,
        ),
    };

    match result {
        Ok(text) => {
            if args.json {
                print_json(&SelectResult {
                    result: Some(text),
                    error: None,
                })?;
            } else {
                println!("{text}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                print_json(&SelectResult {
                    result: None,
                    error: Some(e.to_string()),
                })?;
            } else {
                eprintln!("error: {e}");
            }
            Ok(exitcode::DATAERR)
        }
    }
}

fn print_json(output: &SelectResult) -> miette::Result<()> {
    let json = serde_json::to_string(output)
        .map_err(|e| miette::miette!("Failed to serialize result: {}", e))?;
    println!("{json}");
    Ok(())
}
