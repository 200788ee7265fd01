//! Pluralist CLI entry point.
//!
//! Provides command-line tools for plural rules and `.strings` catalogs:
//! - `pluralist rules` - List the known plural rules
//! - `pluralist resolve` - Show which form a rule picks for counts
//! - `pluralist select` - Select and fill a plural form
//! - `pluralist check` - Validate `.strings` files against their plural rule

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_resolve, run_rules, run_select, CheckArgs, ResolveArgs, RulesArgs, SelectArgs,
};
use tracing_subscriber::EnvFilter;

/// Plural rule and form selection tools.
#[derive(Debug, Parser)]
#[command(name = "pluralist")]
#[command(about = "Plural rule and form selection tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the known plural rules
    Rules(RulesArgs),
    /// Show the category a rule resolves for counts
    Resolve(ResolveArgs),
    /// Select and fill a plural form for a count
    Select(SelectArgs),
    /// Check .strings files against their plural rule
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Route diagnostics to stderr; `RUST_LOG` overrides the default level.
fn setup_logging(verbose: bool, color_when: ColorWhen) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_ansi(!matches!(color_when, ColorWhen::Never))
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose, cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Rules(args) => run_rules(args),
        Commands::Resolve(args) => run_resolve(args),
        Commands::Select(args) => run_select(args),
        Commands::Check(args) => run_check(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pluralist::PluralRule;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_rule_by_name_or_tag() {
        let cli = Cli::parse_from(["pluralist", "resolve", "--rule", "ScottishGaelic", "11"]);
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.rule, PluralRule::ScottishGaelic);
                assert_eq!(args.count, Some(11));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::parse_from(["pluralist", "select", "3", "-r", "7", "-f", "a|b|c"]);
        match cli.command {
            Commands::Select(args) => {
                assert_eq!(args.rule, PluralRule::Russian);
                assert_eq!(args.separator, "|");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_rule_is_rejected() {
        let err = Cli::try_parse_from(["pluralist", "resolve", "--rule", "rusian"]).unwrap_err();
        assert!(err.to_string().contains("russian"));
    }
}
