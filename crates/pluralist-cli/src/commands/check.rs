//! Implementation of the `pluralist check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use owo_colors::{OwoColorize, Stream, Style};
use pluralist::{Catalog, CatalogWarning, PluralRule, DEFAULT_SEPARATOR};
use serde::Serialize;
use tracing::debug;

use crate::output::StringsDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.strings)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Separator between forms in plural entries
    #[arg(long, short, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single checked file.
#[derive(Serialize)]
pub struct FileReport {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
    pub entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax_error: Option<String>,
    pub warnings: Vec<CatalogWarning>,
}

impl FileReport {
    fn is_clean(&self) -> bool {
        self.syntax_error.is_none() && self.warnings.is_empty()
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let content = read_to_string(path)
            .map_err(|e| miette::miette!("Cannot read {}: {}", path.display(), e))?;
        reports.push(check_file(path, &content, &args.separator, args.json));
    }

    if args.json {
        let json = serde_json::to_string_pretty(&reports)
            .map_err(|e| miette::miette!("Failed to serialize report: {}", e))?;
        println!("{json}");
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    if reports.iter().all(FileReport::is_clean) {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}

/// Parse and validate one file. Syntax errors are rendered immediately unless
/// JSON output is requested.
fn check_file(path: &Path, content: &str, separator: &str, json: bool) -> FileReport {
    let shown = path.display().to_string();
    match Catalog::parse(content) {
        Ok(catalog) => {
            debug!(path = %shown, entries = catalog.len(), "parsed catalog");
            FileReport {
                path: shown,
                rule: catalog.plural_rule().ok().map(PluralRule::name),
                entries: catalog.len(),
                syntax_error: None,
                warnings: catalog.validate(separator),
            }
        }
        Err(err) => {
            if !json {
                let diagnostic = StringsDiagnostic::from_parse_error(path, content, &err);
                eprintln!("{:?}", miette::Report::new(diagnostic));
            }
            FileReport {
                path: shown,
                rule: None,
                entries: 0,
                syntax_error: Some(err.to_string()),
                warnings: Vec::new(),
            }
        }
    }
}

fn print_report(report: &FileReport) {
    print!("{}", render_report(report));
}

/// Render a report for the terminal. Colors follow `--color` and whether
/// stdout supports them.
fn render_report(report: &FileReport) -> String {
    if report.syntax_error.is_some() {
        return format!(
            "{} {}\n",
            "✗".if_supports_color(Stream::Stdout, |t| t.red()),
            report.path
        );
    }
    if report.warnings.is_empty() {
        return format!(
            "{} {} ({}, {} entries)\n",
            "✓".if_supports_color(Stream::Stdout, |t| t.green()),
            report.path,
            report.rule.unwrap_or("no rule"),
            report.entries
        );
    }
    let label = Style::new().yellow().bold();
    let mut out = format!(
        "{} {}\n",
        "!".if_supports_color(Stream::Stdout, |t| t.yellow()),
        report.path
    );
    for warning in &report.warnings {
        out.push_str(&format!(
            "    {} {warning}\n",
            "warning:".if_supports_color(Stream::Stdout, |t| t.style(label))
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_catalog_has_no_warnings() {
        let report = check_file(
            Path::new("en.strings"),
            r#""PLURAL_FORM_RULE" = "1"; "files" = "%@ file|%@ files";"#,
            "|",
            true,
        );
        assert!(report.is_clean());
        assert_eq!(report.rule, Some("english"));
        assert_eq!(report.entries, 2);
    }

    #[test]
    fn mismatched_entry_is_reported() {
        let report = check_file(
            Path::new("ru.strings"),
            r#""PLURAL_FORM_RULE" = "russian"; "files" = "%@ файл|%@ файлов";"#,
            "|",
            true,
        );
        assert_eq!(
            report.warnings,
            vec![CatalogWarning::FormCountMismatch {
                key: "files".to_string(),
                expected: 3,
                found: 2,
            }]
        );
    }

    #[test]
    fn syntax_error_is_captured() {
        let report = check_file(Path::new("bad.strings"), "\"a\" = \"b\"", "|", true);
        assert!(!report.is_clean());
        assert!(report.syntax_error.unwrap().contains("1:1"));
    }

    #[test]
    fn disabled_colors_emit_no_escape_codes() {
        owo_colors::set_override(false);
        let report = check_file(
            Path::new("ru.strings"),
            r#""PLURAL_FORM_RULE" = "russian"; "files" = "%@ файл|%@ файлов";"#,
            "|",
            true,
        );
        let rendered = render_report(&report);
        owo_colors::unset_override();

        assert!(!rendered.contains('\u{1b}'), "{rendered:?}");
        assert_eq!(
            rendered,
            "! ru.strings\n    warning: 'files' has 2 forms, rule expects 3\n"
        );
    }

    #[test]
    fn diagnostic_points_into_source() {
        let content = "\"a\" = \"b\";\n\"ü\" = \"d\"\n";
        let err = Catalog::parse(content).unwrap_err();
        let diagnostic = StringsDiagnostic::from_parse_error(Path::new("x.strings"), content, &err);
        assert!(diagnostic.to_string().starts_with("syntax error"));
    }
}
