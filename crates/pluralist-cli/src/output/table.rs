//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use pluralist::PluralRule;

/// One resolved count for the resolution table.
pub struct ResolvedRow {
    /// The count that was resolved.
    pub count: u64,
    /// Zero-based form index.
    pub index: usize,
    /// Category label for the index.
    pub category: String,
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Format the rule catalogue as a table.
pub fn format_rules_table(rules: &[PluralRule]) -> Table {
    let mut table = new_table(vec!["Tag", "Name", "Forms", "Categories"]);
    for rule in rules {
        table.add_row(vec![
            rule.tag().to_string(),
            rule.name().to_string(),
            rule.category_count().to_string(),
            rule.categories().join(", "),
        ]);
    }
    table
}

/// Format count resolutions for a single rule as a table.
pub fn format_resolution_table(rows: &[ResolvedRow]) -> Table {
    let mut table = new_table(vec!["Count", "Index", "Category"]);
    for row in rows {
        table.add_row(vec![
            row.count.to_string(),
            row.index.to_string(),
            row.category.clone(),
        ]);
    }
    table
}
