//! Parsed representations of form templates and `.strings` entries.

/// A plural form with count placeholders.
///
/// Placeholders are printf-style object directives: `%@` or the positional
/// `%1$@`. `%%` is a literal percent sign. Any other `%` is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormTemplate {
    pub segments: Vec<Segment>,
}

/// A piece of a form template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output as-is.
    Literal(String),
    /// Replaced by the rendered count.
    Count,
}

impl FormTemplate {
    /// Number of count placeholders in the form.
    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Count))
            .count()
    }

    /// Substitute `numeral` into every placeholder.
    pub fn render(&self, numeral: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Count => out.push_str(numeral),
            }
        }
        out
    }
}

/// One `"key" = "value";` entry of a `.strings` file, escapes resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringsEntry {
    pub key: String,
    pub value: String,
}
