//! Form template parser using winnow.
//!
//! Form parsing never fails: anything that is not a placeholder or an escaped
//! percent sign is literal text.

use super::ast::{FormTemplate, Segment};
use winnow::combinator::{alt, repeat};
use winnow::prelude::*;
use winnow::token::any;

impl FormTemplate {
    /// Parse a form into literal and placeholder segments.
    ///
    /// ```
    /// use pluralist::FormTemplate;
    ///
    /// let form = FormTemplate::parse("%@ files (100%%)");
    /// assert_eq!(form.placeholder_count(), 1);
    /// assert_eq!(form.render("12"), "12 files (100%)");
    /// ```
    pub fn parse(input: &str) -> FormTemplate {
        let mut remaining = input;
        match template(&mut remaining) {
            Ok(template) if remaining.is_empty() => template,
            _ => FormTemplate {
                segments: vec![Segment::Literal(input.to_string())],
            },
        }
    }
}

fn template(input: &mut &str) -> ModalResult<FormTemplate> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(FormTemplate {
        segments: merge_literals(segments),
    })
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escaped_percent, placeholder, literal_char)).parse_next(input)
}

/// `%%` -> `%`
fn escaped_percent(input: &mut &str) -> ModalResult<Segment> {
    "%%".value(Segment::Literal("%".to_string()))
        .parse_next(input)
}

/// `%@` or `%1$@`
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    alt(("%@", "%1$@")).value(Segment::Count).parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Merge adjacent literal segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            Segment::Count => result.push(Segment::Count),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_only_form_has_no_placeholders() {
        let form = FormTemplate::parse("files");
        assert_eq!(form.segments, vec![Segment::Literal("files".to_string())]);
        assert_eq!(form.render("3"), "files");
    }

    #[test]
    fn positional_placeholder_is_a_count() {
        let form = FormTemplate::parse("%1$@ Dateien");
        assert_eq!(
            form.segments,
            vec![Segment::Count, Segment::Literal(" Dateien".to_string())]
        );
    }

    #[test]
    fn other_directives_stay_literal() {
        let form = FormTemplate::parse("%d%s 50% %2$@");
        assert_eq!(form.placeholder_count(), 0);
        assert_eq!(form.render("7"), "%d%s 50% %2$@");
    }

    #[test]
    fn every_placeholder_is_substituted() {
        let form = FormTemplate::parse("%@ of %@");
        assert_eq!(form.render("2"), "2 of 2");
    }

    #[test]
    fn empty_form_renders_empty() {
        let form = FormTemplate::parse("");
        assert!(form.segments.is_empty());
        assert_eq!(form.render("1"), "");
    }
}
