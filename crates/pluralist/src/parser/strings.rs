//! `.strings` translation resource parser.
//!
//! Parses the key/value format used by Apple `Localizable.strings` files:
//!
//! ```text
//! /* Block comment */
//! "PLURAL_FORM_RULE" = "7";
//! // Line comment
//! "files" = "%@ файл|%@ файла|%@ файлов";
//! bare_key = "Keys may be unquoted";
//! ```
//!
//! Quoted strings support `\"`, `\\`, `\'`, `\n`, `\r`, `\t`, `\0` and
//! `\UXXXX` / `\uXXXX` escapes.

use super::ast::StringsEntry;
use super::error::ParseError;
use winnow::combinator::{alt, delimited, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_until, take_while};

/// Parse `.strings` content into entries, in file order.
pub fn parse_strings(input: &str) -> Result<Vec<StringsEntry>, ParseError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut remaining = input;
    match file(&mut remaining) {
        Ok(entries) => {
            if remaining.is_empty() {
                Ok(entries)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "expected `\"key\" = \"value\";`, found '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            })
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

fn file(input: &mut &str) -> ModalResult<Vec<StringsEntry>> {
    skip_ws_and_comments(input)?;
    repeat(0.., terminated(entry, skip_ws_and_comments)).parse_next(input)
}

/// Skip whitespace, line comments and block comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    repeat(
        0..,
        alt((ws_only.void(), line_comment.void(), block_comment.void())),
    )
    .parse_next(input)
}

fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., char::is_whitespace).parse_next(input)
}

/// `// ...` up to the end of the line.
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// `/* ... */`, not nested.
fn block_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited("/*", take_until(0.., "*/"), "*/").parse_next(input)
}

/// `key = "value";`
fn entry(input: &mut &str) -> ModalResult<StringsEntry> {
    let key = alt((quoted_string, bare_key)).parse_next(input)?;
    skip_ws_and_comments(input)?;
    '='.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let value = quoted_string(input)?;
    skip_ws_and_comments(input)?;
    ';'.parse_next(input)?;

    Ok(StringsEntry { key, value })
}

fn bare_key(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
    })
    .map(str::to_string)
    .parse_next(input)
}

fn quoted_string(input: &mut &str) -> ModalResult<String> {
    delimited(
        '"',
        repeat(0.., string_char).fold(String::new, |mut acc, c| {
            acc.push(c);
            acc
        }),
        '"',
    )
    .parse_next(input)
}

fn string_char(input: &mut &str) -> ModalResult<char> {
    alt((escape_sequence, none_of(['"', '\\']))).parse_next(input)
}

fn escape_sequence(input: &mut &str) -> ModalResult<char> {
    preceded(
        '\\',
        alt((
            '"'.value('"'),
            '\\'.value('\\'),
            '\''.value('\''),
            'n'.value('\n'),
            'r'.value('\r'),
            't'.value('\t'),
            '0'.value('\0'),
            preceded(one_of(['U', 'u']), unicode_scalar),
        )),
    )
    .parse_next(input)
}

/// Four hex digits naming a Unicode scalar value.
fn unicode_scalar(input: &mut &str) -> ModalResult<char> {
    take_while(4, |c: char| c.is_ascii_hexdigit())
        .verify_map(|hex: &str| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32))
        .parse_next(input)
}
