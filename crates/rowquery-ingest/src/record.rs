//! Splitting one line of delimited text into fields.

use rowquery_core::{Error, Result};

/// Splits `line` on `delimiter`.
///
/// A field that starts with `"` runs to the matching closing quote, may
/// contain the delimiter, and uses `""` for a literal quote. Quotes in the
/// middle of an unquoted field are kept as-is.
pub fn split_record(line: &str, delimiter: char, line_no: usize) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut at_field_start = true;

    while let Some(ch) = chars.next() {
        if at_field_start && ch == '"' {
            read_quoted(&mut chars, &mut field, line_no)?;
            at_field_start = false;
            continue;
        }

        if ch == delimiter {
            fields.push(std::mem::take(&mut field));
            at_field_start = true;
        } else {
            field.push(ch);
            at_field_start = false;
        }
    }
    fields.push(field);

    Ok(fields)
}

fn read_quoted<I>(chars: &mut std::iter::Peekable<I>, field: &mut String, line_no: usize) -> Result<()>
where
    I: Iterator<Item = char>,
{
    while let Some(ch) = chars.next() {
        if ch != '"' {
            field.push(ch);
            continue;
        }
        if chars.peek() == Some(&'"') {
            chars.next();
            field.push('"');
        } else {
            return Ok(());
        }
    }

    Err(Error::Ingest {
        line: line_no,
        message: "unterminated quoted field".to_string(),
    })
}
