/// Reader for the `PROJECT ... FILTER ...` mini-language
///
/// The grammar is deliberately small, so this is a pair of string splits and a
/// single character scan rather than a tokenizer.
use super::ast::*;
use std::fmt;
use tracing::{debug, warn};

const PROJECT_MARKER: &str = "PROJECT ";
const FILTER_SEPARATOR: &str = "FILTER ";
const QUOTES: &[char] = &['\'', '"'];

/// Parse query text into a [`Query`].
///
/// ```
/// use rowquery_core::query::{read_query, Operator};
///
/// let query = read_query("PROJECT id, name FILTER age > \"20\"").unwrap();
/// assert_eq!(query.projection, vec!["id", "name"]);
///
/// let filter = query.filter().unwrap();
/// assert_eq!(filter.column, "age");
/// assert_eq!(filter.operator, Operator::GreaterThan);
/// assert_eq!(filter.value, "20");
/// ```
pub fn read_query(input: &str) -> Result<Query, ParseError> {
    // Only one filter is supported; a second separator stays in the filter text
    let mut parts = input.splitn(2, FILTER_SEPARATOR).map(str::trim);
    let project_part = parts.next().unwrap_or_default();
    let filter_part = parts.next().filter(|part| !part.is_empty());

    let projection = read_projection(project_part);
    let filter = match filter_part {
        Some(text) => read_filter(text)?,
        None => FilterClause::None,
    };

    let query = Query { projection, filter };
    debug!(query = %query, "read query");
    Ok(query)
}

fn read_projection(part: &str) -> Projection {
    part.replacen(PROJECT_MARKER, "", 1)
        .split(',')
        .map(|column| column.trim().to_string())
        .collect()
}

/// First operator symbol in `text`, scanning left to right.
///
/// A symbol inside the column name wins over the real operator.
fn find_operator(text: &str) -> Option<Operator> {
    text.chars().find_map(Operator::from_symbol)
}

fn read_filter(text: &str) -> Result<FilterClause, ParseError> {
    let operator = find_operator(text).ok_or_else(|| ParseError::OperatorNotFound {
        clause: text.to_string(),
    })?;

    let pattern = format!(" {} ", operator.symbol());
    let Some((column, rest)) = text.split_once(pattern.as_str()) else {
        warn!(
            clause = text,
            operator = %operator,
            "filter ignored: operator is not surrounded by single spaces"
        );
        return Ok(FilterClause::Ignored {
            text: text.to_string(),
            operator,
        });
    };

    // Anything after a second padded operator is dropped
    let raw_value = rest.split(pattern.as_str()).next().unwrap_or(rest);

    Ok(FilterClause::Comparison(QueryFilter {
        column: column.to_string(),
        operator,
        value: strip_quotes(raw_value).to_string(),
    }))
}

/// Removes one leading and one trailing quote character, each if present.
fn strip_quotes(raw: &str) -> &str {
    let value = raw.strip_prefix(QUOTES).unwrap_or(raw);
    value.strip_suffix(QUOTES).unwrap_or(value)
}

/// Query reader errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The filter text contains none of `=`, `>`, `<`
    OperatorNotFound { clause: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::OperatorNotFound { .. } => {
                write!(f, "Operator not found in filter expression")
            }
        }
    }
}

impl std::error::Error for ParseError {}
