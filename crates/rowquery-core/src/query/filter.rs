/// Filter evaluation
///
/// Decides whether a row survives a query's filter. Comparison is driven by
/// the kind of the cell stored in the row, never by the shape of the literal.
use super::ast::{Operator, QueryFilter};
use crate::row::{Row, Value, ValueKind};
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

type Predicate = fn(&Value, &str) -> bool;

/// Returns `Ok(true)` if `row` passes `filter`. A missing filter keeps every row.
pub fn should_keep_row(row: &Row, filter: Option<&QueryFilter>) -> Result<bool, EvalError> {
    let Some(filter) = filter else {
        return Ok(true);
    };

    let cell = row
        .get(&filter.column)
        .ok_or_else(|| EvalError::UnsupportedType {
            column: filter.column.clone(),
        })?;

    let keep = predicate(filter.operator, cell.kind())(cell, &filter.value);
    trace!(column = %filter.column, cell = %cell, keep, "evaluated filter");
    Ok(keep)
}

/// Comparison table keyed by (operator, cell kind)
fn predicate(operator: Operator, kind: ValueKind) -> Predicate {
    match (operator, kind) {
        (Operator::Equal, ValueKind::Number) => {
            |cell: &Value, literal: &str| number_ordering(cell, literal).is_some_and(Ordering::is_eq)
        }
        (Operator::GreaterThan, ValueKind::Number) => {
            |cell: &Value, literal: &str| number_ordering(cell, literal).is_some_and(Ordering::is_gt)
        }
        (Operator::LessThan, ValueKind::Number) => {
            |cell: &Value, literal: &str| number_ordering(cell, literal).is_some_and(Ordering::is_lt)
        }
        (Operator::Equal, ValueKind::Text) => {
            |cell: &Value, literal: &str| text_ordering(cell, literal).is_some_and(Ordering::is_eq)
        }
        (Operator::GreaterThan, ValueKind::Text) => {
            |cell: &Value, literal: &str| text_ordering(cell, literal).is_some_and(Ordering::is_gt)
        }
        (Operator::LessThan, ValueKind::Text) => {
            |cell: &Value, literal: &str| text_ordering(cell, literal).is_some_and(Ordering::is_lt)
        }
    }
}

/// `None` when the literal is not a number: such a comparison never holds.
fn number_ordering(cell: &Value, literal: &str) -> Option<Ordering> {
    let number = cell.as_number()?;
    let ordering = match parse_integer_prefix(literal)? {
        IntegerLiteral::Exact(literal) => number.cmp(&literal),
        IntegerLiteral::AboveRange => Ordering::Less,
        IntegerLiteral::BelowRange => Ordering::Greater,
    };
    Some(ordering)
}

fn text_ordering(cell: &Value, literal: &str) -> Option<Ordering> {
    cell.as_text().map(|text| text.cmp(literal))
}

/// An integer read from a filter literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerLiteral {
    /// Fits in an `i64`
    Exact(i64),
    /// Positive and larger than `i64::MAX`
    AboveRange,
    /// Negative and smaller than `i64::MIN`
    BelowRange,
}

/// Lenient base-10 integer parse.
///
/// Skips leading whitespace, accepts one sign, then reads the longest run of
/// ASCII digits and ignores whatever follows (`"4bc"` is 4). Returns `None`
/// when there are no digits.
pub fn parse_integer_prefix(text: &str) -> Option<IntegerLiteral> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: Option<i64> = Some(0);
    let mut seen_digit = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = value.and_then(|v| v.checked_mul(10)).and_then(|v| {
            if negative {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        });
        seen_digit = true;
    }

    if !seen_digit {
        return None;
    }
    Some(match value {
        Some(value) => IntegerLiteral::Exact(value),
        None if negative => IntegerLiteral::BelowRange,
        None => IntegerLiteral::AboveRange,
    })
}

/// Filter evaluation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The filtered column holds neither a number nor text (or is absent)
    UnsupportedType { column: String },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnsupportedType { .. } => {
                write!(f, "Cannot compare values of unsupported types")
            }
        }
    }
}

impl std::error::Error for EvalError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Row {
        Row::new().with("id", 1).with("name", "John").with("age", 25)
    }

    fn filter(column: &str, operator: Operator, value: &str) -> QueryFilter {
        QueryFilter {
            column: column.to_string(),
            operator,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_no_filter_keeps_row() {
        assert!(should_keep_row(&person(), None).unwrap());
        assert!(should_keep_row(&Row::new(), None).unwrap());
    }

    #[test]
    fn test_number_comparisons() {
        let row = person();

        assert!(should_keep_row(&row, Some(&filter("age", Operator::Equal, "25"))).unwrap());
        assert!(!should_keep_row(&row, Some(&filter("age", Operator::Equal, "26"))).unwrap());
        assert!(should_keep_row(&row, Some(&filter("age", Operator::GreaterThan, "20"))).unwrap());
        assert!(!should_keep_row(&row, Some(&filter("age", Operator::GreaterThan, "30"))).unwrap());
        assert!(should_keep_row(&row, Some(&filter("age", Operator::LessThan, "30"))).unwrap());
        assert!(!should_keep_row(&row, Some(&filter("age", Operator::LessThan, "25"))).unwrap());
    }

    #[test]
    fn test_non_numeric_literal_never_matches_number() {
        let row = person();

        for operator in Operator::ALL {
            let f = filter("age", operator, "twenty");
            assert!(!should_keep_row(&row, Some(&f)).unwrap());
        }
    }

    #[test]
    fn test_numeric_prefix_literal() {
        let row = Row::new().with("id", 4);
        assert!(should_keep_row(&row, Some(&filter("id", Operator::Equal, "4bc"))).unwrap());
    }

    #[test]
    fn test_text_equality_is_exact() {
        let row = person();

        assert!(should_keep_row(&row, Some(&filter("name", Operator::Equal, "John"))).unwrap());
        assert!(!should_keep_row(&row, Some(&filter("name", Operator::Equal, "john"))).unwrap());
    }

    #[test]
    fn test_text_ordering_is_lexicographic() {
        let row = Row::new().with("id", "222");

        // "222" > "1000" as text even though 222 < 1000 as numbers
        assert!(should_keep_row(&row, Some(&filter("id", Operator::GreaterThan, "1000"))).unwrap());
        assert!(should_keep_row(&row, Some(&filter("id", Operator::LessThan, "4bc"))).unwrap());
        assert!(!should_keep_row(&row, Some(&filter("id", Operator::Equal, "0222"))).unwrap());
    }

    #[test]
    fn test_missing_column_is_unsupported() {
        let row = person();

        for operator in Operator::ALL {
            let err = should_keep_row(&row, Some(&filter("height", operator, "1"))).unwrap_err();
            assert_eq!(
                err,
                EvalError::UnsupportedType {
                    column: "height".to_string()
                }
            );
            assert_eq!(err.to_string(), "Cannot compare values of unsupported types");
        }
    }

    #[test]
    fn test_parse_integer_prefix() {
        use IntegerLiteral::*;

        assert_eq!(parse_integer_prefix("42"), Some(Exact(42)));
        assert_eq!(parse_integer_prefix("  7 apples"), Some(Exact(7)));
        assert_eq!(parse_integer_prefix("-12"), Some(Exact(-12)));
        assert_eq!(parse_integer_prefix("+3"), Some(Exact(3)));
        assert_eq!(parse_integer_prefix("4bc"), Some(Exact(4)));
        assert_eq!(parse_integer_prefix("five"), None);
        assert_eq!(parse_integer_prefix(""), None);
        assert_eq!(parse_integer_prefix("-"), None);
        assert_eq!(parse_integer_prefix("-9223372036854775808"), Some(Exact(i64::MIN)));
        assert_eq!(parse_integer_prefix("9223372036854775808"), Some(AboveRange));
        assert_eq!(parse_integer_prefix("-99999999999999999999x"), Some(BelowRange));
    }

    #[test]
    fn test_out_of_range_literal_compares_by_sign() {
        let row = Row::new().with("id", 5);
        let huge = "99999999999999999999";
        let tiny = "-99999999999999999999";

        assert!(should_keep_row(&row, Some(&filter("id", Operator::LessThan, huge))).unwrap());
        assert!(!should_keep_row(&row, Some(&filter("id", Operator::GreaterThan, huge))).unwrap());
        assert!(!should_keep_row(&row, Some(&filter("id", Operator::Equal, huge))).unwrap());

        assert!(should_keep_row(&row, Some(&filter("id", Operator::GreaterThan, tiny))).unwrap());
        assert!(!should_keep_row(&row, Some(&filter("id", Operator::LessThan, tiny))).unwrap());
        assert!(!should_keep_row(&row, Some(&filter("id", Operator::Equal, tiny))).unwrap());

        let row = Row::new().with("id", i64::MAX);
        assert!(should_keep_row(&row, Some(&filter("id", Operator::LessThan, huge))).unwrap());
    }
}
