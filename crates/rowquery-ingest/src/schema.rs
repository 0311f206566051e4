//! Per-column type inference.

use rowquery_core::{Row, ValueKind};
use serde::Serialize;
use tracing::warn;

/// Inferred column kinds, in header order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: Vec<(String, ValueKind)>,
}

impl Schema {
    /// Describes rows that were typed elsewhere.
    ///
    /// Columns appear in first-seen order; a column is `Number` unless any
    /// row holds text in it.
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut schema = Schema::default();
        for row in rows {
            for (name, value) in row.iter() {
                match schema.columns.iter_mut().find(|(column, _)| column == name) {
                    Some((_, kind)) if value.kind() == ValueKind::Text => *kind = ValueKind::Text,
                    Some(_) => {}
                    None => schema.columns.push((name.to_string(), value.kind())),
                }
            }
        }
        schema
    }

    /// Kind of `column`, if the column exists
    pub fn kind(&self, column: &str) -> Option<ValueKind> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, kind)| *kind)
    }

    /// Column names in header order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// `(column, kind)` pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, ValueKind)> {
        self.columns.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// True for a non-empty run of ASCII digits that fits in an `i64`
pub fn looks_numeric(cell: &str) -> bool {
    is_digit_run(cell) && cell.parse::<i64>().is_ok()
}

fn is_digit_run(cell: &str) -> bool {
    !cell.is_empty() && cell.bytes().all(|b| b.is_ascii_digit())
}

/// All-digit cells where at least one is too large for a number column
fn overflows_number<'a>(mut cells: impl Iterator<Item = &'a String>) -> bool {
    let mut overflow = false;
    let all_digits = cells.all(|cell| {
        overflow |= is_digit_run(cell) && !looks_numeric(cell);
        is_digit_run(cell)
    });
    all_digits && overflow
}

/// Infers one kind per header column.
///
/// A column is `Number` only if it has at least one cell and every cell
/// looks numeric; a single non-numeric cell makes the whole column `Text`.
pub fn infer_schema(header: &[String], records: &[Vec<String>]) -> Schema {
    let columns = header
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells = move || records.iter().filter_map(move |record| record.get(idx));
            let numeric = cells().next().is_some() && cells().all(|cell| looks_numeric(cell));
            let kind = if numeric {
                ValueKind::Number
            } else {
                if overflows_number(cells()) {
                    warn!(column = %name, "digits exceed the integer range, column read as text");
                }
                ValueKind::Text
            };
            (name.clone(), kind)
        })
        .collect();

    Schema { columns }
}
