/// Query runner
///
/// Applies a query's filter, then its projection, to a row set.
use super::ast::{Projection, Query};
use super::filter::should_keep_row;
use crate::error::Result;
use crate::row::Row;
use tracing::debug;

/// Runs `query` over `rows`, returning new projected rows in input order.
///
/// The input is never modified. An evaluation error aborts the whole run.
pub fn run(rows: &[Row], query: &Query) -> Result<Vec<Row>> {
    let filter = query.filter();
    let mut results = Vec::new();

    for row in rows {
        if should_keep_row(row, filter)? {
            results.push(project(row, &query.projection));
        }
    }

    debug!(
        scanned = rows.len(),
        returned = results.len(),
        filtered = filter.is_some(),
        "query finished"
    );
    Ok(results)
}

/// Copies the projected columns that exist in `row`; unknown names are skipped.
fn project(row: &Row, projection: &Projection) -> Row {
    let mut projected = Row::with_capacity(projection.len());
    for name in projection {
        if let Some(value) = row.get(name) {
            projected.insert(name.as_str(), value.clone());
        }
    }
    projected
}
