//! # rowquery core
//!
//! Row model, query model, query reader, filter evaluator and query runner
//! for the rowquery tabular query engine.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod query;
pub mod row;

pub use error::{Error, Result};
pub use query::{
    read_query, run, should_keep_row, EvalError, FilterClause, Operator, ParseError, Projection,
    Query, QueryFilter,
};
pub use row::{Row, Value, ValueKind};
