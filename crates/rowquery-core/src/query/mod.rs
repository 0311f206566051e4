/// Query engine module
///
/// Reading, filtering and running `PROJECT ... FILTER ...` queries.
/// Query model types
#[allow(missing_docs)]
pub mod ast;
/// Filter evaluation
#[allow(missing_docs)]
pub mod filter;
/// Query text reader
#[allow(missing_docs)]
pub mod reader;
/// Filter-then-project execution
pub mod runner;

// Re-export main types
pub use ast::*;
pub use filter::{should_keep_row, EvalError};
pub use reader::{read_query, ParseError};
pub use runner::run;
