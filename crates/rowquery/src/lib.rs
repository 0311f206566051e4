//! # rowquery
//!
//! A minimal in-memory tabular query engine: load delimited data, infer a
//! type per column, then run `PROJECT ... FILTER ...` queries over the rows.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rowquery::Table;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load a file with a header line
//!     let table = Table::load("./data.csv")?;
//!
//!     // Project two columns from the rows whose quantity exceeds 7
//!     for row in table.query("PROJECT id, fruit FILTER quantity > 7")? {
//!         println!("{}", row);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Query Language
//!
//! ```text
//! PROJECT col[, col...] [FILTER col op literal]
//! ```
//!
//! - `op` is one of `=`, `>`, `<` and must be surrounded by single spaces
//! - the literal may be wrapped in `'` or `"`
//! - number columns compare numerically, text columns compare as strings
//!
//! ```rust
//! use rowquery::{Row, Table};
//!
//! let table = Table::from_rows(vec![
//!     Row::new().with("id", 1).with("name", "John").with("age", 25),
//!     Row::new().with("id", 2).with("name", "Jane").with("age", 31),
//! ]);
//!
//! let rows = table.query("PROJECT name FILTER age > \"30\"")?;
//! assert_eq!(rows, vec![Row::new().with("name", "Jane")]);
//! # Ok::<(), rowquery::Error>(())
//! ```

use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub mod logging;

// Re-export core types
pub use rowquery_core::{
    read_query, run, should_keep_row, Error, EvalError, FilterClause, Operator, ParseError,
    Projection, Query, QueryFilter, Result, Row, Value, ValueKind,
};

// Ingestion components
pub use rowquery_ingest::{CsvLoader, Dataset, LoaderConfig, Schema, DEFAULT_DELIMITER};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A loaded row set that queries run against.
///
/// Rows are shared behind an `Arc`; clones are cheap and can be handed to
/// other threads.
#[derive(Debug, Clone)]
pub struct Table {
    inner: Arc<Dataset>,
}

impl Table {
    /// Loads a delimited file with the default configuration.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use rowquery::Table;
    ///
    /// let table = Table::load("./data.csv")?;
    /// println!("{} rows", table.len());
    /// # Ok::<(), rowquery::Error>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_config(path, LoaderConfig::default())
    }

    /// Loads a delimited file with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - File with a header line
    /// * `config` - Delimiter and field-count policy
    pub fn load_with_config<P: AsRef<Path>>(path: P, config: LoaderConfig) -> Result<Self> {
        let path = path.as_ref();
        let dataset = CsvLoader::with_config(config).load_path(path)?;
        info!(path = %path.display(), rows = dataset.rows.len(), "loaded table");
        Ok(Self::from_dataset(dataset))
    }

    /// Builds a table from delimited text already in memory.
    pub fn parse_str(text: &str, config: LoaderConfig) -> Result<Self> {
        let dataset = CsvLoader::with_config(config).load_str(text)?;
        Ok(Self::from_dataset(dataset))
    }

    /// Wraps rows typed elsewhere; the schema is derived from the rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let schema = Schema::from_rows(&rows);
        Self::from_dataset(Dataset { schema, rows })
    }

    /// Wraps a loaded dataset.
    pub fn from_dataset(dataset: Dataset) -> Self {
        Table {
            inner: Arc::new(dataset),
        }
    }

    /// All rows in load order.
    pub fn rows(&self) -> &[Row] {
        &self.inner.rows
    }

    /// Column kinds inferred at load time.
    pub fn schema(&self) -> &Schema {
        &self.inner.schema
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.inner.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.inner.rows.is_empty()
    }

    /// Parses query text without running it.
    ///
    /// The returned [`Query`] holds no row state and can be executed any
    /// number of times, against this or any other table.
    pub fn prepare(&self, text: &str) -> Result<Query> {
        Ok(read_query(text)?)
    }

    /// Runs a parsed query.
    pub fn execute(&self, query: &Query) -> Result<Vec<Row>> {
        run(self.rows(), query)
    }

    /// Parses and runs query text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rowquery::{LoaderConfig, Table};
    ///
    /// let table = Table::parse_str("id,fruit\n1,apple\n2,pear", LoaderConfig::default())?;
    /// let rows = table.query("PROJECT fruit FILTER id = 2")?;
    /// assert_eq!(rows[0].get("fruit").map(|v| v.to_string()), Some("pear".to_string()));
    /// # Ok::<(), rowquery::Error>(())
    /// ```
    pub fn query(&self, text: &str) -> Result<Vec<Row>> {
        let query = self.prepare(text)?;
        self.execute(&query)
    }
}
