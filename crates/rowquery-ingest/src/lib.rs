//! # rowquery ingest
//!
//! Delimited-file ingestion for rowquery.
//!
//! ## Internal Implementation Detail
//!
//! Users should depend on the main `rowquery` crate instead, which provides
//! the stable public API.
//!
//! ---
//!
//! The first non-blank line is the header. Every later line is a record.
//! Column kinds are inferred over the whole file before any row is built:
//!
//! ```text
//! lines → records → infer_schema (per column) → typed rows
//! ```
//!
//! ```
//! use rowquery_ingest::CsvLoader;
//! use rowquery_core::Value;
//!
//! let dataset = CsvLoader::new().load_str("id,fruit\n1,apple\n2,pear").unwrap();
//! assert_eq!(dataset.rows[1].get("id"), Some(&Value::Number(2)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod loader;
pub mod record;
pub mod schema;

pub use config::{LoaderConfig, DEFAULT_DELIMITER};
pub use loader::{CsvLoader, Dataset};
pub use schema::{infer_schema, looks_numeric, Schema};
