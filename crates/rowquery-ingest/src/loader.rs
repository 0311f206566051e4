//! Loading delimited text into typed rows.

use crate::config::LoaderConfig;
use crate::record::split_record;
use crate::schema::{infer_schema, Schema};
use rowquery_core::{Error, Result, Row, Value, ValueKind};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Rows loaded from one source, with the schema inferred for them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Inferred column kinds
    pub schema: Schema,
    /// Typed rows in source order
    pub rows: Vec<Row>,
}

/// Loads delimited text with a header line
#[derive(Debug, Clone, Default)]
pub struct CsvLoader {
    config: LoaderConfig,
}

impl CsvLoader {
    /// Create a loader with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom configuration
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Returns the loader configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a file
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading delimited file");
        let file = File::open(path)?;
        self.load_reader(file)
    }

    /// Load from any reader
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Dataset> {
        let mut lines = Vec::new();
        for line in BufReader::new(reader).lines() {
            lines.push(line?);
        }
        self.load_lines(lines.iter().map(String::as_str))
    }

    /// Load from an in-memory string
    pub fn load_str(&self, text: &str) -> Result<Dataset> {
        self.load_lines(text.lines())
    }

    fn load_lines<'a, I>(&self, lines: I) -> Result<Dataset>
    where
        I: Iterator<Item = &'a str>,
    {
        let delimiter = self.config.delimiter;
        let mut header: Option<Vec<String>> = None;
        let mut records = Vec::new();

        for (idx, line) in lines.enumerate() {
            let line_no = idx + 1;
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.trim().is_empty() {
                continue;
            }

            let fields = split_record(line, delimiter, line_no)?;
            match header.as_ref().map(Vec::len) {
                Some(width) => records.push(self.fit_record(fields, width, line_no)?),
                None => header = Some(fields.iter().map(|name| name.trim().to_string()).collect()),
            }
        }

        let Some(header) = header else {
            debug!("no header line; empty dataset");
            return Ok(Dataset::default());
        };

        let schema = infer_schema(&header, &records);
        let rows = records
            .into_iter()
            .map(|record| build_row(&schema, record))
            .collect::<Result<Vec<_>>>()?;

        debug!(columns = schema.len(), rows = rows.len(), "loaded dataset");
        Ok(Dataset { schema, rows })
    }

    /// Applies the field-count policy to one record
    fn fit_record(&self, mut fields: Vec<String>, width: usize, line_no: usize) -> Result<Vec<String>> {
        if fields.len() <= width {
            return Ok(fields);
        }

        if self.config.strict {
            return Err(Error::Ingest {
                line: line_no,
                message: format!("expected at most {} fields, found {}", width, fields.len()),
            });
        }

        warn!(line = line_no, extra = fields.len() - width, "dropping extra fields");
        fields.truncate(width);
        Ok(fields)
    }
}

fn build_row(schema: &Schema, record: Vec<String>) -> Result<Row> {
    let mut row = Row::with_capacity(record.len());
    for ((name, kind), cell) in schema.iter().zip(record) {
        let value = match kind {
            ValueKind::Number => cell.parse::<i64>().map(Value::Number).map_err(|e| {
                Error::InvalidOperation(format!("column {} cell {:?}: {}", name, cell, e))
            })?,
            ValueKind::Text => Value::Text(cell),
        };
        row.insert(name, value);
    }
    Ok(row)
}
