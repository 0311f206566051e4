//! rowquery command line
//!
//! Loads a delimited file and runs each query against it:
//!
//! ```text
//! rowquery --data fruit.csv 'PROJECT id, fruit FILTER quantity > 7'
//! printf 'PROJECT id\nPROJECT fruit\n' | rowquery --data fruit.csv
//! ```

use clap::{Parser, ValueEnum};
use rowquery::logging::LogConfig;
use rowquery::{Error, LoaderConfig, Result, Row, Table, DEFAULT_DELIMITER};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// rowquery - run PROJECT/FILTER queries over a delimited file
#[derive(Parser, Debug)]
#[command(name = "rowquery")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Delimited file with a header line; no query runs if it fails to load
    #[arg(short, long, default_value = "data.csv")]
    data: PathBuf,

    /// Field delimiter
    #[arg(long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    /// Reject records with more fields than the header
    #[arg(long)]
    strict: bool,

    /// Result format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Also write logs to this file, rotated daily
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Queries to run; read from stdin, one per line, when omitted
    queries: Vec<String>,
}

/// JSON document written per query
#[derive(Serialize)]
struct QueryOutput<'a> {
    query: &'a str,
    rows: &'a [Row],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line per row
    Table,
    /// One JSON document per query
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut log_config = LogConfig::default().with_level(cli.log_level.as_str());
    if let Some(path) = &cli.log_file {
        log_config = log_config.with_both(path.clone());
    }
    let _guard = match log_config.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run_queries(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "aborted");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when at least one query failed.
fn run_queries(cli: &Cli) -> Result<bool> {
    let config = LoaderConfig::default()
        .with_delimiter(cli.delimiter)
        .with_strict(cli.strict);
    let table = Table::load_with_config(&cli.data, config)?;

    let queries = if cli.queries.is_empty() {
        read_stdin_queries()?
    } else {
        cli.queries.clone()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut all_ok = true;

    for text in &queries {
        match table.query(text) {
            Ok(rows) => write_results(&mut out, cli.format, text, &rows)?,
            Err(e) => {
                error!(query = %text, error = %e, "query failed");
                eprintln!("Query: {}\nError: {}", text, e);
                all_ok = false;
            }
        }
    }

    out.flush()?;
    Ok(all_ok)
}

fn read_stdin_queries() -> Result<Vec<String>> {
    let mut queries = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            queries.push(line);
        }
    }
    Ok(queries)
}

fn write_results<W: Write>(out: &mut W, format: OutputFormat, text: &str, rows: &[Row]) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "Query: {}", text)?;
            for row in rows {
                writeln!(out, "  {}", row)?;
            }
            writeln!(out, "({} rows)", rows.len())?;
        }
        OutputFormat::Json => {
            let document = QueryOutput { query: text, rows };
            serde_json::to_writer(&mut *out, &document)
                .map_err(|e| Error::Serialization(e.to_string()))?;
            writeln!(out)?;
        }
    }
    Ok(())
}
