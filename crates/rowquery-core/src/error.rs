//! Error types for rowquery.

use crate::query::filter::EvalError;
use crate::query::reader::ParseError;
use std::fmt;

/// The main error type for rowquery operations.
#[derive(Debug)]
pub enum Error {
    /// Query text could not be parsed
    Parse(ParseError),

    /// A filter could not be evaluated against a row
    Eval(EvalError),

    /// I/O error
    Io(std::io::Error),

    /// Malformed delimited input
    Ingest {
        /// 1-based line number in the source
        line: usize,
        /// What went wrong on that line
        message: String,
    },

    /// Serialization error
    Serialization(String),

    /// Invalid operation
    InvalidOperation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::Eval(e) => write!(f, "Evaluation error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Ingest { line, message } => {
                write!(f, "Ingest error at line {}: {}", line, message)
            }
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Eval(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::Eval(err)
    }
}

/// A specialized `Result` type for rowquery operations.
pub type Result<T> = std::result::Result<T, Error>;
