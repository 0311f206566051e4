//! Loader configuration.

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Delimited-file loader configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Field separator
    pub delimiter: char,
    /// Reject records with more fields than the header instead of dropping the extras
    pub strict: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            strict: false,
        }
    }
}

impl LoaderConfig {
    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable or disable strict field counts
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
