// Error taxonomy for loading and transforming a roster

use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Everything that can go wrong between reading the CSV and printing the report.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file (or config file) could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data row does not have exactly four fields.
    #[error("malformed row at line {line}: expected 4 fields, found {found}")]
    Format { line: u64, found: usize },

    /// A date or decimal field could not be parsed.
    #[error("invalid {field} '{value}' at line {line}")]
    Parse {
        line: u64,
        field: &'static str,
        value: String,
    },

    /// Lookup on an absent name or an empty roster.
    #[error("employee not found: {0}")]
    NotFound(String),

    /// Lower-level reader failures (invalid UTF-8, broken stream).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Decimal overflow or division by zero.
    #[error("arithmetic error while {0}")]
    Arithmetic(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RosterError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RosterError::NotFound(_))
    }
}
