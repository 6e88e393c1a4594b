use thiserror::Error;

/// Expected, user-correctable failure conditions.
///
/// Every variant is retryable: it is stored as the session's `last_error`,
/// rendered in the status bar, and never terminates the session or discards
/// accumulated KDE history.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScopeError {
    /// A required input file has not been supplied yet.
    #[error("waiting for the {0} file")]
    MissingInput(&'static str),

    /// Malformed CSV or a missing required column.
    #[error("{0}")]
    Parse(String),

    /// A `Time` cell that cannot be coerced to a number.
    #[error("column '{column}' has a non-numeric value '{value}' at data row {row}")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    /// A density estimate needs at least two distinct values; carries the
    /// number of samples that were actually available.
    #[error("need at least 2 distinct values for a density estimate, got {0} sample(s)")]
    InsufficientData(usize),
}

pub type ScopeResult<T> = Result<T, ScopeError>;
