/// Error types for harmonic parameter parsing and observation loading
use thiserror::Error;

/// Structural problems in a harmonic parameter file
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// No line carries the observed-year marker, or it has no following line
    #[error("missing observed base year (expected a line containing {marker:?} followed by the year)")]
    MissingBaseYear { marker: &'static str },

    /// The line after the observed-year marker is not a positive integer
    #[error("invalid observed base year: expected a positive integer, found {0:?}")]
    InvalidBaseYear(String),

    /// No constituent-count / mean-level header line
    #[error("missing constituent count header (expected a line containing {count_marker:?} and {mean_marker:?})")]
    MissingCountHeader {
        count_marker: &'static str,
        mean_marker: &'static str,
    },

    /// The constituent count is absent, non-numeric or zero
    #[error("invalid constituent count: expected a positive integer, found {0:?}")]
    InvalidCount(String),

    /// The mean level is absent or non-numeric
    #[error("invalid mean level: expected a number, found {0:?}")]
    InvalidMeanLevel(String),

    /// No Cj/Sj column header line
    #[error("missing constituent table header (expected a line containing {cos_marker:?} and {sin_marker:?})")]
    MissingConstituentHeader {
        cos_marker: &'static str,
        sin_marker: &'static str,
    },

    /// Fewer well-formed constituent rows than the header declares
    #[error("constituent count mismatch (expected: {expected}, found: {found})")]
    CountMismatch { expected: usize, found: usize },

    /// A constituent period that is zero, negative or not finite
    #[error("constituent {name} has a non-positive period ({period} hours)")]
    NonPositivePeriod { name: String, period: f64 },

    /// A Cj or Sj coefficient that is NaN or infinite
    #[error("constituent {name} has a non-finite coefficient (Cj: {cos_coefficient}, Sj: {sin_coefficient})")]
    NonFiniteCoefficient {
        name: String,
        cos_coefficient: f64,
        sin_coefficient: f64,
    },
}

/// Structural problems in an observation table
#[derive(Error, Debug)]
pub enum FormatError {
    /// A required header column is absent
    #[error("observation header is missing the {0:?} column")]
    MissingColumn(&'static str),

    /// The header row could not be read
    #[error("failed to read observation header: {0}")]
    Csv(#[from] csv::Error),
}

/// Type alias for Results of parameter parsing
pub type Result<T, E = ParseError> = std::result::Result<T, E>;
