use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImpurityError {
    /// The label sequence (or the counts behind it) holds zero samples.
    #[error("Cannot compute impurity of an empty label sequence.")]
    EmptyLabels,

    #[error("Invalid value {value} for parameter '{name}'.")]
    InvalidParameter { name: String, value: String },

    /// Class counts, or the sum of their squares, don't fit in a `u128`.
    #[error("Class counts overflow the exact sum of squares.")]
    CountOverflow,

    #[error("Record {row} has no column {column}.")]
    MissingColumn { row: usize, column: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ImpurityError>;
