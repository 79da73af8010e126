use thiserror::Error;

/// Error type covering every failure the leave-form workflow can hit.
#[derive(Debug, Error)]
pub enum LeaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid date `{input}`: {source}")]
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },
    #[error("Invalid number `{input}`: {source}")]
    InvalidNumber {
        input: String,
        source: std::num::ParseIntError,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No cell at table {table}, row {row}, column {col}")]
    MissingCell { table: usize, row: usize, col: usize },
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    /// The user entered the quit token at a prompt.
    #[error("aborted by user")]
    Aborted,
}

impl LeaveError {
    pub fn invalid_date(input: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::InvalidDate {
            input: input.into(),
            source,
        }
    }

    pub fn invalid_number(input: impl Into<String>, source: std::num::ParseIntError) -> Self {
        Self::InvalidNumber {
            input: input.into(),
            source,
        }
    }
}
