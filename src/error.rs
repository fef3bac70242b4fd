//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board key has {got} symbols, expected {expected} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid symbol '{symbol}' at position {position} in '{context}'")]
    InvalidSymbol {
        symbol: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid outcome value {value} (must be -1, 0, or 1)")]
    InvalidOutcome { value: i8 },

    #[error("board '{key}' is terminal and carries no move records")]
    TerminalState { key: String },

    #[error("key '{key}' is not canonical (canonical form is '{canonical}')")]
    NotCanonical { key: String, canonical: String },

    #[error("no table entry for canonical key '{key}'")]
    StateNotFound { key: String },

    #[error("table invariant violated at '{key}': {reason}")]
    TableInvariant { key: String, reason: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
