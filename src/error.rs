//! Error types for kmap

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// kmap errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Range error: {0}")]
    Range(String),

    #[error("Structural error: {0}")]
    Structural(#[from] StructuralError),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Malformed input handed over by the upstream solver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("implicant {implicant}: pattern '{pattern}' has length {got}, expected {expected}")]
    PatternLength {
        implicant: usize,
        pattern: String,
        expected: usize,
        got: usize,
    },

    #[error("implicant {implicant}: invalid character '{ch}' in pattern '{pattern}'")]
    PatternChar {
        implicant: usize,
        pattern: String,
        ch: char,
    },

    #[error("implicant {implicant}: covered minterm {minterm} outside [0, {limit})")]
    CoveredOutOfRange {
        implicant: usize,
        minterm: u32,
        limit: u32,
    },

    #[error("{set} minterm {minterm} outside [0, {limit})")]
    MintermOutOfRange {
        set: &'static str,
        minterm: u32,
        limit: u32,
    },

    #[error("minterm {0} is in both the on-set and the don't-care set")]
    OverlappingSets(u32),

    #[error("implicant {implicant}: covered set does not match pattern '{pattern}'")]
    PatternMismatch { implicant: usize, pattern: String },
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
