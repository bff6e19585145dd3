//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Coordinate ({x}, {y}) is outside the {columns}x{rows} grid")]
    OutOfRange {
        x: i32,
        y: i32,
        columns: i32,
        rows: i32,
    },

    #[error("Invalid grid dimensions {columns}x{rows}: both must be at least 1")]
    InvalidDimensions { columns: i32, rows: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
