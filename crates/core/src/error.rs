//! Error types for susanedge

use thiserror::Error;

/// Main error type for susanedge operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({row}, {col}) in raster of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Unsupported image rank: {0} (expected a 2-D or 3-D array)")]
    UnsupportedRank(usize),

    #[error("Unsupported band count: {0} (expected 1 or 3 channels)")]
    UnsupportedBands(usize),

    #[error("Unsupported data type: {0}")]
    UnsupportedDataType(String),

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for susanedge operations
pub type Result<T> = std::result::Result<T, Error>;
