//! Error types

use thiserror::Error;

/// Precondition violations raised by the containers
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ContainerError {
    /// Index outside the range accepted by the operation
    #[error("index {index} is out of range for a sequence of size {size}")]
    Index { index: usize, size: usize },
    /// Pop, dequeue or peek on an empty adapter
    #[error("cannot take from an empty {0}")]
    Empty(&'static str),
}

/// Failures of maze generation, solving and layout parsing
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MazeError {
    #[error("invalid maze dimensions {rows}x{cols}, rows and columns must be positive")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("malformed maze layout: {0}")]
    MalformedLayout(String),
    /// Queue ran dry before the exit cell was reached
    #[error("exit at row {row}, column {col} cannot be reached from the entrance")]
    Unreachable { row: usize, col: usize },
    #[error(transparent)]
    Container(#[from] ContainerError),
}
