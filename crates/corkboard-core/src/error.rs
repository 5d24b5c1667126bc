use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CorkboardError {
    #[error("column index {column} out of range for a board with {columns} columns")]
    InvalidColumn { column: usize, columns: usize },

    #[error("no card with id {0}")]
    NotFound(Uuid),

    #[error("no drag gesture in progress")]
    NoActiveDrag,

    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
