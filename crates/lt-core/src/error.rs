use thiserror::Error;

#[derive(Error, Debug)]
pub enum LumaError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Layout error: {0}")]
    Layout(String),
    #[error("Invalid brightness level: {0}")]
    InvalidLevel(usize),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Decompression error: {0}")]
    Decompression(String),
    #[error("Incomplete table: wrote {written} of {expected} levels")]
    IncompleteTable { written: usize, expected: usize },
    #[error("Index mismatch for level {level}: index says {expected}, table holds {got}")]
    IndexMismatch { level: u8, expected: u32, got: u32 },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LumaError>;
