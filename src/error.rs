//! Error type shared by the registry, report writer and CLI.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("Unknown problem: {0}")]
    UnknownProblem(u32),

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SolveError>;
