use std::io;
use thiserror::Error;

/// Error type for shell operations
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Wrong argument shape; the payload is the usage line
    #[error("Uso: {0}")]
    Usage(String),

    /// Failure owned by a single command invocation
    #[error("{0}")]
    Command(String),

    #[error("Out of memory: {0}")]
    OutOfMemory(String),

    #[error("Signal setup failed: {0}")]
    Signal(String),
}

pub type ShellResult<T> = Result<T, ShellError>;
