use std::path::PathBuf;
use thiserror::Error;

/// Public error type for every fallible operation in the crate.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("no operations declared; nothing to apply")]
    EmptyPipeline,

    #[error("source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("output already exists: {} (enable overwrite to replace it)", .0.display())]
    SinkAlreadyExists(PathBuf),

    #[error(
        "{} is {size} bytes, above the eager limit of {limit} bytes; use streaming mode",
        path.display()
    )]
    SourceTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl CleanError {
    pub(crate) fn eager_only(what: &str) -> Self {
        CleanError::InvalidState(format!(
            "`{what}` needs an in-memory line collection; this cleaner runs in streaming mode"
        ))
    }
}
