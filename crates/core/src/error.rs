use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DebounceError {
    #[error("debouncer must be created inside a tokio runtime")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    #[error("failed to read metadata for {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
