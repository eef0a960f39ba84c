use thiserror::Error;

/// Failures surfaced by the persistence adapter.
///
/// Loading never fails (malformed slots fall back to the default site);
/// these cover the save path.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
