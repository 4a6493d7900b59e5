use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Corrupt marker data: {0}")]
    CorruptData(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
