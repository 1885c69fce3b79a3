//! Store Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] bson::de::Error),

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl StoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    /// True when the error is a duplicate-key rejection from a unique index.
    pub fn is_duplicate_key(&self) -> bool {
        match self {
            StoreError::Database(e) => matches!(
                &*e.kind,
                mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(we))
                    if we.code == 11000
            ),
            _ => false,
        }
    }

    /// True when a write failed on the write-concern side (e.g. majority
    /// acknowledgment timed out). The write may still have applied on the
    /// primary: callers must treat the outcome as unknown, not as failed.
    pub fn is_ambiguous_write(&self) -> bool {
        match self {
            StoreError::Database(e) => matches!(
                &*e.kind,
                mongodb::error::ErrorKind::Write(
                    mongodb::error::WriteFailure::WriteConcernError(_)
                )
            ),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
