//! Tessera Report
//!
//! Turns a repository query into a lazy, pull-based sequence of serialized
//! records. The consumer pulls lines until exhaustion or a mid-stream error;
//! nothing is buffered beyond the store cursor's own batching.

pub mod format;
pub mod ownership;

pub use format::{ReportFormat, ReportRecord};
pub use ownership::ownership_report;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Store error: {0}")]
    Store(#[from] tessera_store::StoreError),

    #[error("Record serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
