//! Batch Errors
//!
//! Failures that stop a batch from reaching the swiping view.

use serde::{Deserialize, Serialize};

pub type BatchResult<T> = Result<T, BatchError>;

/// Why a batch could not be loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchError {
    /// An image failed to load, or the batch timed out
    FetchFailure(String),
    /// No images were requested or returned
    EmptyBatch,
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::FetchFailure(msg) => write!(f, "Could not load cats: {}", msg),
            BatchError::EmptyBatch => write!(f, "No cats came back this time"),
        }
    }
}

impl std::error::Error for BatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = BatchError::FetchFailure("timed out after 20000 ms".to_string());
        assert_eq!(err.to_string(), "Could not load cats: timed out after 20000 ms");
        assert_eq!(BatchError::EmptyBatch.to_string(), "No cats came back this time");
    }
}
