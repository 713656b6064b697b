use std::fmt;

use thiserror::Error;

/// Failure of a function, procedure or scalar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuncError {
    /// The callee reported a failure.
    #[error("function failed: {0}")]
    Failed(String),
}

impl FuncError {
    /// Wrap any displayable error.
    pub fn failed(err: impl fmt::Display) -> Self {
        Self::Failed(err.to_string())
    }
}

/// Convenience type alias for function results.
pub type Result<T> = std::result::Result<T, FuncError>;
