//! Error types for map containers and the conformance check.

use thiserror::Error;

/// A container failed one of the three map views for the sample pair.
///
/// Keys and values are carried as their `Debug` rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConformanceError {
    /// Lookup by key did not yield the sample value.
    #[error("missing key/value pair: {key} -> {value}")]
    MissingPair { key: String, value: String },

    /// The key view does not contain the sample key.
    #[error("missing key in key view: {key}")]
    MissingKey { key: String },

    /// The value view does not contain the sample value.
    #[error("missing value in value view: {value}")]
    MissingValue { value: String },
}

/// Errors from building map containers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The entry source of a lazily built map failed.
    #[error("map source failed: {0}")]
    Source(String),
}

/// Convenience type alias for map operations.
pub type Result<T> = std::result::Result<T, MapError>;
