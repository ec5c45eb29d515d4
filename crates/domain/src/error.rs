//! Error types for the domain crate.
//!
//! The recommendation core itself never fails; these errors only arise
//! when a caller parses tier or truck names from free-form text (CLI
//! flags, batch files).

use thiserror::Error;

/// Errors that can occur when converting text into domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Name is not one of light, medium, heavy
    #[error("Unknown service tier: {0}")]
    UnknownTier(String),

    /// Name is not one of small, medium, large, xl, xxl
    #[error("Unknown truck size: {0}")]
    UnknownTruckSize(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DomainError>;
