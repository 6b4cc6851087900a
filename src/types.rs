//! Shared error and result types for mintgate
//!
//! Every fallible operation in the crate surfaces one of these variants to
//! the caller. All of them are recoverable: the caller can re-prompt, retry
//! with different input, or pick another URI.

/// Crate-wide error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum MintgateError {
    /// Required input missing or empty before any network call was made
    #[error("validation failed: {0}")]
    ValidationFailed(String),

    /// The pinning store was unreachable or rejected the content
    #[error("upload failed: {0}")]
    UploadFailed(String),

    /// Every applicable fetch/parse attempt for a token URI was exhausted
    #[error("resolution failed: {0}")]
    ResolutionFailed(String),

    /// Bad or incomplete configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result alias used throughout the crate
pub type Result<T> = std::result::Result<T, MintgateError>;
