//! Error types for edgescore
//!
//! One variant per failure family. Nothing is retried internally: every
//! error surfaces to the invoking process, and the only resumption
//! mechanism is re-invocation on top of the idempotent skip contract.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Edgescore error types
#[derive(Error, Debug)]
pub enum Error {
    /// Metrics aggregator driven out of sequence (observe/finalize without
    /// begin, finalize twice, or a pass with zero observed samples)
    #[error("metrics aggregator usage error: {0}")]
    Usage(&'static str),

    /// Accumulated evaluation set admits no defined ROC curve
    /// (single-class truth, or no entry survives the score-cut filter)
    #[error("degenerate evaluation set: {0}")]
    Degenerate(String),

    /// Event reference does not carry a parseable fixed-width numeric suffix
    #[error("malformed event reference {reference:?}: {reason}")]
    IdentifierFormat {
        /// The offending external reference
        reference: String,
        /// Why it failed to parse
        reason: String,
    },

    /// Classifier rejected its input (shape mismatch, out-of-range node
    /// index, non-finite features)
    #[error("inference error: {0}")]
    Inference(String),

    /// Artifact directory creation or write failed
    #[error("storage error: {0}")]
    Storage(String),

    /// Plot backend failed while rendering a curve artifact
    #[error("render error: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact serialization error
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
