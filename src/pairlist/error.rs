//! Error types for the pairlist module

use thiserror::Error;

use crate::types::PairParseError;

/// Errors that can occur building or running the pairlist pipeline.
#[derive(Debug, Error)]
pub enum PairlistError {
    /// A filter resolved an unusable configuration at construction time.
    /// Surfaces to whatever assembles the pipeline and aborts startup.
    #[error("Invalid pairlist configuration: {0}")]
    Configuration(String),

    /// The market catalog was empty or unavailable at invocation time.
    /// Fatal for the current cycle, never converted into "no pairs pass".
    #[error("Markets not loaded. Make sure that exchange is initialized correctly.")]
    MarketsNotLoaded,

    /// A candidate pair string does not have the `BASE/QUOTE` shape.
    #[error(transparent)]
    InvalidPair(#[from] PairParseError),

    /// Configuration names a filter method this build does not provide.
    #[error("Unknown pairlist method: {0}")]
    UnknownMethod(String),

    /// Stage options failed to deserialize.
    #[error("Invalid pairlist options: {0}")]
    Options(#[from] serde_json::Error),
}
