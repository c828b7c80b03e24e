//! Errors raised while routing a request.

use thiserror::Error;

/// A request that could not be served.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The action or type tag did not match any operation.
    #[error("Unknown action")]
    UnknownAction,

    /// The request or its payload could not be decoded.
    #[error("Invalid payload: {source}")]
    InvalidPayload {
        /// Underlying decoding error.
        source: serde_json::Error,
    },

    /// The result could not be encoded.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying encoding error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias for dispatch results.
pub type Result<T> = std::result::Result<T, DispatchError>;
