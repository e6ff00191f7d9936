//! Service error types.

use thiserror::Error;

/// Top-level service error type.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A request body failed boundary validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A partial content update named a top-level key that is not a section.
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// A protected route was called without an `authorization` header.
    #[error("missing authorization credential")]
    MissingCredential,

    /// The external backend could not be reached or its response could not
    /// be read. The detail is logged server-side, never returned verbatim.
    #[error("upstream transport failure: {0}")]
    Transport(String),
}
