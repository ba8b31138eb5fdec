//! Error type shared by every fallible path operation.

use thiserror::Error;

/// Errors reported by path construction, mutation, and query operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input: bad point counts, degenerate geometry parameters,
    /// or mismatched buffers.
    #[error("invalid argument")]
    InvalidArgument,

    /// Backing storage could not grow, or an operation was handed too few
    /// points to produce any output.
    #[error("out of memory")]
    OutOfMemory,

    /// A caller-provided output buffer is smaller than the path's point
    /// count.
    #[error("insufficient buffer")]
    InsufficientBuffer,

    /// The operation is present in the API surface but not implemented.
    #[error("not implemented")]
    NotImplemented,

    /// Unexpected internal inconsistency.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
