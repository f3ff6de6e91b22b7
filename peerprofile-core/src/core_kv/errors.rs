//! Opaque status codes returned by the distributed store engine

use thiserror::Error;

/// Failure statuses surfaced by the engine.
///
/// The facade forwards these untranslated. `code` gives the widened
/// integer form of the status; `0` is reserved for success and is
/// represented by `Ok` at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KvError {
    /// Key not present in the store
    #[error("key not found")]
    NotFound,

    /// Engine not reachable or still starting up
    #[error("store unavailable")]
    Unavailable,

    /// Request rejected by the engine
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// On-device data failed integrity checks
    #[error("store corrupted")]
    Corrupted,

    /// Unclassified engine failure
    #[error("engine error: {0}")]
    Internal(String),
}

impl KvError {
    /// Widened integer code for the status
    pub fn code(&self) -> i32 {
        match self {
            KvError::NotFound => 2,
            KvError::Unavailable => 3,
            KvError::InvalidArgument(_) => 4,
            KvError::Corrupted => 5,
            KvError::Internal(_) => 6,
        }
    }
}
