//! Error types for the profile store facade

use thiserror::Error;

use crate::core_kv::KvError;

/// Errors returned by [`super::store::ProfileStore`] operations.
///
/// Integer widening of the result, for callers that carry codes across
/// an FFI-style boundary: `0` success, `1` local validation failure,
/// engine statuses keep their own codes, `7` lock poisoning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Local validation failed before any delegation: the store handle
    /// has not been acquired, or batch key/value counts differ
    #[error("invalid params")]
    InvalidParams,

    /// Failure status forwarded untranslated from the engine
    #[error("store error: {0}")]
    Store(#[from] KvError),

    /// A thread panicked while holding the store lock
    #[error("store lock poisoned")]
    LockPoisoned,
}

impl ProfileError {
    /// Widened integer result code
    pub fn code(&self) -> i32 {
        match self {
            ProfileError::InvalidParams => 1,
            ProfileError::Store(err) => err.code(),
            ProfileError::LockPoisoned => 7,
        }
    }
}

/// Result type for facade operations
pub type ProfileResult<T> = Result<T, ProfileError>;
