//! Capability traits for the external distributed store
//!
//! The engine itself lives outside this crate; the facade reaches it
//! only through these traits. [`super::memory::MemoryKvEngine`]
//! implements them in-process for demos and tests.

use std::sync::Arc;

use super::errors::KvError;
use super::types::{Entry, StoreOptions};

/// Live connection to one opened store
pub trait KvStoreHandle: Send + Sync {
    /// Point lookup
    fn get(&self, key: &str) -> Result<Vec<u8>, KvError>;

    /// Point write
    fn put(&self, key: &str, value: &[u8]) -> Result<(), KvError>;

    /// Apply all entries as one batch.
    ///
    /// All-or-nothing application is a property the engine provides;
    /// callers never see a partially applied batch.
    fn put_batch(&self, entries: &[Entry]) -> Result<(), KvError>;

    /// Point delete
    fn delete(&self, key: &str) -> Result<(), KvError>;
}

/// Locates or creates logical stores by (application id, store id)
pub trait KvStoreManager: Send + Sync {
    /// Open (or create) the named store
    fn open(
        &self,
        app_id: &str,
        store_id: &str,
        options: &StoreOptions,
    ) -> Result<Arc<dyn KvStoreHandle>, KvError>;

    /// Drop the entire named store
    fn delete_store(&self, app_id: &str, store_id: &str) -> Result<(), KvError>;
}
