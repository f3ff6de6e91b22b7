/*
    MemoryKvEngine - in-process key-value engine

    HashMap-backed implementation of the engine contract. Not a
    database; used by demos and integration tests where the real
    distributed engine is not running. Options are accepted for
    contract parity but the in-memory engine has no encryption or
    device synchronization.
*/

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::errors::KvError;
use super::manager::{KvStoreHandle, KvStoreManager};
use super::types::{Entry, StoreOptions};

/// One opened in-memory store
#[derive(Default)]
pub struct MemoryStoreHandle {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl KvStoreHandle for MemoryStoreHandle {
    fn get(&self, key: &str) -> Result<Vec<u8>, KvError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| KvError::Internal(format!("lock poisoned: {}", e)))?;
        entries.get(key).cloned().ok_or(KvError::NotFound)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), KvError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| KvError::Internal(format!("lock poisoned: {}", e)))?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn put_batch(&self, batch: &[Entry]) -> Result<(), KvError> {
        // One write lock for the whole batch keeps it all-or-nothing
        let mut entries = self
            .entries
            .write()
            .map_err(|e| KvError::Internal(format!("lock poisoned: {}", e)))?;
        for entry in batch {
            entries.insert(entry.key.clone(), entry.value.clone());
        }
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| KvError::Internal(format!("lock poisoned: {}", e)))?;
        if entries.remove(key).is_some() {
            Ok(())
        } else {
            Err(KvError::NotFound)
        }
    }
}

/// In-process engine keeping every named store in memory
#[derive(Default)]
pub struct MemoryKvEngine {
    stores: RwLock<HashMap<(String, String), Arc<MemoryStoreHandle>>>,
}

impl MemoryKvEngine {
    /// Create an engine with no stores
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of named stores currently held
    pub fn store_count(&self) -> usize {
        self.stores.read().map(|stores| stores.len()).unwrap_or(0)
    }
}

impl KvStoreManager for MemoryKvEngine {
    fn open(
        &self,
        app_id: &str,
        store_id: &str,
        _options: &StoreOptions,
    ) -> Result<Arc<dyn KvStoreHandle>, KvError> {
        let mut stores = self
            .stores
            .write()
            .map_err(|e| KvError::Internal(format!("lock poisoned: {}", e)))?;
        let handle = stores
            .entry((app_id.to_string(), store_id.to_string()))
            .or_insert_with(|| Arc::new(MemoryStoreHandle::default()))
            .clone();
        Ok(handle)
    }

    fn delete_store(&self, app_id: &str, store_id: &str) -> Result<(), KvError> {
        let mut stores = self
            .stores
            .write()
            .map_err(|e| KvError::Internal(format!("lock poisoned: {}", e)))?;
        if stores.remove(&(app_id.to_string(), store_id.to_string())).is_some() {
            Ok(())
        } else {
            Err(KvError::NotFound)
        }
    }
}
