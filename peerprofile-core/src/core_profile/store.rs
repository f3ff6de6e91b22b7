/*
    store.rs - Concurrency-safe facade over the distributed store

    One ProfileStore instance owns the handle for a single
    (application id, store id) pair. A reader/writer lock guards the
    handle: point reads share it, every mutation and the whole init
    retry window take it exclusively, so no operation can observe a
    half-initialized handle.
*/

use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use crate::core_kv::{Entry, KvStoreHandle, KvStoreManager, StoreOptions};
use crate::metrics;

use super::errors::{ProfileError, ProfileResult};
use super::retry::{Sleeper, SystemSleeper};
use super::status::{AtomicInitStatus, InitStatus};

/// Upper bound on engine open attempts during `init`
pub const OPEN_RETRY_ATTEMPTS: u32 = 10;

/// Fixed pause between consecutive open attempts
pub const OPEN_RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Completion observer invoked exactly once when `init` finishes
type InitCallback = Arc<dyn Fn() + Send + Sync>;

/// Helper to convert poison errors into ProfileError
fn handle_poison<T>(_err: PoisonError<T>) -> ProfileError {
    ProfileError::LockPoisoned
}

/// Concurrency-safe profile store for one (application id, store id)
/// pair.
///
/// Construction wires in the engine capability; `set_options` and
/// `register_init_callback` configure the instance, `init` acquires the
/// handle, and the CRUD operations delegate to it under the lock.
pub struct ProfileStore {
    app_id: String,
    store_id: String,
    manager: Arc<dyn KvStoreManager>,
    options: Mutex<StoreOptions>,
    handle: RwLock<Option<Arc<dyn KvStoreHandle>>>,
    status: AtomicInitStatus,
    init_callback: Mutex<Option<InitCallback>>,
    sleeper: Arc<dyn Sleeper>,
}

impl ProfileStore {
    /// Create a store facade over the given engine
    pub fn new(
        app_id: impl Into<String>,
        store_id: impl Into<String>,
        manager: Arc<dyn KvStoreManager>,
    ) -> Self {
        Self::with_sleeper(app_id, store_id, manager, Arc::new(SystemSleeper))
    }

    /// Create a store facade with a custom retry sleeper
    pub fn with_sleeper(
        app_id: impl Into<String>,
        store_id: impl Into<String>,
        manager: Arc<dyn KvStoreManager>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        ProfileStore {
            app_id: app_id.into(),
            store_id: store_id.into(),
            manager,
            options: Mutex::new(StoreOptions::default()),
            handle: RwLock::new(None),
            status: AtomicInitStatus::new(InitStatus::Uninitialized),
            init_callback: Mutex::new(None),
            sleeper,
        }
    }

    /// Application id this store belongs to
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Logical store id within the application
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// Replace the options forwarded to the engine.
    ///
    /// Must be called before `init`; later calls only affect a future
    /// re-initialization.
    pub fn set_options(&self, options: StoreOptions) {
        *self.options.lock().unwrap_or_else(PoisonError::into_inner) = options;
    }

    /// Register the init completion callback.
    ///
    /// At most one observer may be registered; returns false without
    /// replacing the stored callback when one is already present.
    pub fn register_init_callback<F>(&self, callback: F) -> bool
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut slot = self.init_callback.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            error!(
                app_id = %self.app_id,
                store_id = %self.store_id,
                "init callback already registered"
            );
            return false;
        }
        *slot = Some(Arc::new(callback));
        true
    }

    /// Acquire the store handle, retrying on failure.
    ///
    /// Blocks the calling thread and holds the exclusive lock for the
    /// whole attempt sequence. The registered callback is invoked
    /// exactly once, whatever the outcome, before a terminal-success
    /// status becomes observable.
    pub fn init(&self) {
        let started = Instant::now();
        let acquired = match self.handle.write() {
            Ok(mut slot) => self.open_with_retry(&mut slot),
            Err(_) => {
                error!("store lock poisoned before init");
                self.status.store(InitStatus::InitFailed);
                false
            }
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;
        info!(acquired, elapsed_ms, "store open finished");
        metrics::record_init(acquired, elapsed_ms);

        // The callback must run before the success flag is published
        let callback =
            self.init_callback.lock().unwrap_or_else(PoisonError::into_inner).clone();
        if let Some(callback) = callback {
            callback();
        }

        if acquired {
            self.status.store(InitStatus::InitSucceeded);
        }
    }

    /// Bounded open-retry loop; runs with the exclusive lock held
    fn open_with_retry(&self, slot: &mut Option<Arc<dyn KvStoreHandle>>) -> bool {
        let options = self.options.lock().unwrap_or_else(PoisonError::into_inner).clone();
        for attempt in 1..=OPEN_RETRY_ATTEMPTS {
            metrics::record_open_attempt();
            match self.manager.open(&self.app_id, &self.store_id, &options) {
                Ok(handle) => {
                    info!(attempt, "store open succeeded");
                    *slot = Some(handle);
                    return true;
                }
                Err(err) => {
                    debug!(attempt, code = err.code(), "store open failed, retrying");
                }
            }
            if attempt < OPEN_RETRY_ATTEMPTS {
                self.sleeper.sleep(OPEN_RETRY_BACKOFF);
            }
        }
        error!(attempts = OPEN_RETRY_ATTEMPTS, "store open exhausted retries");
        self.status.store(InitStatus::InitFailed);
        false
    }

    /// Current lifecycle flag; never blocks
    pub fn get_init_status(&self) -> InitStatus {
        self.status.load()
    }

    /// Fetch the profile value stored under `key`
    pub fn get_profile(&self, key: &str) -> ProfileResult<String> {
        let guard = self.handle.read().map_err(handle_poison)?;
        let handle = Self::usable_handle(guard.as_ref())?;
        match handle.get(key) {
            Ok(value) => {
                debug!(key, "profile get succeeded");
                metrics::record_op("get", true);
                Ok(String::from_utf8_lossy(&value).into_owned())
            }
            Err(err) => {
                error!(key, code = err.code(), "profile get failed");
                metrics::record_op("get", false);
                Err(err.into())
            }
        }
    }

    /// Store `value` under `key`
    pub fn put_profile(&self, key: &str, value: &str) -> ProfileResult<()> {
        let guard = self.handle.write().map_err(handle_poison)?;
        let handle = Self::usable_handle(guard.as_ref())?;
        if let Err(err) = handle.put(key, value.as_bytes()) {
            error!(key, code = err.code(), "profile put failed");
            metrics::record_op("put", false);
            return Err(err.into());
        }
        metrics::record_op("put", true);
        Ok(())
    }

    /// Write all key/value pairs as one engine batch.
    ///
    /// Keys and values pair positionally; a length mismatch fails
    /// before anything reaches the engine.
    pub fn put_profile_batch(&self, keys: &[String], values: &[String]) -> ProfileResult<()> {
        let guard = self.handle.write().map_err(handle_poison)?;
        let handle = Self::usable_handle(guard.as_ref())?;

        info!(keys = keys.len(), values = values.len(), "putting profile batch");
        if keys.len() != values.len() {
            error!("batch key/value counts differ");
            return Err(ProfileError::InvalidParams);
        }

        let entries: Vec<Entry> = keys
            .iter()
            .zip(values)
            .map(|(key, value)| Entry::new(key.clone(), value.as_bytes()))
            .collect();

        if let Err(err) = handle.put_batch(&entries) {
            error!(code = err.code(), "profile batch put failed");
            metrics::record_op("put_batch", false);
            return Err(err.into());
        }
        metrics::record_op("put_batch", true);
        Ok(())
    }

    /// Delete the profile stored under `key`
    pub fn delete_profile(&self, key: &str) -> ProfileResult<()> {
        let guard = self.handle.write().map_err(handle_poison)?;
        let handle = Self::usable_handle(guard.as_ref())?;
        if let Err(err) = handle.delete(key) {
            error!(key, code = err.code(), "profile delete failed");
            metrics::record_op("delete", false);
            return Err(err.into());
        }
        metrics::record_op("delete", true);
        Ok(())
    }

    /// Ask the engine to drop the entire named store.
    ///
    /// Teardown path: takes no facade lock and leaves any held handle
    /// in place; operations after a successful delete are undefined
    /// until the store is re-initialized.
    pub fn delete_store(&self) {
        if let Err(err) = self.manager.delete_store(&self.app_id, &self.store_id) {
            error!(
                app_id = %self.app_id,
                store_id = %self.store_id,
                code = err.code(),
                "delete store failed"
            );
        }
    }

    fn usable_handle(
        slot: Option<&Arc<dyn KvStoreHandle>>,
    ) -> ProfileResult<&Arc<dyn KvStoreHandle>> {
        match slot {
            Some(handle) => Ok(handle),
            None => {
                error!("store not opened");
                Err(ProfileError::InvalidParams)
            }
        }
    }
}
