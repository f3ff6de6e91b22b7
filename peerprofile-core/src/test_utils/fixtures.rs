//! Mock engine fixtures for exercising the facade without a real store

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Barrier, Mutex};
use std::time::Duration;

use crate::core_kv::{Entry, KvError, KvStoreHandle, KvStoreManager, MemoryKvEngine, StoreOptions};
use crate::core_profile::Sleeper;

/// Sleeper that records requested naps instead of sleeping
#[derive(Default)]
pub struct RecordingSleeper {
    naps: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn naps(&self) -> Vec<Duration> {
        self.naps.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.naps.lock().unwrap().push(duration);
    }
}

/// Manager that fails the first `failures` opens, then delegates to an
/// in-memory engine
pub struct FlakyKvManager {
    inner: MemoryKvEngine,
    remaining_failures: AtomicU32,
    open_calls: AtomicU32,
}

impl FlakyKvManager {
    pub fn new(failures: u32) -> Arc<Self> {
        Arc::new(FlakyKvManager {
            inner: MemoryKvEngine::new(),
            remaining_failures: AtomicU32::new(failures),
            open_calls: AtomicU32::new(0),
        })
    }

    pub fn open_calls(&self) -> u32 {
        self.open_calls.load(Ordering::SeqCst)
    }
}

impl KvStoreManager for FlakyKvManager {
    fn open(
        &self,
        app_id: &str,
        store_id: &str,
        options: &StoreOptions,
    ) -> Result<Arc<dyn KvStoreHandle>, KvError> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.remaining_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.remaining_failures.store(remaining - 1, Ordering::SeqCst);
            return Err(KvError::Unavailable);
        }
        self.inner.open(app_id, store_id, options)
    }

    fn delete_store(&self, app_id: &str, store_id: &str) -> Result<(), KvError> {
        self.inner.delete_store(app_id, store_id)
    }
}

/// Handle that records every call it receives.
///
/// Writes succeed without storing anything; reads report `NotFound`.
#[derive(Default)]
pub struct CapturingHandle {
    pub gets: Mutex<Vec<String>>,
    pub puts: Mutex<Vec<(String, Vec<u8>)>>,
    pub batches: Mutex<Vec<Vec<Entry>>>,
    pub deletes: Mutex<Vec<String>>,
}

impl KvStoreHandle for CapturingHandle {
    fn get(&self, key: &str) -> Result<Vec<u8>, KvError> {
        self.gets.lock().unwrap().push(key.to_string());
        Err(KvError::NotFound)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), KvError> {
        self.puts.lock().unwrap().push((key.to_string(), value.to_vec()));
        Ok(())
    }

    fn put_batch(&self, entries: &[Entry]) -> Result<(), KvError> {
        self.batches.lock().unwrap().push(entries.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        self.deletes.lock().unwrap().push(key.to_string());
        Ok(())
    }
}

/// Manager that always hands out one fixed handle
pub struct FixedHandleManager {
    handle: Arc<dyn KvStoreHandle>,
    delete_calls: AtomicU32,
}

impl FixedHandleManager {
    pub fn new(handle: Arc<dyn KvStoreHandle>) -> Arc<Self> {
        Arc::new(FixedHandleManager { handle, delete_calls: AtomicU32::new(0) })
    }

    pub fn delete_calls(&self) -> u32 {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

impl KvStoreManager for FixedHandleManager {
    fn open(
        &self,
        _app_id: &str,
        _store_id: &str,
        _options: &StoreOptions,
    ) -> Result<Arc<dyn KvStoreHandle>, KvError> {
        Ok(self.handle.clone())
    }

    fn delete_store(&self, _app_id: &str, _store_id: &str) -> Result<(), KvError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Handle whose reads and writes block on a shared gate.
///
/// A test holds the gate mutex to keep an operation inside the engine
/// call, then observes what other operations can or cannot do while the
/// facade lock is held.
pub struct GatedHandle {
    gate: Arc<Mutex<()>>,
    get_entered: AtomicBool,
    put_entered: AtomicBool,
}

impl GatedHandle {
    pub fn new(gate: Arc<Mutex<()>>) -> Arc<Self> {
        Arc::new(GatedHandle {
            gate,
            get_entered: AtomicBool::new(false),
            put_entered: AtomicBool::new(false),
        })
    }

    pub fn get_entered(&self) -> bool {
        self.get_entered.load(Ordering::SeqCst)
    }

    pub fn put_entered(&self) -> bool {
        self.put_entered.load(Ordering::SeqCst)
    }
}

impl KvStoreHandle for GatedHandle {
    fn get(&self, _key: &str) -> Result<Vec<u8>, KvError> {
        self.get_entered.store(true, Ordering::SeqCst);
        let _gate = self.gate.lock().unwrap();
        Ok(b"v".to_vec())
    }

    fn put(&self, _key: &str, _value: &[u8]) -> Result<(), KvError> {
        self.put_entered.store(true, Ordering::SeqCst);
        let _gate = self.gate.lock().unwrap();
        Ok(())
    }

    fn put_batch(&self, _entries: &[Entry]) -> Result<(), KvError> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<(), KvError> {
        Ok(())
    }
}

/// Handle whose reads rendezvous on a barrier; completes only when the
/// expected number of readers is inside `get` at the same time
pub struct BarrierHandle {
    barrier: Barrier,
}

impl BarrierHandle {
    pub fn new(readers: usize) -> Arc<Self> {
        Arc::new(BarrierHandle { barrier: Barrier::new(readers) })
    }
}

impl KvStoreHandle for BarrierHandle {
    fn get(&self, _key: &str) -> Result<Vec<u8>, KvError> {
        self.barrier.wait();
        Ok(b"v".to_vec())
    }

    fn put(&self, _key: &str, _value: &[u8]) -> Result<(), KvError> {
        Ok(())
    }

    fn put_batch(&self, _entries: &[Entry]) -> Result<(), KvError> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<(), KvError> {
        Ok(())
    }
}

/// Manager whose open blocks on a shared gate, keeping the init retry
/// window open for as long as a test holds the gate
pub struct GatedManager {
    inner: MemoryKvEngine,
    gate: Arc<Mutex<()>>,
    open_entered: AtomicBool,
}

impl GatedManager {
    pub fn new(gate: Arc<Mutex<()>>) -> Arc<Self> {
        Arc::new(GatedManager {
            inner: MemoryKvEngine::new(),
            gate,
            open_entered: AtomicBool::new(false),
        })
    }

    pub fn open_entered(&self) -> bool {
        self.open_entered.load(Ordering::SeqCst)
    }
}

impl KvStoreManager for GatedManager {
    fn open(
        &self,
        app_id: &str,
        store_id: &str,
        options: &StoreOptions,
    ) -> Result<Arc<dyn KvStoreHandle>, KvError> {
        self.open_entered.store(true, Ordering::SeqCst);
        let _gate = self.gate.lock().unwrap();
        self.inner.open(app_id, store_id, options)
    }

    fn delete_store(&self, app_id: &str, store_id: &str) -> Result<(), KvError> {
        self.inner.delete_store(app_id, store_id)
    }
}
