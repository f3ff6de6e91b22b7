/*
    core_kv - Distributed key-value engine contract

    Capability boundary for the external distributed store.
    Handles:
    - Store options forwarded verbatim to the engine
    - Opaque engine status codes and their integer widening
    - Manager/handle traits for open, CRUD and batch writes
    - An in-memory engine for demos and integration tests
*/

pub mod errors;
pub mod manager;
pub mod memory;
pub mod types;

pub use errors::KvError;
pub use manager::{KvStoreHandle, KvStoreManager};
pub use memory::MemoryKvEngine;
pub use types::{Entry, StoreKind, StoreOptions, SyncPolicy};
