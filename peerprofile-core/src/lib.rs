//! Core library for PeerProfile
//!
//! Profile persistence for a device-to-device profile exchange service.
//! One [`ProfileStore`] owns the handle to a logical store inside the
//! external distributed key-value engine, acquires it with a bounded
//! retry protocol, and guards every operation against it with a
//! reader/writer lock. The engine itself is a capability expressed by
//! the traits in [`core_kv`]; an in-memory implementation is included
//! for demos and integration tests.

pub mod config;
pub mod core_kv;
pub mod core_profile;
pub mod logging;
pub mod metrics;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{Config, ConfigError};
pub use core_kv::{
    Entry, KvError, KvStoreHandle, KvStoreManager, MemoryKvEngine, StoreKind, StoreOptions,
    SyncPolicy,
};
pub use core_profile::{InitStatus, ProfileError, ProfileResult, ProfileStore};
pub use logging::{init_logging, init_logging_with_config, LogConfig, LogLevel};
