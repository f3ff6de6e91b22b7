//! Shared types for the engine contract

use serde::{Deserialize, Serialize};

/// Kind of store requested from the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreKind {
    /// Single-version store; the engine keeps one value per key
    SingleVersion,
    /// Collaboration store; the engine keeps per-device versions
    DeviceCollaboration,
}

/// When profile entries are pushed to peer devices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncPolicy {
    /// Synchronization happens only on explicit request
    Manual,
    /// The engine synchronizes after every write
    Auto,
}

/// Options forwarded verbatim to the engine when opening a store.
///
/// This layer treats the bundle as opaque; interpretation belongs to the
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
    /// Kind of store to open or create
    pub kind: StoreKind,

    /// Enable at-rest encryption
    pub encrypted: bool,

    /// Synchronization policy for peer devices
    pub sync: SyncPolicy,

    /// Keep the store on the local device only
    pub local_only: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            kind: StoreKind::SingleVersion,
            encrypted: false,
            sync: SyncPolicy::Manual,
            local_only: false,
        }
    }
}

/// A single key/value pair exchanged with the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Profile key
    pub key: String,
    /// Profile payload; no schema is imposed on the content
    pub value: Vec<u8>,
}

impl Entry {
    /// Create an entry from anything convertible to key/value
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Entry { key: key.into(), value: value.into() }
    }
}
