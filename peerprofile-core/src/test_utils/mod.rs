//! Test utilities and helpers for PeerProfile
//!
//! Mock engine pieces shared across the crate's test suites.

pub mod fixtures;

pub use fixtures::*;
