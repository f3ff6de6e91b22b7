//! Sleep abstraction for the bounded open-retry loop
//!
//! `init` backs off between open attempts. The sleeper is injectable so
//! the retry protocol can be exercised in tests without wall-clock
//! delay.

use std::time::Duration;

/// Suspends the calling thread between retry attempts
pub trait Sleeper: Send + Sync {
    /// Block the current thread for `duration`
    fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by `std::thread::sleep`
#[derive(Debug, Default)]
pub struct SystemSleeper;

impl Sleeper for SystemSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
