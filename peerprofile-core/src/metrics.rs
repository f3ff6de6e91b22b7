//! Metrics collection for the profile store facade

use metrics::{counter, describe_counter, describe_histogram, histogram};

/// Initialize metrics with descriptions
pub fn init_metrics() {
    describe_counter!("profile.store.open.attempts", "Engine open attempts during init");
    describe_counter!("profile.store.init.succeeded", "Initializations that acquired a handle");
    describe_counter!("profile.store.init.failed", "Initializations that exhausted retries");
    describe_histogram!("profile.store.init.duration_ms", "Init duration in milliseconds");
    describe_counter!("profile.store.ops.success", "Facade operations that succeeded");
    describe_counter!("profile.store.ops.failure", "Facade operations that failed");
}

/// Record one engine open attempt
pub(crate) fn record_open_attempt() {
    counter!("profile.store.open.attempts").increment(1);
}

/// Record the outcome and duration of an init pass
pub(crate) fn record_init(acquired: bool, elapsed_ms: u64) {
    if acquired {
        counter!("profile.store.init.succeeded").increment(1);
    } else {
        counter!("profile.store.init.failed").increment(1);
    }
    histogram!("profile.store.init.duration_ms").record(elapsed_ms as f64);
}

/// Record the outcome of one facade operation
pub(crate) fn record_op(op: &'static str, success: bool) {
    if success {
        counter!("profile.store.ops.success", "op" => op).increment(1);
    } else {
        counter!("profile.store.ops.failure", "op" => op).increment(1);
    }
}
