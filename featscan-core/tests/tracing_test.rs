//! Tests for tracing initialization.

use std::sync::Mutex;

use featscan_core::tracing::{init_tracing, setup::LOG_ENV_VAR};

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_per_module_filter_is_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "featscan_analysis::engine=debug,featscan_core=warn");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "[[not a filter");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}
