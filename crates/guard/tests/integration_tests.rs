//! Integration tests for paramguard
//!
//! These tests exercise the public API through the prelude, the way a
//! consumer crate would.

mod integration {
    mod catalogs;
    mod chains;
    mod scenarios;
    #[cfg(feature = "tracing")]
    mod tracing_events;
}
