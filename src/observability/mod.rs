//! Observability helpers.
//!
//! The router itself only emits `tracing` events (debug at registration,
//! trace per resolution); this module carries the subscriber setup for
//! host applications and tests that want to see them.

pub mod logging;
