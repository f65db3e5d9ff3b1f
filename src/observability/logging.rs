//! Structured logging setup.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Log level configurable via `RUST_LOG`, with a quiet default
//! - Safe to call more than once; later calls are ignored

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber with an env-filter.
///
/// Host applications that install their own subscriber should skip this;
/// the router's events flow into whatever subscriber is active.
pub fn init() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "trie_router=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    });
}
