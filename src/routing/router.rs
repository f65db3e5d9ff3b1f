//! Route registration.
//!
//! # Responsibilities
//! - Store one trie root per HTTP method
//! - Create trie nodes on registration
//! - Reject duplicate registration of any handler slot
//!
//! # Design Decisions
//! - No process-wide singleton: callers own the `Router` and pass it
//!   explicitly, sharing it via `Arc` once setup is done
//! - Duplicate registration is a `Result`, not a panic, so hosts can
//!   surface misconfiguration however they like; it is still intended
//!   as a startup-time invariant, not a runtime condition
//! - No deletion API; the trie only ever grows during setup

use std::collections::HashMap;

use thiserror::Error;

use crate::handler::{ErrorHandler, Route};
use crate::routing::trie::Node;

/// Errors raised while wiring up routes. These indicate a configuration
/// bug and are meant to abort startup, not to be retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A route is already bound to this (method, path).
    #[error("route already registered for {method} {path}")]
    DuplicateRoute { method: String, path: String },

    /// A default route is already bound to this (method, path).
    #[error("default route already registered for {method} {path}")]
    DuplicateDefault { method: String, path: String },

    /// An error handler is already bound to this (method, path).
    #[error("error handler already registered for {method} {path}")]
    DuplicateErrorHandler { method: String, path: String },
}

/// Trie-based request router.
///
/// Build it during single-threaded startup, then treat it as immutable:
/// matching takes `&self` and performs no locking, so registration must
/// not be interleaved with concurrent matching.
#[derive(Default)]
pub struct Router {
    pub(crate) methods: HashMap<String, Node>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the exact route for `(method, path)`.
    ///
    /// `*` path segments match any single concrete segment and capture
    /// its value into the route's args.
    pub fn handle(&mut self, method: &str, path: &str, route: Route) -> Result<(), RegistryError> {
        let node = self.node_at(method, path);
        if node.route.is_some() {
            return Err(RegistryError::DuplicateRoute {
                method: method.to_string(),
                path: path.to_string(),
            });
        }
        node.route = Some(route);

        tracing::debug!(method, path, "registered route");
        Ok(())
    }

    /// Register the default route for every unmatched request under
    /// `(method, path)`. It does not match `path` itself when an exact
    /// route exists there; see the [`routing`](crate::routing) notes on
    /// trailing slashes.
    pub fn set_default(
        &mut self,
        method: &str,
        path: &str,
        route: Route,
    ) -> Result<(), RegistryError> {
        let node = self.node_at(method, path);
        if node.default_route.is_some() {
            return Err(RegistryError::DuplicateDefault {
                method: method.to_string(),
                path: path.to_string(),
            });
        }
        node.default_route = Some(route);

        tracing::debug!(method, path, "registered default route");
        Ok(())
    }

    /// Register the error handler for every route under `(method, path)`
    /// that returns an error. Inherited exactly like default routes.
    pub fn set_error_handler(
        &mut self,
        method: &str,
        path: &str,
        handler: ErrorHandler,
    ) -> Result<(), RegistryError> {
        let node = self.node_at(method, path);
        if node.error_handler.is_some() {
            return Err(RegistryError::DuplicateErrorHandler {
                method: method.to_string(),
                path: path.to_string(),
            });
        }
        node.error_handler = Some(handler);

        tracing::debug!(method, path, "registered error handler");
        Ok(())
    }

    /// Descend to the node for `(method, path)`, creating the per-method
    /// root and any missing trie nodes. Methods are matched
    /// case-insensitively, so the key is lower-cased here.
    fn node_at(&mut self, method: &str, path: &str) -> &mut Node {
        self.methods
            .entry(method.to_ascii_lowercase())
            .or_default()
            .at_path(path)
    }
}
