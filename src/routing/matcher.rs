//! Route matching logic.
//!
//! # Responsibilities
//! - Walk the per-method trie segment by segment
//! - Track the deepest default route and error handler seen so far
//! - Collect wildcard-captured segment values in path order
//! - Fall back to the built-in handlers when nothing matched
//!
//! # Design Decisions
//! - Resolution never fails: an unmatched path is answered by the nearest
//!   inherited default (or the built-in 404), never by an error handler
//! - Each node's default/error handler is applied unconditionally when
//!   the node is visited, so the deepest prefix wins by traversal order
//! - Empty segments skip descent but still inherit from the current
//!   node first; this is what distinguishes `/foo` from `/foo/`
//! - A literal child is always preferred over the `*` wildcard

use crate::handler::{self, Args, ErrorHandler, Route};
use crate::routing::router::Router;
use crate::routing::trie::{Node, WILDCARD};

/// Outcome of resolving a (method, path) pair: exactly one route, one
/// error handler, and the wildcard values captured on the way down.
/// Handlers are `Arc` clones, so this is cheap to hand to a request task.
pub struct RouteMatch {
    pub route: Route,
    pub error_handler: ErrorHandler,
    pub args: Args,
}

/// Borrowed walk state; turned into owned handler clones only once, at
/// the end of resolution.
struct Walk<'a> {
    route: Option<&'a Route>,
    error_handler: Option<&'a ErrorHandler>,
    args: Args,
}

impl Router {
    /// Resolve `(method, path)` to the best-matching route and error
    /// handler. `path` is expected to be percent-decoded already; this
    /// crate performs no normalization beyond splitting on `/`.
    pub fn resolve(&self, method: &str, path: &str) -> RouteMatch {
        let method = method.to_ascii_lowercase();

        let Some(root) = self.methods.get(&method) else {
            tracing::trace!(method = %method, path, "no trie for method");
            return RouteMatch {
                route: handler::not_found_route(),
                error_handler: handler::internal_error_handler(),
                args: Vec::new(),
            };
        };

        let walked = walk(root, path);
        tracing::trace!(
            method = %method,
            path,
            matched = walked.route.is_some(),
            args = walked.args.len(),
            "resolved route"
        );

        RouteMatch {
            route: walked.route.cloned().unwrap_or_else(handler::not_found_route),
            error_handler: walked
                .error_handler
                .cloned()
                .unwrap_or_else(handler::internal_error_handler),
            args: walked.args,
        }
    }
}

/// Walk the trie for `path`, gathering wildcard arguments and the
/// deepest inherited default route and error handler.
fn walk<'a>(root: &'a Node, path: &str) -> Walk<'a> {
    // Seed from the root so its default/error handler applies even to
    // the bare "/" path, which never descends in the loop below.
    let mut route = root.default_route.as_ref();
    let mut error_handler = root.error_handler.as_ref();
    let mut args = Vec::new();
    let mut node = root;

    for segment in path.split('/') {
        if let Some(default) = node.default_route.as_ref() {
            route = Some(default);
        }
        if let Some(erh) = node.error_handler.as_ref() {
            error_handler = Some(erh);
        }

        // Skipping the empty segment here, after inheriting from the
        // current node, is what makes a trailing '/' pick up that node's
        // own default/error handler.
        if segment.is_empty() {
            continue;
        }

        node = match node.children.get(segment) {
            Some(child) => child,
            None => match node.children.get(WILDCARD) {
                Some(child) => {
                    args.push(segment.to_string());
                    child
                }
                // Dead end: whatever default was inherited so far wins,
                // and the terminal-route override below must not run.
                None => return Walk { route, error_handler, args },
            },
        };
    }

    // All segments consumed: an exact route on the terminal node
    // overrides any inherited default.
    if let Some(exact) = node.route.as_ref() {
        route = Some(exact);
    }

    Walk { route, error_handler, args }
}
