//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (single-threaded):
//!     handle / set_default / set_error_handler
//!     → trie.rs (create nodes per path segment, per method)
//!     → Freeze: router shared read-only from here on
//!
//! Per request:
//!     resolve(method, path)
//!     → matcher.rs (walk trie segment by segment)
//!     → Return: RouteMatch { route, error_handler, args }
//! ```
//!
//! # Design Decisions
//! - One independent trie per (lower-cased) HTTP method
//! - Trie is immutable after setup; concurrent matching needs no locks.
//!   Interleaving registration with matching is not supported.
//! - Literal children win over the `*` wildcard at every level
//! - Deepest registered default/error handler wins over shallower ones
//! - No regex in the hot path; matching is one map lookup per segment
//!
//! # Trailing Slashes
//! `/foo` and `/foo/` resolve to the same exact route but may inherit
//! different default/error handlers: the trailing slash visits the `foo`
//! node one more time before the walk runs out of segments, picking up
//! any default registered there. In MVC terms `/foo` is the `foo` method
//! of the root controller while `/foo/` is the `index` method of the
//! `foo` controller.

pub mod matcher;
pub mod router;
pub(crate) mod trie;

pub use matcher::RouteMatch;
pub use router::{RegistryError, Router};
