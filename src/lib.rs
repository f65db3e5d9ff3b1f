//! Trie-based HTTP request router.
//!
//! Each path component of a URL is a node in a per-method trie, with
//! support for `*` wildcard matches (composing positional argument
//! lists) and subtree not-found/error handlers.
//!
//! Routes deliberately do not use a plain handler interface: error
//! handlers are part of the router description rather than wrapped
//! around each routed function, so routes return a `Result` and the
//! router owns routing the failure. The transport-facing
//! [`RouterService`] is a `tower::Service` so a frozen router still
//! plugs into everyone else's stack.
//!
//! ```
//! use axum::http::StatusCode;
//! use axum::response::IntoResponse;
//! use trie_router::{handler, Router};
//!
//! # fn main() -> Result<(), trie_router::RegistryError> {
//! let mut rtr = Router::new();
//! rtr.handle("GET", "/", handler::route(|_req, _args| async {
//!     Ok((StatusCode::OK, "landing").into_response())
//! }))?;
//! rtr.set_default("GET", "/api/1/", handler::route(|_req, _args| async {
//!     Ok((StatusCode::NOT_FOUND, "unknown api call").into_response())
//! }))?;
//! rtr.set_error_handler("GET", "/api/1/", handler::error_handler(|_parts, err| async move {
//!     (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
//! }))?;
//! rtr.handle("GET", "/api/1/post/id/*", handler::route(|_req, args| async move {
//!     Ok((StatusCode::OK, format!("post {}", args[0])).into_response())
//! }))?;
//!
//! // Registration done; freeze and hand to the transport layer.
//! let service = rtr.into_service();
//! # let _ = service;
//! # Ok(())
//! # }
//! ```
//!
//! Note that `/foo` and `/foo/` are different routes for the purpose of
//! default/error handlers (but not for exact routes); see the
//! [`routing`] module notes.

// Core subsystems
pub mod dispatch;
pub mod handler;
pub mod routing;

// Cross-cutting concerns
pub mod observability;

pub use dispatch::RouterService;
pub use handler::{Args, BoxError, ErrorHandler, Route};
pub use routing::{RegistryError, RouteMatch, Router};
