//! Handler types and built-in fallbacks.
//!
//! # Responsibilities
//! - Define the route and error-handler function shapes
//! - Lift plain async fns/closures into boxed, shareable handlers
//! - Provide the built-in not-found route and internal-error handler
//!
//! # Design Decisions
//! - Routes return `Result<Response, BoxError>` instead of wrapping every
//!   handler in its own error layer; the router owns error dispatch
//! - Handlers are `Arc`ed trait objects so a resolved match is a cheap clone
//! - Error handlers receive the request head only; the body was already
//!   consumed by the failing route

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::request::Parts;
use axum::http::{Request, Response, StatusCode};
use axum::response::IntoResponse;
use futures_util::future::BoxFuture;

pub use tower::BoxError;

/// Wildcard values captured during matching, in path order.
pub type Args = Vec<String>;

/// A route handler.
///
/// If the path the route is bound to contains `*` wildcards, `args` holds
/// the concrete values those wildcards matched. A route bound to
/// `/*/foo/*` invoked for `/a/foo/d` receives `["a", "d"]` — `foo` is not
/// a wildcard, so it is not included.
///
/// A returned `Err` is passed to the nearest registered error handler.
pub type Route = Arc<
    dyn Fn(Request<Body>, Args) -> BoxFuture<'static, Result<Response<Body>, BoxError>>
        + Send
        + Sync,
>;

/// A specialized handler invoked when a resolved route returns an error.
/// Its response is final; nothing downstream consumes a value from it.
pub type ErrorHandler =
    Arc<dyn Fn(Parts, BoxError) -> BoxFuture<'static, Response<Body>> + Send + Sync>;

/// Lift an async fn or closure into a [`Route`].
pub fn route<F, Fut>(f: F) -> Route
where
    F: Fn(Request<Body>, Args) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response<Body>, BoxError>> + Send + 'static,
{
    Arc::new(
        move |req, args| -> BoxFuture<'static, Result<Response<Body>, BoxError>> {
            Box::pin(f(req, args))
        },
    )
}

/// Lift an async fn or closure into an [`ErrorHandler`].
pub fn error_handler<F, Fut>(f: F) -> ErrorHandler
where
    F: Fn(Parts, BoxError) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response<Body>> + Send + 'static,
{
    Arc::new(
        move |parts, err| -> BoxFuture<'static, Response<Body>> { Box::pin(f(parts, err)) },
    )
}

/// Built-in route used when no route or default matched: plain 404,
/// reports no failure.
pub(crate) fn not_found_route() -> Route {
    route(|_req, _args| async {
        Ok((StatusCode::NOT_FOUND, "404 page not found").into_response())
    })
}

/// Built-in error handler used when none was registered on the matched
/// path's ancestor chain: plain 500 carrying the failure's description.
pub(crate) fn internal_error_handler() -> ErrorHandler {
    error_handler(|_parts, err| async move {
        (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
    })
}
