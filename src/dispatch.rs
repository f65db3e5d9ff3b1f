//! Request dispatch.
//!
//! # Responsibilities
//! - Resolve each incoming request against the router
//! - Invoke the matched route with the request and captured args
//! - Hand a failed route's error to the resolved error handler
//! - Expose the router as a `tower::Service` for transport layers
//!
//! # Design Decisions
//! - A failure is observed by exactly one error handler: the one
//!   resolved for the same request, before the route ran
//! - The request head is cloned up front so the error handler still has
//!   method/uri/headers after the route consumed the body
//! - The service is infallible; every route failure becomes a response.
//!   Timeouts and cancellation belong to the enclosing transport layer

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, Response};
use futures_util::future::BoxFuture;
use tower::Service;

use crate::routing::Router;

impl Router {
    /// Resolve and invoke the best-matching route for `req`, then the
    /// best-matching error handler if the route failed.
    pub async fn dispatch(&self, req: Request<Body>) -> Response<Body> {
        let matched = self.resolve(req.method().as_str(), req.uri().path());

        let (parts, body) = req.into_parts();
        let head = parts.clone();
        let req = Request::from_parts(parts, body);

        match (matched.route)(req, matched.args).await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(
                    method = %head.method,
                    path = %head.uri.path(),
                    error = %err,
                    "route failed, invoking error handler"
                );
                (matched.error_handler)(head, err).await
            }
        }
    }

    /// Wrap the router in a cloneable [`RouterService`] for use with a
    /// tower-compatible server. Registration is finished at this point;
    /// the router is shared read-only from here on.
    pub fn into_service(self) -> RouterService {
        RouterService { router: Arc::new(self) }
    }
}

/// `tower::Service` adapter over a frozen [`Router`]. Cheap to clone,
/// one logical task per request.
#[derive(Clone)]
pub struct RouterService {
    router: Arc<Router>,
}

impl Service<Request<Body>> for RouterService {
    type Response = Response<Body>;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response<Body>, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let router = Arc::clone(&self.router);
        Box::pin(async move { Ok(router.dispatch(req).await) })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use tower::ServiceExt;

    use super::*;
    use crate::handler::{error_handler, route};

    fn get(path: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_string(resp: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_successful_route_skips_error_handler() {
        let mut rtr = Router::new();
        rtr.handle(
            "GET",
            "/ok",
            route(|_req, _args| async { Ok((StatusCode::OK, "fine").into_response()) }),
        )
        .unwrap();
        rtr.set_error_handler(
            "GET",
            "/",
            error_handler(|_parts, _err| async {
                (StatusCode::INTERNAL_SERVER_ERROR, "handled").into_response()
            }),
        )
        .unwrap();

        let resp = rtr.dispatch(get("/ok")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "fine");
    }

    #[tokio::test]
    async fn test_failed_route_reaches_resolved_error_handler() {
        let mut rtr = Router::new();
        rtr.handle(
            "GET",
            "/boom",
            route(|_req, _args| async { Err("it broke".into()) }),
        )
        .unwrap();
        rtr.set_error_handler(
            "GET",
            "/",
            error_handler(|parts, err| async move {
                let body = format!("{} {}: {err}", parts.method, parts.uri.path());
                (StatusCode::BAD_GATEWAY, body).into_response()
            }),
        )
        .unwrap();

        let resp = rtr.dispatch(get("/boom")).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_string(resp).await, "GET /boom: it broke");
    }

    #[tokio::test]
    async fn test_unregistered_failure_hits_builtin_handler() {
        let mut rtr = Router::new();
        rtr.handle(
            "GET",
            "/boom",
            route(|_req, _args| async { Err("unhandled".into()) }),
        )
        .unwrap();

        let resp = rtr.dispatch(get("/boom")).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(resp).await, "unhandled");
    }

    #[tokio::test]
    async fn test_service_adapter_dispatches() {
        let mut rtr = Router::new();
        rtr.handle(
            "GET",
            "/svc",
            route(|_req, _args| async { Ok((StatusCode::OK, "via service").into_response()) }),
        )
        .unwrap();

        let service = rtr.into_service();
        let resp = service.clone().oneshot(get("/svc")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "via service");

        // No match anywhere still yields a response, not an error.
        let resp = service.oneshot(get("/nope")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
