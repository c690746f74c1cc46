//! Handler trait and type erasure.
//!
//! The router stores handlers of different concrete types in one tree, so
//! each `async fn` is erased behind `Arc<dyn Handler>`. Handlers take the
//! shared [`App`] state alongside the request — the server clones the `Arc`
//! and passes it in on every call, which is how state reaches handlers
//! without any global.
//!
//! Any function of the shape
//!
//! ```text
//! async fn name(app: App, req: Request) -> impl IntoResponse
//! ```
//!
//! satisfies the trait through the blanket impl below. The per-request cost
//! is one `Arc` clone and one virtual call.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::app::App;
use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future resolving to a [`Response`].
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Dispatch interface the router stores.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, app: App, req: Request) -> BoxFuture;
}

/// Shared, type-erased handler.
pub(crate) type BoxedHandler = Arc<dyn Handler>;

impl<F, Fut, R> Handler for F
where
    F: Fn(App, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, app: App, req: Request) -> BoxFuture {
        let fut = (self)(app, req);
        Box::pin(async move { fut.await.into_response() })
    }
}
