//! Radix-tree request router.
//!
//! One [`matchit`] tree per HTTP method, O(path-length) lookup. Build the
//! router once at startup, pass it to [`Server::serve`](crate::Server::serve).

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};

/// The application router.
///
/// Each [`Router::on`] call returns `self` so registrations chain:
///
/// ```rust,no_run
/// # use http::Method;
/// # use seamfit::{App, Request, Response, Router};
/// # async fn results(_: App, _: Request) -> Response { Response::text("") }
/// let routes = Router::new()
///     .on(Method::POST, "/api/results", results);
/// ```
pub struct Router {
    routes: HashMap<http::Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for
    /// chaining.
    ///
    /// Path parameters use `{name}` syntax; `{*name}` captures the rest of
    /// the path. Retrieve either with `req.param("name")`.
    ///
    /// # Panics
    ///
    /// Panics on an invalid or conflicting route — both are programmer
    /// errors caught at startup, before the listener binds.
    pub fn on(mut self, method: http::Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, Arc::new(handler))
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: &http::Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, AppState};
    use crate::assets::AssetStore;
    use crate::config::Config;
    use crate::request::Request;
    use crate::response::Response;
    use crate::sizing::{ActivityKey, CupGroup};

    struct NoAssets;
    impl AssetStore for NoAssets {
        fn resolve(&self, _: ActivityKey, _: CupGroup) -> Vec<String> { Vec::new() }
    }

    fn test_app() -> App {
        let config = Config {
            addr: ([127, 0, 0, 1], 0).into(),
            static_dir: "static".into(),
        };
        AppState::with_assets(config, Box::new(NoAssets))
    }

    async fn echo_param(_app: App, req: Request) -> Response {
        Response::text(req.param("path").unwrap_or("none").to_owned())
    }

    #[tokio::test]
    async fn wildcard_param_reaches_the_handler() {
        let router = Router::new().on(http::Method::GET, "/images/{*path}", echo_param);

        let (handler, params) = router
            .lookup(&http::Method::GET, "/images/ai/model_casual_small_front.jpg")
            .unwrap();
        assert_eq!(params["path"], "ai/model_casual_small_front.jpg");

        let req = Request::test(http::Method::GET, "/images/ai/x.jpg");
        let response = handler.call(test_app(), req).await;
        assert_eq!(response.status_code(), http::StatusCode::OK);
    }

    #[test]
    fn method_mismatch_is_a_miss() {
        let router = Router::new().on(http::Method::POST, "/api/results", echo_param);
        assert!(router.lookup(&http::Method::GET, "/api/results").is_none());
        assert!(router.lookup(&http::Method::POST, "/api/other").is_none());
        assert!(router.lookup(&http::Method::POST, "/api/results").is_some());
    }
}
