//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::HeaderMap;
use serde::de::DeserializeOwned;

/// An incoming HTTP request with its body fully collected.
pub struct Request {
    pub(crate) method: http::Method,
    pub(crate) path: String,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        method: http::Method,
        path: String,
        headers: HeaderMap,
        body: Bytes,
        params: HashMap<String, String>,
    ) -> Self {
        Self { method, path, headers, body, params }
    }

    pub fn method(&self) -> &http::Method { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Returns a named path parameter.
    ///
    /// For a route `/images/{*path}`, `req.param("path")` on
    /// `/images/ai/x.jpg` returns `Some("ai/x.jpg")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
impl Request {
    /// Bare request for handler tests: given method + path, empty everything
    /// else.
    pub(crate) fn test(method: http::Method, path: &str) -> Self {
        Self::new(method, path.to_owned(), HeaderMap::new(), Bytes::new(), HashMap::new())
    }

    pub(crate) fn test_with_body(method: http::Method, path: &str, body: &str) -> Self {
        let mut req = Self::test(method, path);
        req.body = Bytes::copy_from_slice(body.as_bytes());
        req
    }

    pub(crate) fn test_with_param(method: http::Method, path: &str, key: &str, value: &str) -> Self {
        let mut req = Self::test(method, path);
        req.params.insert(key.to_owned(), value.to_owned());
        req
    }
}
