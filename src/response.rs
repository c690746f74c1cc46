//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Build a [`Response`] in your handler and return it, or return any type
//! implementing [`IntoResponse`] — handlers that produce serde values wrap
//! them in [`Json`].

use bytes::Bytes;
use http::StatusCode;
use http_body_util::Full;
use serde::Serialize;

/// An outgoing HTTP response.
///
/// # Shortcuts (200 OK)
///
/// ```rust
/// use http::StatusCode;
/// use seamfit::Response;
///
/// Response::json(br#"{"size":"80B"}"#.to_vec());
/// Response::text("ok");
/// Response::status(StatusCode::NOT_FOUND);
/// ```
pub struct Response {
    status: StatusCode,
    content_type: Option<&'static str>,
    body: Bytes,
}

impl Response {
    /// `200 OK` — `application/json`. Pass bytes straight from the
    /// serializer: `Response::json(serde_json::to_vec(&value)?)`.
    pub fn json(body: Vec<u8>) -> Self {
        Self::bytes("application/json", body)
    }

    /// `200 OK` — `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::bytes("text/plain; charset=utf-8", body.into().into_bytes())
    }

    /// `200 OK` with an explicit content type. Used by the static image
    /// route for jpg/png/svg bodies.
    pub fn bytes(content_type: &'static str, body: Vec<u8>) -> Self {
        Self { status: StatusCode::OK, content_type: Some(content_type), body: body.into() }
    }

    /// Response with no body.
    pub fn status(status: StatusCode) -> Self {
        Self { status, content_type: None, body: Bytes::new() }
    }

    pub(crate) fn status_code(&self) -> StatusCode {
        self.status
    }

    pub(crate) fn into_http(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(self.status);
        if let Some(ct) = self.content_type {
            builder = builder.header(http::header::CONTENT_TYPE, ct);
        }
        // Status and content-type are internal constants; this cannot fail.
        builder.body(Full::new(self.body)).expect("valid response parts")
    }

    #[cfg(test)]
    pub(crate) fn body(&self) -> &[u8] {
        &self.body
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`], so handlers can return their own
/// types directly.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response { Response::text(self) }
}

impl IntoResponse for String {
    fn into_response(self) -> Response { Response::text(self) }
}

impl IntoResponse for StatusCode {
    fn into_response(self) -> Response { Response::status(self) }
}

/// Serializes the wrapped value as a JSON body.
///
/// Serialization failure maps to a 500 — plain structs of strings and
/// numbers cannot hit that path in practice.
pub struct Json<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => Response::json(bytes),
            Err(_) => Response::status(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_wrapper_serializes() {
        #[derive(serde::Serialize)]
        struct Out { size: &'static str }

        let response = Json(Out { size: "80B" }).into_response();
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.body(), br#"{"size":"80B"}"#);
    }

    #[test]
    fn status_only_has_empty_body() {
        let response = Response::status(StatusCode::NOT_FOUND);
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert!(response.body().is_empty());
    }
}
