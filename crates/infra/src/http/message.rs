//! Request and response values exchanged with [`HttpClient`](super::HttpClient).

use adaptive_metrics_domain::{AdaptiveMetricsError, ETag, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ETAG, IF_MATCH};
use reqwest::{Method, StatusCode};
use serde::Serialize;

/// A request relative to the client's base URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Path including the leading `/`, already percent-encoded
    pub path: String,
    /// Per-call headers; these win over the client's default headers
    pub headers: HeaderMap,
    /// Serialized JSON body, if any
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Request for `method` on `path`, without headers or body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), headers: HeaderMap::new(), body: None }
    }

    /// `GET path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST path`.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// `PUT path`.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// `DELETE path`.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Set a per-call header, replacing any previous value.
    pub fn header(mut self, name: HeaderName, value: &str) -> Result<Self> {
        let value = HeaderValue::from_str(value).map_err(|e| {
            AdaptiveMetricsError::InvalidRequest(format!("invalid value for header {name}: {e}"))
        })?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Attach the caller's version token as `If-Match`, byte for byte.
    pub fn if_match(self, etag: &ETag) -> Result<Self> {
        self.header(IF_MATCH, etag.as_str())
    }

    /// Serialize `body` to JSON and attach it.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(body).map_err(|e| {
            AdaptiveMetricsError::InvalidRequest(format!("failed to serialize request body: {e}"))
        })?;
        self.body = Some(bytes);
        Ok(self)
    }
}

/// A successful (2xx) response with its raw body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Raw body bytes; empty for bodiless responses
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// The `ETag` response header, unmodified.
    pub fn etag(&self) -> Result<ETag> {
        let value = self
            .headers
            .get(ETAG)
            .ok_or_else(|| self.decode_error("response is missing the ETag header"))?;

        let text = std::str::from_utf8(value.as_bytes())
            .map_err(|_| self.decode_error("ETag header is not valid UTF-8"))?;

        Ok(ETag::new(text))
    }

    /// Build a decode error carrying this response's request context.
    pub fn decode_error(&self, message: impl Into<String>) -> AdaptiveMetricsError {
        AdaptiveMetricsError::Decode {
            method: self.method.to_string(),
            path: self.path.clone(),
            message: message.into(),
        }
    }
}
