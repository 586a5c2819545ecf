//! Response envelopes
//!
//! The service is not uniform: rule, recommendation and config responses are
//! bare JSON values, while exemption responses wrap the payload in
//! `{"result": ...}`. Each resource kind picks its envelope explicitly.

use adaptive_metrics_domain::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::http::HttpResponse;

/// Decoding strategy for one resource kind's response bodies.
pub trait Envelope {
    /// Decode the payload of `response`.
    fn open<T: DeserializeOwned>(response: &HttpResponse) -> Result<T>;
}

/// The body is the payload itself.
#[derive(Debug, Clone, Copy)]
pub struct Bare;

impl Envelope for Bare {
    fn open<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
        serde_json::from_slice(&response.body)
            .map_err(|e| response.decode_error(format!("invalid JSON payload: {e}")))
    }
}

/// The payload sits under a single `result` key.
#[derive(Debug, Clone, Copy)]
pub struct ResultEnvelope;

#[derive(Deserialize)]
struct Wrapped<T> {
    result: T,
}

impl Envelope for ResultEnvelope {
    fn open<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
        serde_json::from_slice::<Wrapped<T>>(&response.body)
            .map(|wrapped| wrapped.result)
            .map_err(|e| response.decode_error(format!("invalid result envelope: {e}")))
    }
}
