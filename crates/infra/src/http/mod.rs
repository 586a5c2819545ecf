//! HTTP transport
//!
//! Builds requests against a configured base URL, merges default headers,
//! enforces per-call deadlines and cancellation, and classifies non-2xx
//! responses into structured errors.

pub mod client;
pub mod message;
pub mod options;

pub use client::{HttpClient, HttpClientBuilder};
pub use message::{HttpRequest, HttpResponse};
pub use options::CallOptions;
