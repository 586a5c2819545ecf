//! Aggregation service API client
//!
//! Typed operations over the HTTP transport, one family per resource kind:
//!
//! | Family | Envelope | Concurrency token |
//! |---|---|---|
//! | [`RulesApi`] | bare JSON | `If-Match` in, `ETag` out |
//! | [`RecommendationsApi`] | bare JSON | none |
//! | [`ExemptionsApi`] | `{"result": ...}` | none |
//!
//! Nothing is cached or retried. Every failure reaches the caller unchanged in
//! kind, so conflicts can be told apart from missing resources and from
//! transport problems.

pub mod auth;
pub mod client;
pub mod envelope;
pub mod exemptions;
pub mod paths;
pub mod recommendations;
pub mod rules;

pub use auth::default_headers;
pub use client::{AdaptiveMetricsClient, Scope};
pub use envelope::{Bare, Envelope, ResultEnvelope};
pub use exemptions::ExemptionsApi;
pub use recommendations::RecommendationsApi;
pub use rules::RulesApi;
