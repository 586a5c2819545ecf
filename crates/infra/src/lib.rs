//! # Adaptive Metrics Infrastructure
//!
//! Client for the adaptive metrics aggregation control service.
//!
//! This crate contains:
//! - The HTTP transport (default headers, deadlines, cancellation, status
//!   classification)
//! - Typed operations for aggregation rules, recommendations and exemptions
//! - ETag-based conditional writes for the rules collection
//! - Configuration loading from the environment and files
//!
//! ## Architecture
//! - Wire types and errors come from `adaptive-metrics-domain`
//! - Contains all "impure" code (network and file I/O)
//! - Holds no state between calls; one client may be shared freely
//!
//! ## Example
//!
//! ```no_run
//! use adaptive_metrics_domain::{AggregationRule, ClientConfig};
//! use adaptive_metrics_infra::AdaptiveMetricsClient;
//!
//! # async fn run() -> adaptive_metrics_domain::Result<()> {
//! let client = AdaptiveMetricsClient::new(
//!     ClientConfig::new("https://metrics.example.com").with_api_key("secret"),
//! )?;
//!
//! let (mut rules, etag) = client.rules().list().await?.into_parts();
//! rules.push(AggregationRule { drop: true, ..AggregationRule::new("noisy_metric") });
//! let _next = client.rules().replace_all(&rules, &etag).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{AdaptiveMetricsClient, ExemptionsApi, RecommendationsApi, RulesApi, Scope};
pub use http::{CallOptions, HttpClient};
