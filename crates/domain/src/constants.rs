//! Domain constants
//!
//! Defaults and environment variable names shared by the client crates.

// Client defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("adaptive-metrics-client/", env!("CARGO_PKG_VERSION"));

// Environment variables read by the settings loader
pub const ENV_URL: &str = "ADAPTIVE_METRICS_URL";
pub const ENV_API_KEY: &str = "ADAPTIVE_METRICS_API_KEY";
pub const ENV_HTTP_HEADERS: &str = "ADAPTIVE_METRICS_HTTP_HEADERS";
pub const ENV_TIMEOUT_SECS: &str = "ADAPTIVE_METRICS_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "ADAPTIVE_METRICS_USER_AGENT";
