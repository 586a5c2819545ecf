//! # Adaptive Metrics Domain
//!
//! Wire-level types and models for the adaptive metrics aggregation API.
//!
//! This crate contains:
//! - Wire model types (aggregation rules, recommendations, exemptions)
//! - The opaque `ETag` version token
//! - Client configuration structures
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O; everything here is plain data
//! - Serialization follows the service's omit-if-zero wire convention

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
