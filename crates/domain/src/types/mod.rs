//! Wire model types
//!
//! These are the JSON shapes exchanged with the aggregation service. They are
//! independent of any local configuration representation.

pub mod etag;
pub mod exemption;
pub mod rule;
pub mod timestamp;

pub use etag::{ETag, Versioned};
pub use exemption::{Exemption, NewExemption};
pub use rule::{AggregationRecommendation, AggregationRecommendationConfiguration, AggregationRule};
pub use timestamp::Timestamp;
