//! Recommendation exemptions
//!
//! An exemption protects labels of one metric from aggregation. It is keyed by
//! an identifier that only the server assigns, so creation uses a separate
//! payload type that has no `id` at all.

use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;

/// An exemption as stored by the service.
///
/// `created_at` and `updated_at` are server-owned and must be sent back
/// unchanged on update; they keep the exact text the service sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exemption {
    pub id: String,
    pub metric: String,
    #[serde(default)]
    pub keep_labels: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Exemption {
    /// The creatable part of this exemption.
    pub fn to_new(&self) -> NewExemption {
        NewExemption { metric: self.metric.clone(), keep_labels: self.keep_labels.clone() }
    }
}

/// Payload for creating an exemption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExemption {
    pub metric: String,
    #[serde(default)]
    pub keep_labels: Vec<String>,
}

impl NewExemption {
    /// Payload for `metric` protecting `keep_labels`.
    pub fn new(metric: impl Into<String>, keep_labels: Vec<String>) -> Self {
        Self { metric: metric.into(), keep_labels }
    }
}
