//! Aggregation rules and recommendations
//!
//! Optional fields follow the service's omit-if-zero convention: an empty
//! string, an empty list or `false` is left out of the JSON entirely, and an
//! absent field decodes back to its zero value. A present-but-empty list and an
//! absent list are therefore indistinguishable after decoding.

use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Server-side policy describing how one metric is aggregated or dropped.
///
/// `metric` is the key of the rule within the rules collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationRule {
    pub metric: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub match_type: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub drop: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keep_labels: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub drop_labels: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aggregations: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub aggregation_interval: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub aggregation_delay: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub ingest: bool,
}

impl AggregationRule {
    /// Rule for `metric` with every other field at its zero value.
    pub fn new(metric: impl Into<String>) -> Self {
        Self { metric: metric.into(), ..Default::default() }
    }
}

/// A server-computed suggested rule. Read-only from the client's side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationRecommendation {
    #[serde(flatten)]
    pub rule: AggregationRule,
}

impl From<AggregationRecommendation> for AggregationRule {
    fn from(value: AggregationRecommendation) -> Self {
        value.rule
    }
}

/// Global label-retention policy feeding the recommendation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationRecommendationConfiguration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keep_labels: Vec<String>,
}
