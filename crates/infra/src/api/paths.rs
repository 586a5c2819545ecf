//! Endpoint paths of the aggregation service.

use adaptive_metrics_domain::{AdaptiveMetricsError, Result};

pub const RECOMMENDATIONS: &str = "/aggregations/recommendations";
pub const RECOMMENDATIONS_CONFIG: &str = "/aggregations/recommendations/config";
pub const RULES: &str = "/aggregations/rules";
pub const RULE: &str = "/aggregations/rule";
pub const EXEMPTIONS: &str = "/v1/recommendations/exemptions";

/// `prefix/<segment>`, with `segment` percent-encoded outside the unreserved set.
///
/// # Errors
///
/// An empty segment would address the parent endpoint, and URL normalization
/// resolves `.` and `..` (encoded or not) the same way, so all three are
/// rejected with `AdaptiveMetricsError::InvalidRequest`.
pub fn with_segment(prefix: &str, kind: &str, segment: &str) -> Result<String> {
    if segment.is_empty() {
        return Err(AdaptiveMetricsError::InvalidRequest(format!("{kind} must not be empty")));
    }
    if segment == "." || segment == ".." {
        return Err(AdaptiveMetricsError::InvalidRequest(format!(
            "{kind} '{segment}' is not addressable"
        )));
    }
    Ok(format!("{prefix}/{}", urlencoding::encode(segment)))
}

/// `/aggregations/rule/<metric>`.
pub fn rule(metric: &str) -> Result<String> {
    with_segment(RULE, "metric", metric)
}

/// `/v1/recommendations/exemptions/<id>`.
pub fn exemption(id: &str) -> Result<String> {
    with_segment(EXEMPTIONS, "exemption id", id)
}
