//! Shared fixtures for the integration tests.

use adaptive_metrics_domain::{AggregationRule, ClientConfig};
use adaptive_metrics_infra::AdaptiveMetricsClient;
use wiremock::MockServer;

pub const ETAG: &str = "\"fake-etag\"";
pub const UPDATED_ETAG: &str = "\"updated-fake-etag\"";

/// Wire form of [`rules_payload`].
pub const MINIFIED_RULES: &str = r#"[{"metric":"kube_persistentvolumeclaim_created","drop_labels":["persistentvolumeclaim"],"aggregations":["count","sum"]},{"metric":"kube_persistentvolumeclaim_resource_requests_storage_bytes","drop_labels":["persistentvolumeclaim"],"aggregations":["count","sum"]}]"#;

pub const EXEMPTION: &str = r#"{"id":"generated-ulid","metric":"test_metric","keep_labels":["foobar"],"created_at":"0001-01-01T00:00:00Z","updated_at":"0001-01-01T00:00:00Z"}"#;

pub fn rules_payload() -> Vec<AggregationRule> {
    [
        "kube_persistentvolumeclaim_created",
        "kube_persistentvolumeclaim_resource_requests_storage_bytes",
    ]
    .into_iter()
    .map(|metric| AggregationRule {
        drop_labels: vec!["persistentvolumeclaim".into()],
        aggregations: vec!["count".into(), "sum".into()],
        ..AggregationRule::new(metric)
    })
    .collect()
}

pub fn client_for(server: &MockServer) -> AdaptiveMetricsClient {
    client_with(ClientConfig::new(server.uri()))
}

pub fn client_with(config: ClientConfig) -> AdaptiveMetricsClient {
    AdaptiveMetricsClient::new(config).expect("client should build for mock server")
}

/// Install a `tracing` subscriber once so `#[instrument]` spans are exercised.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_env_filter("debug").try_init();
}
