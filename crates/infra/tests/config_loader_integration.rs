//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! building a working client from it.

use std::io::Write;
use std::time::Duration;

use adaptive_metrics_domain::constants::DEFAULT_TIMEOUT_SECS;
use adaptive_metrics_domain::{AdaptiveMetricsError, AuthMode};
use adaptive_metrics_infra::{config, AdaptiveMetricsClient};
use tempfile::NamedTempFile;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(suffix: &str, contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");
    temp_file
}

#[test]
fn test_load_config_from_json_file() {
    let file = write_config(
        ".json",
        r#"{
            "url": "https://metrics.example.com/api",
            "api_key": "test-api-key-123",
            "timeout_secs": 15,
            "user_agent": "integration-test/1.0"
        }"#,
    );

    let result = config::load_from_file(Some(file.path().to_path_buf()));
    assert!(result.is_ok(), "Failed to load config from JSON file: {:?}", result.err());

    let config = result.unwrap();
    assert_eq!(config.base_url, "https://metrics.example.com/api");
    assert_eq!(config.auth, AuthMode::ApiKey("test-api-key-123".into()));
    assert_eq!(config.timeout, Duration::from_secs(15));
    assert_eq!(config.user_agent, "integration-test/1.0");
}

#[test]
fn test_load_config_from_toml_file() {
    let file = write_config(
        ".toml",
        r#"
url = "http://localhost:9090"

[http_headers]
X-Scope-OrgID = "9960"
"#,
    );

    let config = config::load_from_file(Some(file.path().to_path_buf()))
        .expect("Failed to load config from TOML file");

    match config.auth {
        AuthMode::Headers(headers) => assert_eq!(headers["X-Scope-OrgID"], "9960"),
        other => panic!("expected header auth, got {other:?}"),
    }
}

#[test]
fn test_load_config_with_minimal_fields() {
    let file = write_config(".json", r#"{ "url": "http://localhost:9090" }"#);

    let config = config::load_from_file(Some(file.path().to_path_buf()))
        .expect("Failed to load config with minimal fields");

    assert_eq!(config.auth, AuthMode::Anonymous);
    assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
}

#[test]
fn test_load_config_rejects_both_auth_modes() {
    let file = write_config(
        ".json",
        r#"{ "url": "http://localhost", "api_key": "k", "http_headers": { "a": "b" } }"#,
    );

    match config::load_from_file(Some(file.path().to_path_buf())) {
        Err(AdaptiveMetricsError::Config(msg)) => assert!(msg.contains("mutually exclusive")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_from_nonexistent_file() {
    let result = config::load_from_file(Some("/nonexistent/path/config.json".into()));

    match result {
        Err(AdaptiveMetricsError::Config(msg)) => {
            assert!(msg.contains("not found"), "Error message should mention 'not found'");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_with_invalid_format() {
    let file = write_config(".json", r#"{ "this is": "not valid" "#);

    match config::load_from_file(Some(file.path().to_path_buf())) {
        Err(AdaptiveMetricsError::Config(msg)) => {
            assert!(msg.contains("Invalid JSON"), "Error message should mention invalid JSON");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_built_from_file_authenticates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/aggregations/recommendations/config"))
        .and(header("Authorization", "Bearer from-file"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let file = write_config(
        ".toml",
        &format!("url = \"{}\"\napi_key = \"from-file\"\n", server.uri()),
    );
    let config = config::load_from_file(Some(file.path().to_path_buf())).unwrap();

    let client = AdaptiveMetricsClient::new(config).unwrap();
    client.recommendations().config().await.unwrap();
}
