//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `ADAPTIVE_METRICS_URL` is set, loads from environment variables only
//! 2. Otherwise, loads from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `ADAPTIVE_METRICS_URL`: Base URL of the service (required)
//! - `ADAPTIVE_METRICS_API_KEY`: API key sent as a bearer token
//! - `ADAPTIVE_METRICS_HTTP_HEADERS`: JSON object of extra headers, e.g.
//!   `{"X-Scope-OrgID": "9960"}`
//! - `ADAPTIVE_METRICS_TIMEOUT_SECS`: Request timeout in seconds
//! - `ADAPTIVE_METRICS_USER_AGENT`: User-Agent override
//!
//! `API_KEY` and `HTTP_HEADERS` are mutually exclusive.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./adaptive-metrics.json` or `./adaptive-metrics.toml`
//! 2. `./config.json` or `./config.toml`
//! 3. The same names in the parent and grandparent directories

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use adaptive_metrics_domain::constants::{
    ENV_API_KEY, ENV_HTTP_HEADERS, ENV_TIMEOUT_SECS, ENV_URL, ENV_USER_AGENT,
};
use adaptive_metrics_domain::{AdaptiveMetricsError, ClientConfig, ClientSettings, Result};

const FILE_STEMS: [&str; 2] = ["adaptive-metrics", "config"];
const FILE_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Load configuration with automatic fallback strategy
///
/// Loads from environment variables when `ADAPTIVE_METRICS_URL` is set, and
/// from a config file otherwise. Once the URL is set the environment is the
/// only source: an invalid or conflicting environment is an error, never a
/// reason to read a file instead.
///
/// # Errors
/// Returns `AdaptiveMetricsError::Config` if:
/// - The environment is selected and any variable is invalid
/// - No config file is found, or the file format is invalid
/// - Both an API key and custom headers are configured
pub fn load() -> Result<ClientConfig> {
    let cwd = std::env::current_dir().map_err(|e| {
        AdaptiveMetricsError::Config(format!("Failed to resolve working directory: {e}"))
    })?;
    load_in(&cwd)
}

fn load_in(dir: &Path) -> Result<ClientConfig> {
    if std::env::var_os(ENV_URL).is_none() {
        tracing::debug!(var = ENV_URL, "Environment URL not set, trying file");
        let path = probe_from(dir).ok_or_else(|| {
            AdaptiveMetricsError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?;
        return load_from_file(Some(path));
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `AdaptiveMetricsError::Config` if `ADAPTIVE_METRICS_URL` is
/// missing or any variable has an invalid value.
pub fn load_from_env() -> Result<ClientConfig> {
    let url = env_var(ENV_URL)?;

    let http_headers = optional_env_var(ENV_HTTP_HEADERS)
        .map(|raw| {
            serde_json::from_str::<BTreeMap<String, String>>(&raw).map_err(|e| {
                AdaptiveMetricsError::Config(format!("Invalid {ENV_HTTP_HEADERS}: {e}"))
            })
        })
        .transpose()?;

    let timeout_secs = optional_env_var(ENV_TIMEOUT_SECS)
        .map(|raw| {
            raw.trim().parse::<u64>().map_err(|e| {
                AdaptiveMetricsError::Config(format!("Invalid {ENV_TIMEOUT_SECS}: {e}"))
            })
        })
        .transpose()?;

    ClientConfig::try_from(ClientSettings {
        url,
        api_key: optional_env_var(ENV_API_KEY),
        http_headers,
        timeout_secs,
        user_agent: optional_env_var(ENV_USER_AGENT),
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `AdaptiveMetricsError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AdaptiveMetricsError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AdaptiveMetricsError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AdaptiveMetricsError::Config(format!("Failed to read config file: {e}")))?;

    ClientConfig::try_from(parse_settings(&contents, &config_path)?)
}

/// Parse settings from file contents; the format follows the extension.
fn parse_settings(contents: &str, path: &Path) -> Result<ClientSettings> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AdaptiveMetricsError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AdaptiveMetricsError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(AdaptiveMetricsError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    probe_from(&cwd)
}

fn probe_from(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .take(3)
        .flat_map(|base| {
            FILE_STEMS.iter().flat_map(move |stem| {
                FILE_EXTENSIONS.iter().map(move |ext| base.join(format!("{stem}.{ext}")))
            })
        })
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `AdaptiveMetricsError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        AdaptiveMetricsError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Optional environment variable; blank values count as unset.
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;
    use std::time::Duration;

    use adaptive_metrics_domain::AuthMode;
    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 5] =
        [ENV_URL, ENV_API_KEY, ENV_HTTP_HEADERS, ENV_TIMEOUT_SECS, ENV_USER_AGENT];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_env_with_api_key() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_URL, "https://metrics.example.com");
        std::env::set_var(ENV_API_KEY, "apikey");
        std::env::set_var(ENV_TIMEOUT_SECS, "12");

        let result = load_from_env();
        assert!(result.is_ok(), "Should load config from env vars, error: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.base_url, "https://metrics.example.com");
        assert_eq!(config.auth, AuthMode::ApiKey("apikey".into()));
        assert_eq!(config.timeout, Duration::from_secs(12));

        clear_env();
    }

    #[test]
    fn test_load_from_env_with_headers() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_URL, "https://metrics.example.com");
        std::env::set_var(ENV_HTTP_HEADERS, r#"{"X-Scope-OrgID":"9960"}"#);

        let config = load_from_env().unwrap();
        match config.auth {
            AuthMode::Headers(headers) => assert_eq!(headers["X-Scope-OrgID"], "9960"),
            other => panic!("expected headers, got {:?}", other),
        }

        clear_env();
    }

    #[test]
    fn test_load_from_env_rejects_both_auth_modes() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_URL, "https://metrics.example.com");
        std::env::set_var(ENV_API_KEY, "apikey");
        std::env::set_var(ENV_HTTP_HEADERS, r#"{"X-Scope-OrgID":"9960"}"#);

        assert!(matches!(load_from_env(), Err(AdaptiveMetricsError::Config(_))));

        clear_env();
    }

    #[test]
    fn test_load_from_env_invalid_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_URL, "https://metrics.example.com");
        std::env::set_var(ENV_TIMEOUT_SECS, "soon");
        assert!(load_from_env().is_err());

        std::env::remove_var(ENV_TIMEOUT_SECS);
        std::env::set_var(ENV_HTTP_HEADERS, "not-json");
        assert!(load_from_env().is_err());

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_url() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        match load_from_env() {
            Err(AdaptiveMetricsError::Config(msg)) => assert!(msg.contains(ENV_URL)),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_settings_by_extension() {
        let json = parse_settings(r#"{"url":"http://a"}"#, Path::new("x.json")).unwrap();
        assert_eq!(json.url, "http://a");

        let toml = parse_settings("url = \"http://b\"\napi_key = \"k\"\n", Path::new("x.toml"))
            .unwrap();
        assert_eq!(toml.api_key.as_deref(), Some("k"));

        assert!(parse_settings("url: x", Path::new("x.yaml")).is_err());
    }

    #[test]
    fn test_load_from_file_missing_path() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/adaptive-metrics.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_explicit_toml_file() {
        let mut temp_file = NamedTempFile::with_suffix(".toml").expect("temp file");
        writeln!(
            temp_file,
            "url = \"http://localhost:9090\"\ntimeout_secs = 3\n\n[http_headers]\nX-Scope-OrgID = \"9960\""
        )
        .unwrap();

        let config = load_from_file(Some(temp_file.path().to_path_buf())).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(matches!(config.auth, AuthMode::Headers(_)));
    }

    #[test]
    fn test_probe_prefers_named_file_in_closest_directory() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a");
        std::fs::create_dir_all(&nested).unwrap();

        std::fs::write(root.path().join("adaptive-metrics.json"), "{}").unwrap();
        assert_eq!(probe_from(&nested), Some(root.path().join("adaptive-metrics.json")));

        std::fs::write(nested.join("config.toml"), "").unwrap();
        assert_eq!(probe_from(&nested), Some(nested.join("config.toml")));
    }

    fn dir_with_file_config() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("adaptive-metrics.json"), r#"{"url":"http://from-file"}"#)
            .unwrap();
        dir
    }

    #[test]
    fn test_load_reports_env_conflict_instead_of_reading_file() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        let dir = dir_with_file_config();

        std::env::set_var(ENV_URL, "https://from-env");
        std::env::set_var(ENV_API_KEY, "apikey");
        std::env::set_var(ENV_HTTP_HEADERS, r#"{"X-Scope-OrgID":"9960"}"#);

        match load_in(dir.path()) {
            Err(AdaptiveMetricsError::Config(msg)) => assert!(msg.contains("mutually exclusive")),
            other => panic!("expected config error, got {:?}", other),
        }

        clear_env();
    }

    #[test]
    fn test_load_reports_invalid_env_values_instead_of_reading_file() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        let dir = dir_with_file_config();

        std::env::set_var(ENV_URL, "https://from-env");
        std::env::set_var(ENV_TIMEOUT_SECS, "soon");
        assert!(matches!(load_in(dir.path()), Err(AdaptiveMetricsError::Config(_))));

        std::env::remove_var(ENV_TIMEOUT_SECS);
        std::env::set_var(ENV_HTTP_HEADERS, "not-json");
        assert!(matches!(load_in(dir.path()), Err(AdaptiveMetricsError::Config(_))));

        clear_env();
    }

    #[test]
    fn test_load_prefers_env_when_url_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        let dir = dir_with_file_config();

        std::env::set_var(ENV_URL, "https://from-env");
        std::env::set_var(ENV_API_KEY, "apikey");

        let config = load_in(dir.path()).unwrap();
        assert_eq!(config.base_url, "https://from-env");
        assert_eq!(config.auth, AuthMode::ApiKey("apikey".into()));

        clear_env();
    }

    #[test]
    fn test_load_falls_back_to_file_only_without_url() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        let dir = dir_with_file_config();

        let config = load_in(dir.path()).unwrap();
        assert_eq!(config.base_url, "http://from-file");
        assert_eq!(config.auth, AuthMode::Anonymous);
    }
}
