//! Client configuration
//!
//! `ClientSettings` is the loose form read from files and the environment.
//! `ClientConfig` is the validated form a client is built from; its
//! authentication mode is a single tagged value, so "API key and custom
//! headers at once" cannot be represented.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::errors::{AdaptiveMetricsError, Result};

/// Headers attached to every request a client sends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// No authentication headers (e.g. behind an authenticating proxy).
    #[default]
    Anonymous,
    /// Sent as `Authorization: Bearer <key>`.
    ApiKey(String),
    /// Arbitrary header name to value pairs, sent verbatim.
    Headers(BTreeMap<String, String>),
}

/// Validated configuration for building a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the service, e.g. `https://metrics.example.com/api`
    pub base_url: String,
    pub auth: AuthMode,
    /// Upper bound for a whole request/response exchange
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Anonymous config for `base_url` with default timeout and user agent.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: AuthMode::Anonymous,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the authentication mode.
    pub fn with_auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    /// Authenticate with `Authorization: Bearer <api_key>`.
    pub fn with_api_key(self, api_key: impl Into<String>) -> Self {
        self.with_auth(AuthMode::ApiKey(api_key.into()))
    }

    /// Send these headers verbatim instead of an API key.
    pub fn with_headers<I, K, V>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let headers = headers.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.with_auth(AuthMode::Headers(headers))
    }

    /// Set the client-wide request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Unvalidated settings as they appear in a config file or the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl TryFrom<ClientSettings> for ClientConfig {
    type Error = AdaptiveMetricsError;

    fn try_from(settings: ClientSettings) -> Result<Self> {
        if settings.url.trim().is_empty() {
            return Err(AdaptiveMetricsError::Config("url must not be empty".into()));
        }

        let api_key = settings.api_key.filter(|key| !key.trim().is_empty());
        let headers = settings.http_headers.filter(|headers| !headers.is_empty());

        let auth = match (api_key, headers) {
            (Some(_), Some(_)) => {
                return Err(AdaptiveMetricsError::Config(
                    "api_key and http_headers are mutually exclusive".into(),
                ))
            }
            (Some(key), None) => AuthMode::ApiKey(key),
            (None, Some(headers)) => AuthMode::Headers(headers),
            (None, None) => AuthMode::Anonymous,
        };

        let mut config = Self::new(settings.url).with_auth(auth);
        if let Some(secs) = settings.timeout_secs {
            if secs == 0 {
                return Err(AdaptiveMetricsError::Config("timeout_secs must be positive".into()));
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = settings.user_agent {
            config = config.with_user_agent(agent);
        }

        Ok(config)
    }
}
