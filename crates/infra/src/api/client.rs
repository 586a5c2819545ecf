//! Aggregation service client
//!
//! The client holds one transport and one fixed set of default headers, both
//! decided at construction. Operations are grouped by resource kind and reached
//! through [`AdaptiveMetricsClient::rules`], [`AdaptiveMetricsClient::recommendations`]
//! and [`AdaptiveMetricsClient::exemptions`], or through a [`Scope`] carrying a
//! per-call deadline or cancellation token.

use adaptive_metrics_domain::{AuthMode, ClientConfig, ClientSettings, Result};
use tracing::debug;

use super::auth::default_headers;
use super::exemptions::ExemptionsApi;
use super::recommendations::RecommendationsApi;
use super::rules::RulesApi;
use crate::http::{CallOptions, HttpClient, HttpRequest, HttpResponse};

/// Client for the aggregation control API.
#[derive(Clone)]
pub struct AdaptiveMetricsClient {
    http: HttpClient,
}

impl AdaptiveMetricsClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns `AdaptiveMetricsError::Config` if the base URL is invalid, an
    /// auth header cannot be encoded, or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let auth_kind = match &config.auth {
            AuthMode::Anonymous => "anonymous",
            AuthMode::ApiKey(_) => "api_key",
            AuthMode::Headers(_) => "headers",
        };

        let http = HttpClient::builder(config.base_url)
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .default_headers(default_headers(&config.auth)?)
            .build()?;

        debug!(base_url = %http.base_url(), auth = auth_kind, "aggregation client created");

        Ok(Self { http })
    }

    /// Create a client from loosely typed settings (file or environment).
    pub fn from_settings(settings: ClientSettings) -> Result<Self> {
        Self::new(ClientConfig::try_from(settings)?)
    }

    /// Wrap an already configured transport.
    pub fn with_http_client(http: HttpClient) -> Self {
        Self { http }
    }

    /// The underlying transport.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Bind subsequent operations to a deadline and/or cancellation token.
    pub fn with_options(&self, options: CallOptions) -> Scope<'_> {
        Scope { http: &self.http, options }
    }

    /// Aggregation rules, as a collection and one by one.
    pub fn rules(&self) -> RulesApi<'_> {
        self.with_options(CallOptions::default()).rules()
    }

    /// Recommendations and the recommendation configuration.
    pub fn recommendations(&self) -> RecommendationsApi<'_> {
        self.with_options(CallOptions::default()).recommendations()
    }

    /// Recommendation exemptions.
    pub fn exemptions(&self) -> ExemptionsApi<'_> {
        self.with_options(CallOptions::default()).exemptions()
    }
}

/// Operations bound to a set of [`CallOptions`].
#[derive(Clone)]
pub struct Scope<'a> {
    http: &'a HttpClient,
    options: CallOptions,
}

impl<'a> Scope<'a> {
    /// Options applied to every call made through this scope.
    pub fn options(&self) -> &CallOptions {
        &self.options
    }

    /// Rule operations bound to this scope.
    pub fn rules(self) -> RulesApi<'a> {
        RulesApi::new(self)
    }

    /// Recommendation operations bound to this scope.
    pub fn recommendations(self) -> RecommendationsApi<'a> {
        RecommendationsApi::new(self)
    }

    /// Exemption operations bound to this scope.
    pub fn exemptions(self) -> ExemptionsApi<'a> {
        ExemptionsApi::new(self)
    }

    pub(crate) async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.http.send(request, &self.options).await
    }
}
