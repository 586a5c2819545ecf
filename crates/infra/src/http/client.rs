use std::time::Duration;

use adaptive_metrics_domain::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use adaptive_metrics_domain::{AdaptiveMetricsError, Result};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::Client as ReqwestClient;
use tokio::time::Instant;
use tracing::{debug, instrument};

use super::message::{HttpRequest, HttpResponse};
use super::options::CallOptions;
use crate::errors::InfraError;

/// HTTP transport bound to one base URL and one set of default headers.
///
/// Owns a single connection pool. Cloning is cheap and clones share the pool;
/// nothing on the client changes after construction, so concurrent callers
/// never contend on client state.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client for `base_url`.
    pub fn builder(base_url: impl Into<String>) -> HttpClientBuilder {
        HttpClientBuilder::new(base_url)
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a request path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Perform one request/response exchange.
    ///
    /// Returns the response when the status is 2xx. Any other status becomes
    /// `AdaptiveMetricsError::Status` carrying the body text. Connectivity
    /// problems, deadlines and cancellation are reported as transport errors.
    /// Nothing is retried.
    #[instrument(skip(self, request, options), fields(method = %request.method, path = %request.path))]
    pub async fn send(&self, request: HttpRequest, options: &CallOptions) -> Result<HttpResponse> {
        let start = Instant::now();
        let deadline = options.effective_deadline(start);

        let exchange = async {
            match deadline {
                Some(deadline) => {
                    match tokio::time::timeout_at(deadline, self.exchange(request)).await {
                        Ok(result) => result,
                        Err(_) => {
                            let budget = deadline.saturating_duration_since(start);
                            debug!(?budget, "HTTP request exceeded its deadline");
                            Err(AdaptiveMetricsError::Timeout(budget))
                        }
                    }
                }
                None => self.exchange(request).await,
            }
        };

        match &options.cancellation {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => {
                    debug!("HTTP request cancelled by caller");
                    Err(AdaptiveMetricsError::Cancelled)
                }
                result = exchange => result,
            },
            None => exchange.await,
        }
    }

    async fn exchange(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest { method, path, headers, body } = request;
        let url = self.url_for(&path);

        debug!(%method, %url, "sending HTTP request");

        let mut builder = self.client.request(method.clone(), &url).headers(headers);
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await.map_err(|err| self.map_transport_error(err))?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let bytes = response.bytes().await.map_err(|err| self.map_transport_error(err))?;

        debug!(%method, %url, %status, bytes = bytes.len(), "received HTTP response");

        if !status.is_success() {
            return Err(AdaptiveMetricsError::Status {
                status: status.as_u16(),
                method: method.to_string(),
                path,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(HttpResponse { method, path, status, headers: response_headers, body: bytes.to_vec() })
    }

    fn map_transport_error(&self, err: reqwest::Error) -> AdaptiveMetricsError {
        debug!(error = %err, "HTTP request failed");

        if err.is_timeout() {
            return AdaptiveMetricsError::Timeout(self.timeout);
        }

        InfraError::from(err).into()
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    default_headers: HeaderMap,
}

impl HttpClientBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers: HeaderMap::new(),
        }
    }

    /// Client-wide timeout for one exchange.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `User-Agent` sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Headers sent with every request unless the request sets the same name.
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    /// Validate the base URL and build the client.
    pub fn build(self) -> Result<HttpClient> {
        let parsed = url::Url::parse(&self.base_url).map_err(InfraError::from)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AdaptiveMetricsError::Config(format!(
                "unsupported URL scheme '{}' in {}",
                parsed.scheme(),
                self.base_url
            )));
        }

        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .default_headers(self.default_headers)
            .no_proxy()
            .build()
            .map_err(|e| AdaptiveMetricsError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(HttpClient {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            timeout: self.timeout,
        })
    }
}
