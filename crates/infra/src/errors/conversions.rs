//! Conversions from external infrastructure errors into domain errors.

use adaptive_metrics_domain::AdaptiveMetricsError;
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AdaptiveMetricsError);

impl From<InfraError> for AdaptiveMetricsError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AdaptiveMetricsError> for InfraError {
    fn from(value: AdaptiveMetricsError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDomainError {
    fn into_domain(self) -> AdaptiveMetricsError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → AdaptiveMetricsError */
/* -------------------------------------------------------------------------- */

impl IntoDomainError for HttpError {
    fn into_domain(self) -> AdaptiveMetricsError {
        if self.is_builder() {
            return AdaptiveMetricsError::InvalidRequest(format!("failed to build request: {self}"));
        }

        // Callers that know the configured deadline map timeouts themselves.
        if self.is_timeout() {
            return AdaptiveMetricsError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return AdaptiveMetricsError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_body() || self.is_decode() {
            return AdaptiveMetricsError::Network(format!("failed to read HTTP response: {self}"));
        }

        AdaptiveMetricsError::Network(format!("HTTP request failed: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_domain())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → AdaptiveMetricsError */
/* -------------------------------------------------------------------------- */

impl IntoDomainError for UrlError {
    fn into_domain(self) -> AdaptiveMetricsError {
        AdaptiveMetricsError::Config(format!("invalid base URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_domain())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
