//! Authentication headers
//!
//! Turns the configured [`AuthMode`] into the default header set attached to
//! every request. Tokens are used verbatim; acquiring or refreshing them is
//! the caller's business.

use adaptive_metrics_domain::{AdaptiveMetricsError, AuthMode, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};

/// Build the default headers for `auth`.
///
/// # Errors
///
/// Returns `AdaptiveMetricsError::Config` if a header name or value cannot be
/// sent over HTTP.
pub fn default_headers(auth: &AuthMode) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    match auth {
        AuthMode::Anonymous => {}
        AuthMode::ApiKey(key) => {
            let mut value = HeaderValue::from_str(&format!("Bearer {key}")).map_err(|_| {
                AdaptiveMetricsError::Config("API key contains invalid header characters".into())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        AuthMode::Headers(custom) => {
            for (name, value) in custom {
                let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                    AdaptiveMetricsError::Config(format!("invalid header name '{name}': {e}"))
                })?;
                let header_value = HeaderValue::from_str(value).map_err(|e| {
                    AdaptiveMetricsError::Config(format!("invalid value for header '{name}': {e}"))
                })?;
                headers.insert(header_name, header_value);
            }
        }
    }

    Ok(headers)
}
