//! Aggregation rule operations
//!
//! The rules collection and the rules in it are versioned with an ETag. Every
//! read returns the current token, and every write must present the latest
//! token as `If-Match` and returns the new one. A stale token is rejected by the
//! service (409/412) and surfaced unchanged; re-reading and retrying is up to
//! the caller.

use adaptive_metrics_domain::{AggregationRule, ETag, Result, Versioned};
use tracing::{debug, instrument};

use super::client::Scope;
use super::envelope::{Bare, Envelope};
use super::paths;
use crate::http::HttpRequest;

type Payload = Bare;

/// Rule operations, reached via [`AdaptiveMetricsClient::rules`](super::AdaptiveMetricsClient::rules).
#[derive(Clone)]
pub struct RulesApi<'a> {
    scope: Scope<'a>,
}

impl<'a> RulesApi<'a> {
    pub(crate) fn new(scope: Scope<'a>) -> Self {
        Self { scope }
    }

    /// Fetch the whole rules collection and its version.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Versioned<Vec<AggregationRule>>> {
        let response = self.scope.send(HttpRequest::get(paths::RULES)).await?;
        let rules: Vec<AggregationRule> = Payload::open(&response)?;
        let etag = response.etag()?;

        debug!(count = rules.len(), "listed aggregation rules");
        Ok(Versioned::new(rules, etag))
    }

    /// Replace the whole rules collection.
    ///
    /// Returns the collection's new version.
    ///
    /// # Errors
    ///
    /// A `Decode` error for a response without an `ETag` header is reported
    /// after the service accepted the write: the change is applied, only the
    /// new version is unknown. Re-read to obtain it rather than repeating the
    /// write with the old token.
    #[instrument(skip(self, rules, etag), fields(count = rules.len()))]
    pub async fn replace_all(&self, rules: &[AggregationRule], etag: &ETag) -> Result<ETag> {
        let request = HttpRequest::post(paths::RULES).json(rules)?;
        self.conditional_write(request, etag).await
    }

    /// Add a rule keyed by `rule.metric` and return the new version.
    ///
    /// # Errors
    ///
    /// As for [`replace_all`](Self::replace_all), a `Decode` error about a
    /// missing `ETag` means the write was applied.
    #[instrument(skip(self, rule, etag), fields(metric = %rule.metric))]
    pub async fn create(&self, rule: &AggregationRule, etag: &ETag) -> Result<ETag> {
        let request = HttpRequest::post(paths::rule(&rule.metric)?).json(rule)?;
        self.conditional_write(request, etag).await
    }

    /// Fetch one rule and its version.
    #[instrument(skip(self))]
    pub async fn read(&self, metric: &str) -> Result<Versioned<AggregationRule>> {
        let response = self.scope.send(HttpRequest::get(paths::rule(metric)?)).await?;
        let rule: AggregationRule = Payload::open(&response)?;
        let etag = response.etag()?;

        debug!("read aggregation rule");
        Ok(Versioned::new(rule, etag))
    }

    /// Overwrite the rule keyed by `rule.metric` and return the new version.
    ///
    /// # Errors
    ///
    /// As for [`replace_all`](Self::replace_all), a `Decode` error about a
    /// missing `ETag` means the write was applied.
    #[instrument(skip(self, rule, etag), fields(metric = %rule.metric))]
    pub async fn update(&self, rule: &AggregationRule, etag: &ETag) -> Result<ETag> {
        let request = HttpRequest::put(paths::rule(&rule.metric)?).json(rule)?;
        self.conditional_write(request, etag).await
    }

    /// Remove the rule for `metric` and return the new version.
    ///
    /// # Errors
    ///
    /// As for [`replace_all`](Self::replace_all), a `Decode` error about a
    /// missing `ETag` means the write was applied.
    #[instrument(skip(self, etag))]
    pub async fn delete(&self, metric: &str, etag: &ETag) -> Result<ETag> {
        let request = HttpRequest::delete(paths::rule(metric)?);
        self.conditional_write(request, etag).await
    }

    /// Send a mutation guarded by `If-Match` and return the new ETag. Any
    /// response body is ignored.
    async fn conditional_write(&self, request: HttpRequest, etag: &ETag) -> Result<ETag> {
        let response = self.scope.send(request.if_match(etag)?).await?;
        let new_etag = response.etag()?;

        debug!(status = %response.status, "conditional write accepted");
        Ok(new_etag)
    }
}
