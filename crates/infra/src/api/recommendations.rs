//! Recommendation operations
//!
//! Recommendations are computed by the service and read-only. The
//! recommendation configuration is a singleton that is read and overwritten
//! without version tokens.

use adaptive_metrics_domain::{
    AggregationRecommendation, AggregationRecommendationConfiguration, Result,
};
use tracing::{debug, instrument};

use super::client::Scope;
use super::envelope::{Bare, Envelope};
use super::paths;
use crate::http::HttpRequest;

type Payload = Bare;

/// Recommendation operations, reached via [`AdaptiveMetricsClient::recommendations`](super::AdaptiveMetricsClient::recommendations).
#[derive(Clone)]
pub struct RecommendationsApi<'a> {
    scope: Scope<'a>,
}

impl<'a> RecommendationsApi<'a> {
    pub(crate) fn new(scope: Scope<'a>) -> Self {
        Self { scope }
    }

    /// Fetch the current aggregation recommendations.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<AggregationRecommendation>> {
        let response = self.scope.send(HttpRequest::get(paths::RECOMMENDATIONS)).await?;
        let recommendations: Vec<AggregationRecommendation> = Payload::open(&response)?;

        debug!(count = recommendations.len(), "listed aggregation recommendations");
        Ok(recommendations)
    }

    /// Fetch the recommendation configuration.
    #[instrument(skip(self))]
    pub async fn config(&self) -> Result<AggregationRecommendationConfiguration> {
        let response = self.scope.send(HttpRequest::get(paths::RECOMMENDATIONS_CONFIG)).await?;
        Payload::open(&response)
    }

    /// Overwrite the recommendation configuration. Any response body is ignored.
    #[instrument(skip(self, config), fields(keep_labels = config.keep_labels.len()))]
    pub async fn update_config(&self, config: &AggregationRecommendationConfiguration) -> Result<()> {
        let request = HttpRequest::post(paths::RECOMMENDATIONS_CONFIG).json(config)?;
        self.scope.send(request).await?;

        debug!("updated recommendation configuration");
        Ok(())
    }
}
