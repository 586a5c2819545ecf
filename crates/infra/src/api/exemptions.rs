//! Exemption operations
//!
//! Exemptions are keyed by a server-generated id and carry no version token,
//! so updates are last-writer-wins. Responses wrap the exemption in
//! `{"result": ...}`; requests do not.

use adaptive_metrics_domain::{Exemption, NewExemption, Result};
use tracing::{debug, instrument};

use super::client::Scope;
use super::envelope::{Envelope, ResultEnvelope};
use super::paths;
use crate::http::HttpRequest;

type Payload = ResultEnvelope;

/// Exemption operations, reached via [`AdaptiveMetricsClient::exemptions`](super::AdaptiveMetricsClient::exemptions).
#[derive(Clone)]
pub struct ExemptionsApi<'a> {
    scope: Scope<'a>,
}

impl<'a> ExemptionsApi<'a> {
    pub(crate) fn new(scope: Scope<'a>) -> Self {
        Self { scope }
    }

    /// Create an exemption and return it as stored, including the id and
    /// timestamps the service assigned.
    #[instrument(skip(self, exemption), fields(metric = %exemption.metric))]
    pub async fn create(&self, exemption: &NewExemption) -> Result<Exemption> {
        let request = HttpRequest::post(paths::EXEMPTIONS).json(exemption)?;
        let response = self.scope.send(request).await?;
        let created: Exemption = Payload::open(&response)?;

        debug!(id = %created.id, "created exemption");
        Ok(created)
    }

    /// Fetch the exemption with server id `id`.
    #[instrument(skip(self))]
    pub async fn read(&self, id: &str) -> Result<Exemption> {
        let response = self.scope.send(HttpRequest::get(paths::exemption(id)?)).await?;
        Payload::open(&response)
    }

    /// Overwrite the exemption identified by `exemption.id`.
    ///
    /// `created_at`/`updated_at` are sent back exactly as last read. The
    /// service answers without a body; read the exemption again to observe the
    /// values it stored.
    #[instrument(skip(self, exemption), fields(id = %exemption.id))]
    pub async fn update(&self, exemption: &Exemption) -> Result<()> {
        let request = HttpRequest::put(paths::exemption(&exemption.id)?).json(exemption)?;
        self.scope.send(request).await?;
        Ok(())
    }

    /// Remove the exemption with server id `id`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.scope.send(HttpRequest::delete(paths::exemption(id)?)).await?;
        Ok(())
    }
}
