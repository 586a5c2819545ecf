//! Per-call deadline and cancellation controls.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Limits applied to a single request/response exchange.
///
/// These come on top of the client-wide timeout. Whichever limit is hit first
/// aborts the in-flight request.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Maximum duration of the exchange, measured from the moment it starts
    pub timeout: Option<Duration>,
    /// Absolute point in time after which the exchange is abandoned
    pub deadline: Option<Instant>,
    /// Aborts the exchange with `Cancelled` when triggered
    pub cancellation: Option<CancellationToken>,
}

impl CallOptions {
    /// No per-call limits; only the client-wide timeout applies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the exchange after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Abort the exchange at `deadline`.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Abort the exchange when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Earliest of the relative timeout and the absolute deadline.
    pub(crate) fn effective_deadline(&self, start: Instant) -> Option<Instant> {
        let relative = self.timeout.map(|timeout| start + timeout);
        match (relative, self.deadline) {
            (Some(relative), Some(absolute)) => Some(relative.min(absolute)),
            (relative, absolute) => relative.or(absolute),
        }
    }
}
