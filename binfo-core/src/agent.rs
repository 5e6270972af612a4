//! Agent facade combining resolver and formatter, with optional revision.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::warn;

use crate::format::{format_found, format_not_found};
use crate::ports::ReviserPort;
use crate::resolver::resolve;
use crate::store::ScheduleStore;

/// Default budget for one revision round-trip.
pub const DEFAULT_REVISION_TIMEOUT: Duration = Duration::from_secs(10);

/// Public entry point turning raw user text into a reply string.
///
/// Holds the immutable schedule store plus, optionally, a reviser
/// capability. There is no per-call state, so one agent can serve any
/// number of concurrent callers.
pub struct Agent {
    store: Arc<ScheduleStore>,
    reviser: Option<Arc<dyn ReviserPort>>,
    revision_timeout: Duration,
}

impl Agent {
    /// Create an agent bound to the given store, without a reviser.
    #[must_use]
    pub fn new(store: Arc<ScheduleStore>) -> Self {
        Self {
            store,
            reviser: None,
            revision_timeout: DEFAULT_REVISION_TIMEOUT,
        }
    }

    /// Attach a reviser capability with a per-call time budget.
    #[must_use]
    pub fn with_reviser(
        mut self,
        reviser: Arc<dyn ReviserPort>,
        revision_timeout: Duration,
    ) -> Self {
        self.reviser = Some(reviser);
        self.revision_timeout = revision_timeout;
        self
    }

    /// Read access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &ScheduleStore {
        &self.store
    }

    /// Deterministic reply for `raw_text`.
    ///
    /// Identical input always yields byte-identical output; safe to call
    /// repeatedly and concurrently.
    #[must_use]
    pub fn handle_query(&self, raw_text: &str) -> String {
        match resolve(&self.store, raw_text) {
            Some(record) => format_found(record),
            None => format_not_found(&self.store),
        }
    }

    /// Reply for `raw_text`, reworded by the reviser when one is attached.
    ///
    /// Any revision failure (backend error, timeout, no reviser configured)
    /// falls back to the unmodified deterministic reply. The fallback is
    /// mandatory: this method never surfaces a reviser problem to the
    /// caller.
    pub async fn handle_query_revised(&self, raw_text: &str) -> String {
        let draft = self.handle_query(raw_text);

        let Some(reviser) = &self.reviser else {
            return draft;
        };

        match timeout(self.revision_timeout, reviser.revise(raw_text, &draft)).await {
            Ok(Ok(revised)) => revised,
            Ok(Err(error)) => {
                warn!(%error, "reviser failed, delivering deterministic reply");
                draft
            }
            Err(_elapsed) => {
                warn!(
                    timeout = ?self.revision_timeout,
                    "reviser timed out, delivering deterministic reply"
                );
                draft
            }
        }
    }
}
