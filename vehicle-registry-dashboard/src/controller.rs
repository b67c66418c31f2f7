//! Fetch orchestration for the dashboard.

use std::sync::Arc;

use vehicle_registry_client::{HighlightCounts, RegistryApi, Result, VehiclePage, VehicleQuery};

use crate::state::{DashboardCommand, DashboardState};

/// A dispatched list fetch: its sequence number and the payload snapshot it
/// was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingFetch {
    seq: u64,
    query: VehicleQuery,
}

/// Owns the dashboard state and decides when the registry must be queried.
///
/// In-flight requests are never cancelled. Each carries a monotonically
/// increasing sequence number instead, and a completion older than the
/// latest dispatched request is discarded, so a slow response built from a
/// stale filter snapshot cannot overwrite newer results.
pub struct DashboardController {
    api: Arc<dyn RegistryApi>,
    state: DashboardState,
    latest_seq: u64,
}

impl DashboardController {
    #[must_use]
    pub fn new(api: Arc<dyn RegistryApi>) -> Self {
        Self {
            api,
            state: DashboardState::default(),
            latest_seq: 0,
        }
    }

    /// Read access for presentations.
    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Mount-time load: highlight counts plus the first unfiltered page.
    pub async fn init(&mut self) {
        self.refresh().await;
    }

    /// Apply a user action; fetch when the reducer requires it.
    pub async fn dispatch(&mut self, command: DashboardCommand) {
        if self.state.apply(&command).is_required() {
            self.refresh().await;
        }
    }

    /// Issue one list fetch and one highlights refresh for the current
    /// snapshot. The highlights request is idempotent and parameterless, so
    /// refreshing it alongside every list fetch only costs an extra POST.
    pub async fn refresh(&mut self) {
        let pending = self.begin_refresh();
        let api = Arc::clone(&self.api);
        let (page, highlights) =
            futures::future::join(api.list_vehicles(&pending.query), api.fetch_highlights()).await;
        self.complete_refresh(pending.seq, page);
        self.apply_highlights(highlights);
    }

    /// Allocate the next sequence number, raise the shared loading flag, and
    /// snapshot the query payload.
    fn begin_refresh(&mut self) -> PendingFetch {
        self.latest_seq += 1;
        self.state.loading = true;
        log::debug!("dispatching list fetch #{}", self.latest_seq);
        PendingFetch {
            seq: self.latest_seq,
            query: self.state.query(),
        }
    }

    /// Fold a completed list fetch back into the state.
    ///
    /// The loading flag is cleared on every path; it is one shared boolean,
    /// not a per-request counter. Records and the total row count are
    /// replaced only when this is still the latest request; a failed fetch
    /// leaves the previous records visible and the spinner's disappearance
    /// is the only user-facing signal.
    fn complete_refresh(&mut self, seq: u64, outcome: Result<VehiclePage>) {
        self.state.loading = false;

        if seq != self.latest_seq {
            log::debug!(
                "discarding stale list response #{seq} (latest is #{})",
                self.latest_seq
            );
            return;
        }

        match outcome {
            Ok(page) => {
                self.state.records = page.records;
                self.state.page.total = page.total;
            }
            Err(error) if error.is_transient() => {
                log::warn!("list fetch #{seq} failed: {error}");
            }
            Err(error) => {
                log::error!("list fetch #{seq} failed: {error}");
            }
        }
    }

    fn apply_highlights(&mut self, outcome: Result<HighlightCounts>) {
        match outcome {
            Ok(counts) => self.state.highlights = counts,
            Err(error) => log::warn!("highlights fetch failed: {error}"),
        }
    }
}
