use async_trait::async_trait;

use crate::error::Result;
use crate::query::VehicleQuery;
use crate::types::{HighlightCounts, VehiclePage};

/// The registry endpoints the dashboard depends on.
///
/// Implemented by [`RegistryClient`](crate::RegistryClient); test doubles
/// implement it to drive the controller without a network.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// Fetch one page of vehicles matching the query.
    async fn list_vehicles(&self, query: &VehicleQuery) -> Result<VehiclePage>;

    /// Fetch the global approval-status counts.
    ///
    /// The request body is always empty; the counts are unfiltered totals
    /// over the whole registry regardless of any live filter state.
    async fn fetch_highlights(&self) -> Result<HighlightCounts>;
}
