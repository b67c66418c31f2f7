//! Test doubles for driving the controller without a network.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use tokio::sync::RwLock;
use vehicle_registry_client::{
    HighlightCounts, RegistryApi, Result, VehiclePage, VehicleQuery, VehicleRecord,
};

// ===== MockRegistryApi =====

/// Scripted [`RegistryApi`] that records every list payload it receives.
///
/// List outcomes are consumed front-to-back; an empty queue yields an empty
/// page so tests only script the calls they care about.
pub struct MockRegistryApi {
    list_outcomes: RwLock<VecDeque<Result<VehiclePage>>>,
    list_calls: RwLock<Vec<VehicleQuery>>,
    highlights_outcome: RwLock<Result<HighlightCounts>>,
    highlights_calls: RwLock<usize>,
}

impl MockRegistryApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            list_outcomes: RwLock::new(VecDeque::new()),
            list_calls: RwLock::new(Vec::new()),
            highlights_outcome: RwLock::new(Ok(HighlightCounts::default())),
            highlights_calls: RwLock::new(0),
        })
    }

    /// Queue the outcome for the next list call.
    pub async fn push_list_outcome(&self, outcome: Result<VehiclePage>) {
        self.list_outcomes.write().await.push_back(outcome);
    }

    /// Set the outcome returned by every highlights call.
    pub async fn set_highlights(&self, outcome: Result<HighlightCounts>) {
        *self.highlights_outcome.write().await = outcome;
    }

    /// Every list payload received, in call order.
    pub async fn list_calls(&self) -> Vec<VehicleQuery> {
        self.list_calls.read().await.clone()
    }

    pub async fn list_call_count(&self) -> usize {
        self.list_calls.read().await.len()
    }

    pub async fn highlights_call_count(&self) -> usize {
        *self.highlights_calls.read().await
    }
}

#[async_trait]
impl RegistryApi for MockRegistryApi {
    async fn list_vehicles(&self, query: &VehicleQuery) -> Result<VehiclePage> {
        self.list_calls.write().await.push(query.clone());
        self.list_outcomes
            .write()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(VehiclePage::default()))
    }

    async fn fetch_highlights(&self) -> Result<HighlightCounts> {
        *self.highlights_calls.write().await += 1;
        self.highlights_outcome.read().await.clone()
    }
}

// ===== Fixtures =====

/// A page of `count` placeholder vehicles with the given total row count.
pub fn page_of(count: usize, total: u64) -> VehiclePage {
    VehiclePage {
        records: (0..count).map(|i| test_vehicle(&format!("veh-{i}"))).collect(),
        total,
    }
}

/// Minimal vehicle record for list fixtures.
pub fn test_vehicle(id: &str) -> VehicleRecord {
    let stamp = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap_or_default();
    VehicleRecord {
        id: id.to_string(),
        license_plate: format!("PLATE-{id}"),
        driver: "Test Driver".to_string(),
        vehicle_type: "Bus".to_string(),
        vehicle_status: "Active".to_string(),
        approval_status: "Pending".to_string(),
        vehicle_owner: "Test Fleet".to_string(),
        trips: Vec::new(),
        passenger_capacity: 12,
        contact_number: "5550100".to_string(),
        country_code: "+1".to_string(),
        ctime: stamp,
        mtime: stamp,
    }
}
