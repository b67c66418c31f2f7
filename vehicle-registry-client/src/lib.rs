//! # vehicle-registry-client
//!
//! Typed async client for the vehicle-registry list and highlights endpoints.
//!
//! The registry exposes two JSON POST endpoints: a paginated, filterable
//! vehicle list and a parameterless aggregate of approval-status counts.
//! This crate owns the wire types for both, the flat [`VehicleQuery`]
//! payload, and the merge algorithm that folds a [`FilterCriteria`] snapshot
//! into it.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS
//!   implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vehicle_registry_client::{
//!     FilterCriteria, QuickFilter, RegistryApi, RegistryClient, VehicleQuery,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RegistryClient::new("https://fleet.example.com/api/v1");
//!
//!     let criteria = FilterCriteria {
//!         quick_filter: Some(QuickFilter::Rejected),
//!         ..FilterCriteria::default()
//!     };
//!     let page = client
//!         .list_vehicles(&VehicleQuery::build(&criteria, 1, 10, None))
//!         .await?;
//!     for vehicle in &page.records {
//!         println!("{}: {}", vehicle.license_plate, vehicle.route_summary());
//!     }
//!
//!     let counts = client.fetch_highlights().await?;
//!     println!("{} drafts, {} pending", counts.draft, counts.pending);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, RegistryError>`](RegistryError). The
//! variants cover transport failures, non-success HTTP statuses, and
//! undecodable bodies; nothing is retried, and a request resolves or fails
//! exactly once.

mod client;
mod error;
mod http;
mod query;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{RegistryError, Result};

// Re-export the API seam and its reqwest implementation
pub use client::RegistryClient;
pub use traits::RegistryApi;

// Re-export types
pub use query::{DateRange, FilterCriteria, VehicleQuery};
pub use types::{
    ApprovalStatus, HighlightCounts, QuickFilter, SortField, SortOrder, SortSpec, TripLeg,
    VehiclePage, VehicleRecord, VehicleStatus, VehicleType,
};
