//! Dashboard state and the command reducer.

use serde::{Deserialize, Serialize};
use vehicle_registry_client::{
    ApprovalStatus, DateRange, FilterCriteria, HighlightCounts, QuickFilter, SortSpec,
    VehicleQuery, VehicleRecord, VehicleStatus, VehicleType,
};

/// Default rows per page, matching the table widget's initial configuration.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Current page, page size, and the server-reported row count.
///
/// `total` is owned exclusively by the last successful fetch; the other
/// fields are owned by the controller and the widgets driving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }
}

/// One variant per user action that can reach the controller.
///
/// The reducer's return value makes the refetch-trigger set an explicit,
/// enumerable contract: every variant except
/// [`SearchInputChanged`](Self::SearchInputChanged) requires a fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardCommand {
    /// A highlight card was clicked; re-selecting the active card clears it.
    QuickFilterToggled(QuickFilter),
    /// The search box content changed. Typing never costs a fetch.
    SearchInputChanged(String),
    /// The search box was submitted (Enter).
    SearchCommitted,
    DateRangeSet(Option<DateRange>),
    VehicleTypeSelected(Option<VehicleType>),
    MinCapacitySet(Option<u32>),
    MaxCapacitySet(Option<u32>),
    ApprovalStatusSelected(Option<ApprovalStatus>),
    VehicleStatusSelected(Option<VehicleStatus>),
    PageChanged(u32),
    SortChanged(Option<SortSpec>),
    /// Reset every filter dimension and return to the first page in one
    /// transition.
    FiltersCleared,
}

/// Whether a command requires a server round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refetch {
    Required,
    NotRequired,
}

impl Refetch {
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }
}

/// Everything the dashboard page shows, minus rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    pub filters: FilterCriteria,
    /// Search text still being typed; queries only see it after
    /// [`DashboardCommand::SearchCommitted`].
    pub search_input: String,
    pub page: PageState,
    pub sort: Option<SortSpec>,
    pub records: Vec<VehicleRecord>,
    pub highlights: HighlightCounts,
    /// Shared spinner flag; a single boolean even across overlapping
    /// fetches.
    pub loading: bool,
}

impl DashboardState {
    /// Apply a command and report whether a fetch must follow.
    pub fn apply(&mut self, command: &DashboardCommand) -> Refetch {
        match command {
            DashboardCommand::QuickFilterToggled(card) => {
                // Selecting a card resets the free-text box and date range.
                self.filters.date_range = None;
                self.search_input.clear();
                self.filters.quick_filter = if self.filters.quick_filter == Some(*card) {
                    None
                } else {
                    Some(*card)
                };
                Refetch::Required
            }
            DashboardCommand::SearchInputChanged(text) => {
                self.search_input = text.clone();
                Refetch::NotRequired
            }
            DashboardCommand::SearchCommitted => {
                self.filters.committed_plate = if self.search_input.is_empty() {
                    None
                } else {
                    Some(self.search_input.clone())
                };
                Refetch::Required
            }
            DashboardCommand::DateRangeSet(range) => {
                self.filters.date_range = *range;
                Refetch::Required
            }
            DashboardCommand::VehicleTypeSelected(vehicle_type) => {
                self.filters.vehicle_type = *vehicle_type;
                Refetch::Required
            }
            DashboardCommand::MinCapacitySet(capacity) => {
                self.filters.capacity_min = *capacity;
                Refetch::Required
            }
            DashboardCommand::MaxCapacitySet(capacity) => {
                self.filters.capacity_max = *capacity;
                Refetch::Required
            }
            DashboardCommand::ApprovalStatusSelected(status) => {
                self.filters.approval_status = *status;
                Refetch::Required
            }
            DashboardCommand::VehicleStatusSelected(status) => {
                self.filters.vehicle_status = *status;
                Refetch::Required
            }
            DashboardCommand::PageChanged(page) => {
                self.page.page = (*page).max(1);
                Refetch::Required
            }
            DashboardCommand::SortChanged(sort) => {
                self.sort = *sort;
                Refetch::Required
            }
            DashboardCommand::FiltersCleared => {
                self.filters = FilterCriteria::default();
                self.search_input.clear();
                self.page.page = 1;
                Refetch::Required
            }
        }
    }

    /// Build the list-query payload for the current snapshot.
    #[must_use]
    pub fn query(&self) -> VehicleQuery {
        VehicleQuery::build(
            &self.filters,
            self.page.page,
            self.page.page_size,
            self.sort,
        )
    }
}
