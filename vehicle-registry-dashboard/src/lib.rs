//! Vehicle-Registry Dashboard Controller
//!
//! Platform-independent page logic for the registry's vehicle list view:
//! filter state, the command reducer, pagination, and fetch orchestration.
//!
//! A UI embeds this crate by feeding user actions in as
//! [`DashboardCommand`]s and reading [`DashboardState`] back out after each
//! dispatch: the highlight cards render [`DashboardState::highlights`] and
//! the active quick-filter selection, the table renders
//! [`DashboardState::records`] under [`DashboardState::page`]. Rendering
//! itself is out of scope here.

pub mod controller;
pub mod state;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use controller::DashboardController;
pub use state::{DEFAULT_PAGE_SIZE, DashboardCommand, DashboardState, PageState, Refetch};
