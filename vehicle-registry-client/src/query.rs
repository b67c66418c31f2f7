use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    ApprovalStatus, QuickFilter, SortField, SortOrder, SortSpec, VehicleStatus, VehicleType,
};

// ============ Filter Criteria ============

/// Inclusive last-modified bounds, as picked in the dashboard's range picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// The committed value of every independent filter dimension.
///
/// Exactly one committed snapshot is live at a time; [`VehicleQuery::build`]
/// is a pure function of the snapshot plus pagination and sort state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Preset card selection; supplies default status codes that the
    /// explicit selectors below override.
    pub quick_filter: Option<QuickFilter>,
    /// License-plate substring, applied only after an explicit commit.
    pub committed_plate: Option<String>,
    pub date_range: Option<DateRange>,
    pub vehicle_type: Option<VehicleType>,
    /// No ordering is enforced between the capacity bounds; a minimum above
    /// the maximum is passed through to the server unchanged.
    pub capacity_min: Option<u32>,
    pub capacity_max: Option<u32>,
    pub approval_status: Option<ApprovalStatus>,
    pub vehicle_status: Option<VehicleStatus>,
}

impl FilterCriteria {
    /// True when every dimension is unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ============ Query Payload ============

/// Flat request body for `POST /vehicle/get_all_vehicles`.
///
/// Dimensions left unset are omitted from the serialized payload entirely,
/// never sent as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleQuery {
    pub page: u32,
    pub size: u32,
    #[serde(rename = "sortBy", skip_serializing_if = "Option::is_none", default)]
    pub sort_by: Option<SortField>,
    #[serde(rename = "sortOrder", skip_serializing_if = "Option::is_none", default)]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub approval_status: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vehicle_status: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub license_plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mtime_from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mtime_to: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vehicle_type: Option<VehicleType>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub passenger_capacity_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub passenger_capacity_max: Option<u32>,
}

impl VehicleQuery {
    /// Merge a filter snapshot, pagination, and sort into one payload.
    ///
    /// The quick filter is applied first and only supplies defaults: when the
    /// explicit approval/vehicle status selectors are also set, their codes
    /// overwrite the preset pair.
    #[must_use]
    pub fn build(
        criteria: &FilterCriteria,
        page: u32,
        size: u32,
        sort: Option<SortSpec>,
    ) -> Self {
        let mut query = Self {
            page,
            size,
            sort_by: sort.map(|s| s.field),
            sort_order: sort.map(|s| s.order),
            approval_status: None,
            vehicle_status: None,
            license_plate: None,
            mtime_from: None,
            mtime_to: None,
            vehicle_type: criteria.vehicle_type,
            passenger_capacity_min: criteria.capacity_min,
            passenger_capacity_max: criteria.capacity_max,
        };

        match criteria.quick_filter {
            Some(QuickFilter::Draft) => {
                query.approval_status = Some(ApprovalStatus::Draft.code());
            }
            Some(QuickFilter::Rejected) => {
                query.approval_status = Some(ApprovalStatus::Rejected.code());
                query.vehicle_status = Some(VehicleStatus::Active.code());
            }
            Some(QuickFilter::PendingInformation) => {
                query.approval_status = Some(ApprovalStatus::Pending.code());
                query.vehicle_status = Some(VehicleStatus::Active.code());
            }
            None => {}
        }

        if let Some(plate) = criteria.committed_plate.as_deref()
            && !plate.is_empty()
        {
            query.license_plate = Some(plate.to_owned());
        }

        if let Some(range) = criteria.date_range {
            query.mtime_from = Some(range.from.timestamp_millis());
            query.mtime_to = Some(range.to.timestamp_millis());
        }

        // Explicit selectors win over the quick-filter presets.
        if let Some(approval) = criteria.approval_status {
            query.approval_status = Some(approval.code());
        }
        if let Some(status) = criteria.vehicle_status {
            query.vehicle_status = Some(status.code());
        }

        query
    }
}
