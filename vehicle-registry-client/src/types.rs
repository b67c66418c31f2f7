use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Status Enumerations ============

/// Review state of a vehicle registration.
///
/// Query payloads carry the numeric wire code (see [`code`](Self::code));
/// fetched records report the display string instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Draft,
    Approved,
    Pending,
    Rejected,
}

impl ApprovalStatus {
    /// Numeric code used in query payloads.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Draft => 0,
            Self::Approved => 1,
            Self::Pending => 2,
            Self::Rejected => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(Self::Draft),
            "approved" => Some(Self::Approved),
            "pending" => Some(Self::Pending),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Operational state of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Active,
    Inactive,
    Decommissioned,
}

impl VehicleStatus {
    /// Numeric code used in query payloads.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Active => 0,
            Self::Inactive => 1,
            Self::Decommissioned => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Decommissioned => "decommissioned",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "decommissioned" => Some(Self::Decommissioned),
            _ => None,
        }
    }
}

/// Vehicle category. Wire values are the capitalized variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Truck,
    Bus,
    Van,
    Taxi,
}

impl VehicleType {
    pub const ALL: [Self; 4] = [Self::Truck, Self::Bus, Self::Van, Self::Taxi];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Truck => "Truck",
            Self::Bus => "Bus",
            Self::Van => "Van",
            Self::Taxi => "Taxi",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Truck" => Some(Self::Truck),
            "Bus" => Some(Self::Bus),
            "Van" => Some(Self::Van),
            "Taxi" => Some(Self::Taxi),
            _ => None,
        }
    }
}

/// Preset card selection supplying default status codes.
///
/// Mutually exclusive; re-selecting the active card clears the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickFilter {
    Draft,
    PendingInformation,
    Rejected,
}

impl QuickFilter {
    /// Display order of the highlight cards.
    pub const ALL: [Self; 3] = [Self::Draft, Self::PendingInformation, Self::Rejected];

    /// Card caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::PendingInformation => "Pending Information",
            Self::Rejected => "Rejected",
        }
    }
}

// ============ Sorting ============

/// Sortable list columns. Wire value is the snake_case column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    LicensePlate,
    Driver,
    VehicleType,
    VehicleStatus,
    VehicleOwner,
    ApprovalStatus,
}

/// Sort direction, in the list widget's wire spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascend,
    Descend,
}

/// A column/direction pair reported by the list widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

// ============ Vehicle Records ============

/// One leg of a vehicle's assigned route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripLeg {
    pub from: String,
    pub to: String,
}

/// A vehicle as reported by the registry. Server-owned and immutable;
/// every fetch replaces the whole visible page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: String,
    pub license_plate: String,
    pub driver: String,
    pub vehicle_type: String,
    /// Display string; filters use the numeric [`VehicleStatus`] codes.
    pub vehicle_status: String,
    /// Display string; filters use the numeric [`ApprovalStatus`] codes.
    pub approval_status: String,
    pub vehicle_owner: String,
    #[serde(default)]
    pub trips: Vec<TripLeg>,
    pub passenger_capacity: u32,
    pub contact_number: String,
    pub country_code: String,
    #[serde(with = "crate::utils::datetime")]
    pub ctime: DateTime<Utc>,
    #[serde(with = "crate::utils::datetime")]
    pub mtime: DateTime<Utc>,
}

impl VehicleRecord {
    /// Human-readable trip list, e.g. `"Depot to Airport, Airport to Depot"`.
    #[must_use]
    pub fn route_summary(&self) -> String {
        self.trips
            .iter()
            .map(|leg| format!("{} to {}", leg.from, leg.to))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One page of list results plus the server-reported row count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehiclePage {
    pub records: Vec<VehicleRecord>,
    pub total: u64,
}

/// Unfiltered approval-status totals across the whole registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightCounts {
    pub draft: u64,
    pub pending: u64,
    pub rejected: u64,
}

// ============ Wire Envelopes ============

/// `POST /vehicle/get_all_vehicles` response: `{data: {result, total}}`.
/// Absent or malformed fields degrade to an empty page rather than an error.
#[derive(Debug, Deserialize)]
pub(crate) struct VehicleListEnvelope {
    #[serde(default, deserialize_with = "crate::utils::lenient::or_default")]
    pub data: VehicleListData,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct VehicleListData {
    #[serde(default, deserialize_with = "crate::utils::lenient::or_default")]
    pub result: Vec<VehicleRecord>,
    #[serde(default, deserialize_with = "crate::utils::lenient::or_default")]
    pub total: u64,
}

impl From<VehicleListEnvelope> for VehiclePage {
    fn from(envelope: VehicleListEnvelope) -> Self {
        Self {
            records: envelope.data.result,
            total: envelope.data.total,
        }
    }
}

/// `POST /vehicle/get_highlights` response; missing counts default to 0.
#[derive(Debug, Deserialize)]
pub(crate) struct HighlightsEnvelope {
    #[serde(default, deserialize_with = "crate::utils::lenient::or_default")]
    pub data: HighlightsData,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HighlightsData {
    #[serde(default)]
    pub total_draft: u64,
    #[serde(default)]
    pub total_pending: u64,
    #[serde(default)]
    pub total_rejected: u64,
}

impl From<HighlightsEnvelope> for HighlightCounts {
    fn from(envelope: HighlightsEnvelope) -> Self {
        Self {
            draft: envelope.data.total_draft,
            pending: envelope.data.total_pending,
            rejected: envelope.data.total_rejected,
        }
    }
}
