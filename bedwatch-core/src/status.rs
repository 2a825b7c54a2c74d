//! Occupancy classification shared by every display surface.

use serde::{Deserialize, Serialize};

use crate::record::{total_vacant_beds, HospitalRecord};

/// Three-way occupancy classification. Always derived, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyStatus {
    Available,
    Limited,
    Full,
}

/// Colour intent of a status treatment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ColorIntent {
    Green,
    Amber,
    Red,
}

impl OccupancyStatus {
    pub const ALL: [OccupancyStatus; 3] = [
        OccupancyStatus::Available,
        OccupancyStatus::Limited,
        OccupancyStatus::Full,
    ];

    /// Badge label on every surface: cards, markers and the detail view.
    pub fn label(self) -> &'static str {
        match self {
            OccupancyStatus::Available => "Available",
            OccupancyStatus::Limited => "Limited",
            OccupancyStatus::Full => "Full",
        }
    }

    pub fn color_intent(self) -> ColorIntent {
        match self {
            OccupancyStatus::Available => ColorIntent::Green,
            OccupancyStatus::Limited => ColorIntent::Amber,
            OccupancyStatus::Full => ColorIntent::Red,
        }
    }

    /// Fill colour of map markers.
    pub fn marker_color(self) -> &'static str {
        match self.color_intent() {
            ColorIntent::Green => "#22c55e",
            ColorIntent::Amber => "#f59e0b",
            ColorIntent::Red => "#ef4444",
        }
    }

    /// Map legend entry.
    pub fn legend(self) -> &'static str {
        match self {
            OccupancyStatus::Available => "Available (≥10%)",
            OccupancyStatus::Limited => "Limited (<10%)",
            OccupancyStatus::Full => "Full (0%)",
        }
    }

    /// Lowercase key used for CSS hooks and JS interop.
    pub fn key(self) -> &'static str {
        match self {
            OccupancyStatus::Available => "available",
            OccupancyStatus::Limited => "limited",
            OccupancyStatus::Full => "full",
        }
    }
}

/// Classifies a record by its vacant share of capacity.
///
/// `>= 10%` is available, anything above zero is limited, the rest is full.
/// Zero capacity is full. Shares above 100% are tolerated and stay available.
pub fn occupancy_status(record: &HospitalRecord) -> OccupancyStatus {
    let vacant = u64::from(total_vacant_beds(record));
    let capacity = u64::from(record.capacity);

    if capacity == 0 || vacant == 0 {
        return OccupancyStatus::Full;
    }

    // 100 * vacant / capacity >= 10, kept in integers.
    if vacant * 10 >= capacity {
        OccupancyStatus::Available
    } else {
        OccupancyStatus::Limited
    }
}

/// Everything a surface needs to draw a status badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusBadge {
    pub status: OccupancyStatus,
    pub label: String,
    pub color: ColorIntent,
    pub marker_color: String,
}

impl From<OccupancyStatus> for StatusBadge {
    fn from(status: OccupancyStatus) -> Self {
        Self {
            status,
            label: status.label().to_string(),
            color: status.color_intent(),
            marker_color: status.marker_color().to_string(),
        }
    }
}

pub fn status_badge(record: &HospitalRecord) -> StatusBadge {
    StatusBadge::from(occupancy_status(record))
}
