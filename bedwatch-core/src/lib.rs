//! Core logic for browsing hospital bed availability: the record model,
//! occupancy classification, filtering and the map/request derivations the
//! front-ends draw from.
//!
//! Everything in [`record`], [`status`], [`filter`] and [`query`] is pure and
//! infallible. Front-ends own the mutable inputs and call in on every change.

pub mod config;
pub mod dataset;
mod error;
pub mod filter;
pub mod map;
pub mod query;
pub mod record;
pub mod request;
pub mod status;

pub use config::{BedwatchConfig, MapConfig, QueueConfig};
pub use dataset::load_dataset;
pub use error::BedwatchError;
pub use filter::{matches, FilterCriteria, ResourceFlags};
pub use map::{markers, MapSurface, MapViewport, Marker, USER_MARKER_COLOR};
pub use query::{filter_dataset, result_summary, QueryState, EMPTY_RESULT_MESSAGE};
pub use record::{
    find_record, occupancy_percent, total_vacant_beds, BedBreakdown, BedKind, BreakdownRow,
    Category, Charges, GeoPoint, HospitalRecord, Vacancy,
};
pub use request::{can_request_bed, request_bed, BedRequestAck, Toast};
pub use status::{occupancy_status, status_badge, ColorIntent, OccupancyStatus, StatusBadge};
