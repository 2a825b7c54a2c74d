//! Simulated "request bed" acknowledgement and toast notices.
//!
//! No queue exists anywhere. The queue position is a local random draw that
//! only gives the user something to read; it carries no ordering guarantee.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::QueueConfig;
use crate::record::HospitalRecord;
use crate::status::{occupancy_status, OccupancyStatus};
use crate::BedwatchError;

pub const REQUEST_BED_ACTION: &str = "Request Bed / Start Queuing";
pub const NO_BEDS_ACTION: &str = "No Beds Available";
pub const NO_BEDS_HINT: &str =
    "This hospital currently has no vacant beds. Please check other hospitals.";

/// Acknowledgement of a simulated bed request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BedRequestAck {
    pub hospital_id: String,
    pub hospital_name: String,
    pub queue_position: u32,
    pub requested_at: DateTime<Utc>,
    /// Always `true`.
    pub simulated: bool,
}

impl BedRequestAck {
    pub fn toast(&self) -> Toast {
        Toast {
            title: "Request Sent Successfully".to_string(),
            description: format!(
                "Your request has been sent to {}. Your queue position is #{}. We will notify you when space is confirmed.",
                self.hospital_name, self.queue_position
            ),
            duration_ms: 6000,
        }
    }
}

/// Whether the request action is offered for `record`.
pub fn can_request_bed(record: &HospitalRecord) -> bool {
    occupancy_status(record) != OccupancyStatus::Full
}

/// Simulates a bed request. Full hospitals are refused.
pub fn request_bed<R: Rng + ?Sized>(
    record: &HospitalRecord,
    queue: &QueueConfig,
    rng: &mut R,
    requested_at: DateTime<Utc>,
) -> Result<BedRequestAck, BedwatchError> {
    if !can_request_bed(record) {
        return Err(BedwatchError::NoVacancy(record.name.clone()));
    }

    let queue_position = rng.random_range(1..=queue.max_position.max(1));
    tracing::info!(
        hospital_id = %record.id,
        queue_position,
        "simulated bed request acknowledged"
    );

    Ok(BedRequestAck {
        hospital_id: record.id.clone(),
        hospital_name: record.name.clone(),
        queue_position,
        requested_at,
        simulated: true,
    })
}

/// A transient notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub duration_ms: u32,
}

impl Toast {
    pub fn location_detected() -> Self {
        Self {
            title: "Location Detected".to_string(),
            description: "Showing hospitals near your location".to_string(),
            duration_ms: 5000,
        }
    }
}
