//! Map-facing derivations: viewport, credential state and markers.
//!
//! Tile rendering lives outside this crate. Everything here is pure data
//! that a renderer can draw.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::record::{GeoPoint, HospitalRecord};
use crate::status::{occupancy_status, OccupancyStatus};

pub const USER_MARKER_COLOR: &str = "#3b82f6";

const TILE_SIZE: f64 = 256.0;

/// Centre and zoom of the map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MapViewport {
    pub center: GeoPoint,
    pub zoom: f64,
}

impl MapViewport {
    /// Centres on the user when a usable location is known, otherwise on the
    /// configured default region. A malformed location is ignored.
    pub fn for_location(config: &MapConfig, user_location: Option<GeoPoint>) -> Self {
        match user_location.filter(GeoPoint::is_valid) {
            Some(center) => Self {
                center,
                zoom: config.located_zoom,
            },
            None => {
                if let Some(point) = user_location {
                    tracing::warn!(?point, "ignoring malformed user location");
                }
                Self {
                    center: config.default_center,
                    zoom: config.default_zoom,
                }
            }
        }
    }

    /// Web Mercator projection of `point` into a `width` x `height` frame
    /// centred on this viewport. Returns pixel coordinates.
    pub fn project(&self, point: GeoPoint, width: f64, height: f64) -> (f64, f64) {
        let world = TILE_SIZE * 2f64.powf(self.zoom);
        let (cx, cy) = mercator(self.center, world);
        let (px, py) = mercator(point, world);
        (px - cx + width / 2.0, py - cy + height / 2.0)
    }
}

fn mercator(point: GeoPoint, world: f64) -> (f64, f64) {
    // Web Mercator is undefined at the poles.
    let lat = point.latitude.clamp(-85.051_128, 85.051_128).to_radians();
    let x = (point.longitude + 180.0) / 360.0 * world;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * world;
    (x, y)
}

/// Whether the map can be drawn at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MapSurface {
    NotConfigured,
    Ready { token: String },
}

impl MapSurface {
    pub fn resolve(config: &MapConfig) -> Self {
        match config.access_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => MapSurface::Ready {
                token: token.to_string(),
            },
            _ => MapSurface::NotConfigured,
        }
    }
}

/// A hospital marker, coloured by the same classification as the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    pub hospital_id: String,
    pub name: String,
    pub position: GeoPoint,
    pub status: OccupancyStatus,
    pub color: String,
}

pub fn markers(records: &[HospitalRecord]) -> Vec<Marker> {
    records
        .iter()
        .map(|record| {
            let status = occupancy_status(record);
            Marker {
                hospital_id: record.id.clone(),
                name: record.name.clone(),
                position: record.location(),
                status,
                color: status.marker_color().to_string(),
            }
        })
        .collect()
}
