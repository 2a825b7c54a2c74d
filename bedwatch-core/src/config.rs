//! Runtime configuration shared by the CLI, the wasm bridge and the UI.

use serde::{Deserialize, Serialize};

use crate::record::GeoPoint;
use crate::BedwatchError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BedwatchConfig {
    pub map: MapConfig,
    pub queue: QueueConfig,
}

impl BedwatchConfig {
    /// Parses a TOML document. Missing tables and keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, BedwatchError> {
        let config: Self =
            toml::from_str(input).map_err(|err| BedwatchError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BedwatchError> {
        if !self.map.default_center.is_valid() {
            return Err(BedwatchError::Config(
                "map.default_center is outside the valid coordinate range".to_string(),
            ));
        }
        if !(self.map.default_zoom.is_finite() && self.map.located_zoom.is_finite()) {
            return Err(BedwatchError::Config("map zoom levels must be finite".to_string()));
        }
        if self.queue.max_position == 0 {
            return Err(BedwatchError::Config(
                "queue.max_position must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Map surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Tile-provider credential. Blank counts as unset.
    pub access_token: Option<String>,
    /// Region shown when no user location is known.
    pub default_center: GeoPoint,
    pub default_zoom: f64,
    /// Zoom used when centred on the user.
    pub located_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            default_center: GeoPoint::new(78.9629, 20.5937),
            default_zoom: 4.5,
            located_zoom: 12.0,
        }
    }
}

/// Simulated queue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QueueConfig {
    /// Queue positions are drawn from `1..=max_position`.
    pub max_position: u32,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self { max_position: 20 }
    }
}
