//! Framework-neutral WASM <-> JavaScript bridge over `bedwatch-core`.

use bedwatch_core::{
    BedBreakdown, BedwatchConfig, BedwatchError, FilterCriteria, GeoPoint, HospitalRecord,
    MapSurface, MapViewport,
};
use chrono::{DateTime, Utc};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Partial configuration accepted from JavaScript; absent keys keep defaults.
#[derive(Deserialize, Default)]
struct JsBedwatchConfig {
    #[serde(default)]
    map_access_token: Option<String>,
    #[serde(default)]
    default_center: Option<GeoPoint>,
    #[serde(default)]
    default_zoom: Option<f64>,
    #[serde(default)]
    located_zoom: Option<f64>,
    #[serde(default)]
    max_queue_position: Option<u32>,
}

impl From<JsBedwatchConfig> for BedwatchConfig {
    fn from(cfg: JsBedwatchConfig) -> Self {
        let mut base = BedwatchConfig::default();
        if let Some(token) = cfg.map_access_token {
            base.map.access_token = Some(token);
        }
        if let Some(center) = cfg.default_center {
            base.map.default_center = center;
        }
        if let Some(zoom) = cfg.default_zoom {
            base.map.default_zoom = zoom;
        }
        if let Some(zoom) = cfg.located_zoom {
            base.map.located_zoom = zoom;
        }
        if let Some(max) = cfg.max_queue_position {
            base.queue.max_position = max;
        }
        base
    }
}

/// Request acknowledgement together with its toast text.
#[derive(Serialize)]
struct JsBedRequest {
    ack: bedwatch_core::BedRequestAck,
    toast: bedwatch_core::Toast,
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(js_name = loadDataset)]
pub fn load_dataset() -> Result<JsValue, JsValue> {
    serialize(&bedwatch_core::load_dataset())
}

/// Parses a raw hospital dump (array or `{ hospitals: [...] }`).
#[wasm_bindgen(js_name = parseFeed)]
pub fn parse_feed(feed: JsValue) -> Result<JsValue, JsValue> {
    let value = from_value::<serde_json::Value>(feed)
        .map_err(|err| JsValue::from_str(&format!("Could not read feed JSON: {err}")))?;
    let records = bedwatch_feed::parse_feed_value(&value).map_err(into_js_error)?;
    serialize(&records)
}

#[wasm_bindgen(js_name = filterDataset)]
pub fn filter_dataset(
    records: JsValue,
    criteria: Option<JsValue>,
    search_text: &str,
) -> Result<JsValue, JsValue> {
    let records = read_records(records)?;
    let criteria = match criteria {
        Some(value) if !value.is_undefined() && !value.is_null() => from_value::<FilterCriteria>(value)
            .map_err(|err| JsValue::from_str(&format!("Could not read filter criteria: {err}")))?,
        _ => FilterCriteria::default(),
    };

    serialize(&bedwatch_core::filter_dataset(&records, &criteria, search_text))
}

#[wasm_bindgen(js_name = occupancyStatus)]
pub fn occupancy_status(record: JsValue) -> Result<String, JsValue> {
    let record = read_record(record)?;
    Ok(bedwatch_core::occupancy_status(&record).key().to_string())
}

#[wasm_bindgen(js_name = totalVacantBeds)]
pub fn total_vacant_beds(record: JsValue) -> Result<u32, JsValue> {
    let record = read_record(record)?;
    Ok(bedwatch_core::total_vacant_beds(&record))
}

#[wasm_bindgen(js_name = statusBadge)]
pub fn status_badge(record: JsValue) -> Result<JsValue, JsValue> {
    let record = read_record(record)?;
    serialize(&bedwatch_core::status_badge(&record))
}

#[wasm_bindgen(js_name = bedBreakdown)]
pub fn bed_breakdown(record: JsValue) -> Result<JsValue, JsValue> {
    let record = read_record(record)?;
    serialize(&BedBreakdown::of(&record))
}

#[wasm_bindgen(js_name = resultSummary)]
pub fn result_summary(count: usize) -> String {
    bedwatch_core::result_summary(count)
}

/// List body shown in place of cards when nothing matches.
#[wasm_bindgen(js_name = emptyResultMessage)]
pub fn empty_result_message() -> String {
    bedwatch_core::EMPTY_RESULT_MESSAGE.to_string()
}

#[wasm_bindgen(js_name = mapSurface)]
pub fn map_surface(config: Option<JsValue>) -> Result<JsValue, JsValue> {
    let config = read_config(config)?;
    serialize(&MapSurface::resolve(&config.map))
}

/// Viewport for an optional `{ longitude, latitude }` user location.
///
/// A location that cannot be read is treated like no location at all.
#[wasm_bindgen(js_name = mapViewport)]
pub fn map_viewport(config: Option<JsValue>, location: Option<JsValue>) -> Result<JsValue, JsValue> {
    let config = read_config(config)?;
    let location = location.and_then(|value| from_value::<GeoPoint>(value).ok());
    serialize(&MapViewport::for_location(&config.map, location))
}

#[wasm_bindgen(js_name = hospitalMarkers)]
pub fn hospital_markers(records: JsValue) -> Result<JsValue, JsValue> {
    let records = read_records(records)?;
    serialize(&bedwatch_core::markers(&records))
}

/// Simulated bed request. No server is contacted.
#[wasm_bindgen(js_name = requestBed)]
pub fn request_bed(record: JsValue, config: Option<JsValue>) -> Result<JsValue, JsValue> {
    let record = read_record(record)?;
    let config = read_config(config)?;

    let now_ms = js_sys::Date::now();
    let requested_at = DateTime::<Utc>::from_timestamp_millis(now_ms as i64).unwrap_or_default();
    let mut rng = SmallRng::seed_from_u64(js_sys::Math::random().to_bits() ^ now_ms.to_bits());

    let ack = bedwatch_core::request_bed(&record, &config.queue, &mut rng, requested_at)
        .map_err(into_js_error)?;
    let toast = ack.toast();
    serialize(&JsBedRequest { ack, toast })
}

fn read_config(config: Option<JsValue>) -> Result<BedwatchConfig, JsValue> {
    let cfg = match config {
        Some(value) if !value.is_undefined() && !value.is_null() => {
            let cfg: JsBedwatchConfig = from_value(value)
                .map_err(|err| JsValue::from_str(&format!("Could not read config: {err}")))?;
            BedwatchConfig::from(cfg)
        }
        _ => BedwatchConfig::default(),
    };
    cfg.validate().map_err(into_js_error)?;
    Ok(cfg)
}

fn read_record(record: JsValue) -> Result<HospitalRecord, JsValue> {
    from_value(record).map_err(|err| JsValue::from_str(&format!("Could not read record: {err}")))
}

fn read_records(records: JsValue) -> Result<Vec<HospitalRecord>, JsValue> {
    from_value(records).map_err(|err| JsValue::from_str(&format!("Could not read records: {err}")))
}

fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|err| JsValue::from_str(&format!("Could not serialize result: {err}")))
}

fn into_js_error(err: BedwatchError) -> JsValue {
    JsValue::from_str(&format_bedwatch_error(err))
}

fn format_bedwatch_error(err: BedwatchError) -> String {
    format!("Bedwatch error: {err}")
}
