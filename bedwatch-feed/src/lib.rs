//! Reads an external hospital availability dump into `HospitalRecord`s.
//!
//! The dump uses the field names of the upstream CSV export
//! (`hospital_details`, `free_regulated_beds`, `vacant_...`). Counts may be
//! numbers or numeric strings; coordinates must be present and in range.

use std::collections::HashSet;

use bedwatch_core::{BedwatchError, Category, Charges, GeoPoint, HospitalRecord, Vacancy};
use serde_json::Value;

/// Parse a feed from a JSON string.
pub fn parse_feed_str(feed_json: &str) -> Result<Vec<HospitalRecord>, BedwatchError> {
    let value: Value =
        serde_json::from_str(feed_json).map_err(|err| BedwatchError::Parse(err.to_string()))?;
    parse_feed_value(&value)
}

/// Parse a feed from a `serde_json::Value`.
///
/// Accepts a bare array of records or an object with a `hospitals` array.
pub fn parse_feed_value(feed: &Value) -> Result<Vec<HospitalRecord>, BedwatchError> {
    let entries = match feed {
        Value::Array(entries) => entries,
        Value::Object(map) => map
            .get("hospitals")
            .and_then(Value::as_array)
            .ok_or(BedwatchError::MissingData)?,
        other => {
            return Err(BedwatchError::Parse(format!(
                "expected an array or object, received {}",
                value_kind(other)
            )))
        }
    };

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            tracing::warn!(index, kind = value_kind(entry), "skipping non-object feed entry");
            continue;
        }

        let record = parse_record(entry, index)?;
        if !seen.insert(record.id.clone()) {
            return Err(BedwatchError::DuplicateId(record.id));
        }
        records.push(record);
    }

    tracing::debug!(count = records.len(), "parsed hospital feed");
    Ok(records)
}

fn parse_record(entry: &Value, index: usize) -> Result<HospitalRecord, BedwatchError> {
    let id = extract_id(entry)
        .ok_or_else(|| BedwatchError::Parse(format!("entry {index} has no id")))?;
    let name = extract_text(entry, &["hospital_details", "name"])
        .ok_or_else(|| BedwatchError::Parse(format!("record {id} has no hospital name")))?;

    let category: Category = extract_text(entry, &["hospital_category", "category"])
        .ok_or_else(|| BedwatchError::Parse(format!("record {id} has no category")))?
        .parse()?;
    let charges: Charges = extract_text(entry, &["charges"])
        .ok_or_else(|| BedwatchError::Parse(format!("record {id} has no charges")))?
        .parse()?;

    let latitude = extract_float(entry, "latitude");
    let longitude = extract_float(entry, "longitude");
    let (latitude, longitude) = match (latitude, longitude) {
        (Some(lat), Some(lng)) if GeoPoint::new(lng, lat).is_valid() => (lat, lng),
        (lat, lng) => {
            return Err(BedwatchError::InvalidCoordinates {
                id,
                latitude: lat.unwrap_or(f64::NAN),
                longitude: lng.unwrap_or(f64::NAN),
            })
        }
    };

    Ok(HospitalRecord {
        district: extract_text(entry, &["district"]).unwrap_or_default(),
        address: extract_text(entry, &["address"]).unwrap_or_default(),
        capacity: extract_count(entry, &["free_regulated_beds", "capacity"]),
        vacancy: Vacancy::new(
            extract_count(entry, &["vacant_bed_isolation_without_oxygen"]),
            extract_count(entry, &["vacant_isolation_with_oxygen"]),
            extract_count(entry, &["vacant_bed_icu_without_ventilator"]),
            extract_count(entry, &["vacant_icu_beds_with_ventilator"]),
        ),
        id,
        name,
        category,
        charges,
        latitude,
        longitude,
    })
}

fn extract_id(entry: &Value) -> Option<String> {
    match entry.get("id")? {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn extract_text(entry: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|field| entry.get(*field).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// First present count among `fields`; negative, fractional or unreadable
/// values count as zero.
fn extract_count(entry: &Value, fields: &[&str]) -> u32 {
    fields
        .iter()
        .find_map(|field| entry.get(*field))
        .and_then(|value| match value {
            Value::Number(number) => number.as_u64(),
            Value::String(text) => text.trim().parse::<u64>().ok(),
            _ => None,
        })
        .map(|count| u32::try_from(count).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

fn extract_float(entry: &Value, field: &str) -> Option<f64> {
    match entry.get(field)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": 4,
            "district": "Delhi",
            "hospital_details": "Max Super Speciality Hospital",
            "hospital_category": "private",
            "address": "Saket, New Delhi",
            "charges": "Paid",
            "free_regulated_beds": "550",
            "vacant_bed_isolation_without_oxygen": 18,
            "vacant_isolation_with_oxygen": -2,
            "vacant_bed_icu_without_ventilator": "10",
            "latitude": 28.5244,
            "longitude": "77.2066"
        })
    }

    #[test]
    fn lenient_counts_and_numeric_ids() {
        let records = parse_feed_value(&json!([sample()])).unwrap();
        let record = &records[0];
        assert_eq!(record.id, "4");
        assert_eq!(record.category, Category::Private);
        assert_eq!(record.capacity, 550);
        assert_eq!(record.vacancy, Vacancy::new(18, 0, 10, 0));
        assert_eq!(record.longitude, 77.2066);
    }

    #[test]
    fn accepts_wrapped_object_and_skips_non_objects() {
        let records = parse_feed_value(&json!({ "hospitals": [sample(), 42, null] })).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = parse_feed_value(&json!([sample(), sample()])).unwrap_err();
        assert_eq!(err, BedwatchError::DuplicateId("4".to_string()));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let mut entry = sample();
        entry["latitude"] = json!(123.0);
        let err = parse_feed_value(&json!([entry])).unwrap_err();
        assert!(matches!(err, BedwatchError::InvalidCoordinates { ref id, .. } if id == "4"));
    }

    #[test]
    fn rejects_unknown_category() {
        let mut entry = sample();
        entry["hospital_category"] = json!("Trust");
        let err = parse_feed_value(&json!([entry])).unwrap_err();
        assert_eq!(err, BedwatchError::UnknownCategory("Trust".to_string()));
    }

    #[test]
    fn object_without_hospitals_is_missing_data() {
        assert_eq!(
            parse_feed_value(&json!({ "entries": [] })).unwrap_err(),
            BedwatchError::MissingData
        );
        assert!(matches!(
            parse_feed_str("\"text\"").unwrap_err(),
            BedwatchError::Parse(_)
        ));
    }
}
