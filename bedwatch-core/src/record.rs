//! Hospital records and the pure derivations over their bed counts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BedwatchError;

/// Ownership category of a hospital.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Government,
    Private,
    Charity,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Government, Category::Private, Category::Charity];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Government => "Government",
            Category::Private => "Private",
            Category::Charity => "Charity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BedwatchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| BedwatchError::UnknownCategory(value.to_string()))
    }
}

/// How a hospital bills for a bed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Charges {
    Free,
    Paid,
    Regulated,
}

impl Charges {
    pub const ALL: [Charges; 3] = [Charges::Free, Charges::Paid, Charges::Regulated];

    pub fn as_str(self) -> &'static str {
        match self {
            Charges::Free => "Free",
            Charges::Paid => "Paid",
            Charges::Regulated => "Regulated",
        }
    }
}

impl fmt::Display for Charges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Charges {
    type Err = BedwatchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Charges::ALL
            .into_iter()
            .find(|charges| charges.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| BedwatchError::UnknownCharges(value.to_string()))
    }
}

/// One of the four bed sub-types tracked per hospital.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BedKind {
    IsolationWithoutOxygen,
    IsolationWithOxygen,
    IcuWithoutVentilator,
    IcuWithVentilator,
}

impl BedKind {
    pub const ALL: [BedKind; 4] = [
        BedKind::IsolationWithoutOxygen,
        BedKind::IsolationWithOxygen,
        BedKind::IcuWithoutVentilator,
        BedKind::IcuWithVentilator,
    ];

    /// Label used by the detail view's per-type breakdown.
    pub fn label(self) -> &'static str {
        match self {
            BedKind::IsolationWithoutOxygen => "Isolation (Without Oxygen)",
            BedKind::IsolationWithOxygen => "Isolation (With Oxygen)",
            BedKind::IcuWithoutVentilator => "ICU (Without Ventilator)",
            BedKind::IcuWithVentilator => "ICU (With Ventilator)",
        }
    }

    /// Label used by the filter sidebar's resource checkboxes.
    pub fn resource_label(self) -> &'static str {
        match self {
            BedKind::IsolationWithoutOxygen => "Isolation Beds",
            BedKind::IsolationWithOxygen => "Oxygen Support",
            BedKind::IcuWithoutVentilator => "ICU Beds",
            BedKind::IcuWithVentilator => "Ventilator Support",
        }
    }
}

/// Vacant bed counts, one per [`BedKind`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Vacancy {
    pub isolation_without_oxygen: u32,
    pub isolation_with_oxygen: u32,
    pub icu_without_ventilator: u32,
    pub icu_with_ventilator: u32,
}

impl Vacancy {
    pub fn new(
        isolation_without_oxygen: u32,
        isolation_with_oxygen: u32,
        icu_without_ventilator: u32,
        icu_with_ventilator: u32,
    ) -> Self {
        Self {
            isolation_without_oxygen,
            isolation_with_oxygen,
            icu_without_ventilator,
            icu_with_ventilator,
        }
    }

    pub fn get(&self, kind: BedKind) -> u32 {
        match kind {
            BedKind::IsolationWithoutOxygen => self.isolation_without_oxygen,
            BedKind::IsolationWithOxygen => self.isolation_with_oxygen,
            BedKind::IcuWithoutVentilator => self.icu_without_ventilator,
            BedKind::IcuWithVentilator => self.icu_with_ventilator,
        }
    }
}

/// A point on the globe. Longitude first, matching map-library conventions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Finite and within -90..=90 latitude, -180..=180 longitude.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// One hospital's static availability snapshot. Never mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HospitalRecord {
    pub id: String,
    pub district: String,
    pub name: String,
    pub category: Category,
    pub address: String,
    pub charges: Charges,
    /// Total regulated bed capacity; denominator of the occupancy percentage.
    pub capacity: u32,
    pub vacancy: Vacancy,
    pub latitude: f64,
    pub longitude: f64,
}

impl HospitalRecord {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }
}

/// Sum of the four vacancy counts.
pub fn total_vacant_beds(record: &HospitalRecord) -> u32 {
    BedKind::ALL
        .into_iter()
        .fold(0u32, |sum, kind| sum.saturating_add(record.vacancy.get(kind)))
}

/// Vacant share of capacity in percent, `None` for a zero-capacity record.
///
/// Can exceed 100 when the vacancy counts are inconsistent with capacity.
pub fn occupancy_percent(record: &HospitalRecord) -> Option<f64> {
    if record.capacity == 0 {
        return None;
    }
    Some(100.0 * f64::from(total_vacant_beds(record)) / f64::from(record.capacity))
}

/// Per-type breakdown shown by the detail view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BedBreakdown {
    pub rows: Vec<BreakdownRow>,
    pub total_vacant: u32,
    pub capacity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreakdownRow {
    pub kind: BedKind,
    pub label: String,
    pub vacant: u32,
}

impl BedBreakdown {
    pub fn of(record: &HospitalRecord) -> Self {
        let rows = BedKind::ALL
            .into_iter()
            .map(|kind| BreakdownRow {
                kind,
                label: kind.label().to_string(),
                vacant: record.vacancy.get(kind),
            })
            .collect();

        Self {
            rows,
            total_vacant: total_vacant_beds(record),
            capacity: record.capacity,
        }
    }
}

/// Looks a record up by id.
pub fn find_record<'a>(
    records: &'a [HospitalRecord],
    id: &str,
) -> Result<&'a HospitalRecord, BedwatchError> {
    records
        .iter()
        .find(|record| record.id == id)
        .ok_or_else(|| BedwatchError::NotFound(id.to_string()))
}
