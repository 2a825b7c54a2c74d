//! Per-record inclusion predicate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record::{BedKind, Category, Charges, HospitalRecord};

/// Resource-required flags, one per vacancy count.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ResourceFlags {
    #[serde(default)]
    pub isolation: bool,
    #[serde(default)]
    pub oxygen: bool,
    #[serde(default)]
    pub icu: bool,
    #[serde(default)]
    pub ventilator: bool,
}

impl ResourceFlags {
    pub fn get(&self, kind: BedKind) -> bool {
        match kind {
            BedKind::IsolationWithoutOxygen => self.isolation,
            BedKind::IsolationWithOxygen => self.oxygen,
            BedKind::IcuWithoutVentilator => self.icu,
            BedKind::IcuWithVentilator => self.ventilator,
        }
    }

    pub fn set(&mut self, kind: BedKind, required: bool) {
        let slot = match kind {
            BedKind::IsolationWithoutOxygen => &mut self.isolation,
            BedKind::IsolationWithOxygen => &mut self.oxygen,
            BedKind::IcuWithoutVentilator => &mut self.icu,
            BedKind::IcuWithVentilator => &mut self.ventilator,
        };
        *slot = required;
    }

    fn count(&self) -> usize {
        BedKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind))
            .count()
    }
}

/// Active filter selections. Empty sets and unset flags are wildcards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    #[serde(default)]
    pub categories: BTreeSet<Category>,
    #[serde(default)]
    pub charges: BTreeSet<Charges>,
    #[serde(default)]
    pub resources: ResourceFlags,
}

impl FilterCriteria {
    pub fn toggle_category(&mut self, category: Category) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    pub fn toggle_charges(&mut self, charges: Charges) {
        if !self.charges.remove(&charges) {
            self.charges.insert(charges);
        }
    }

    pub fn toggle_resource(&mut self, kind: BedKind) {
        let current = self.resources.get(kind);
        self.resources.set(kind, !current);
    }

    /// Number of selections, shown on the filter button badge.
    pub fn active_count(&self) -> usize {
        self.categories.len() + self.charges.len() + self.resources.count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Whether `record` passes both the free-text search and `criteria`.
///
/// Search is a case-insensitive substring test against name, district and
/// address. An empty search matches everything.
pub fn matches(record: &HospitalRecord, criteria: &FilterCriteria, search_text: &str) -> bool {
    matches_needle(record, criteria, &search_text.to_lowercase())
}

/// Same as [`matches`] with the search text already lowercased.
pub(crate) fn matches_needle(
    record: &HospitalRecord,
    criteria: &FilterCriteria,
    needle: &str,
) -> bool {
    text_matches(record, needle)
        && (criteria.categories.is_empty() || criteria.categories.contains(&record.category))
        && (criteria.charges.is_empty() || criteria.charges.contains(&record.charges))
        && resources_match(record, &criteria.resources)
}

fn text_matches(record: &HospitalRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [&record.name, &record.district, &record.address]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn resources_match(record: &HospitalRecord, flags: &ResourceFlags) -> bool {
    BedKind::ALL
        .into_iter()
        .all(|kind| !flags.get(kind) || record.vacancy.get(kind) > 0)
}
