//! One-pass composition of search text and filter criteria over a dataset.

use std::sync::Arc;

use crate::filter::{matches_needle, FilterCriteria};
use crate::record::HospitalRecord;

/// Returns the records that match, in their original relative order.
///
/// The input is never modified. Applying the same criteria to the output
/// yields the output again.
pub fn filter_dataset(
    records: &[HospitalRecord],
    criteria: &FilterCriteria,
    search_text: &str,
) -> Vec<HospitalRecord> {
    let needle = search_text.to_lowercase();
    let filtered: Vec<HospitalRecord> = records
        .iter()
        .filter(|record| matches_needle(record, criteria, &needle))
        .cloned()
        .collect();

    tracing::debug!(
        total = records.len(),
        matched = filtered.len(),
        active_filters = criteria.active_count(),
        "filtered dataset"
    );
    filtered
}

/// Result count line shown above the list.
pub fn result_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Showing {count} hospital{plural}")
}

pub const EMPTY_RESULT_MESSAGE: &str = "No hospitals found matching your criteria";

/// Single-owner holder of the three query inputs and their derived result.
///
/// Every setter bumps a version counter. [`QueryState::filtered`] recomputes
/// only when the version moved and hands out the result as a shared,
/// immutable snapshot, so readers never observe a partially updated list.
#[derive(Debug, Clone)]
pub struct QueryState {
    records: Arc<[HospitalRecord]>,
    criteria: FilterCriteria,
    search_text: String,
    version: u64,
    cached: Option<(u64, Arc<[HospitalRecord]>)>,
}

impl QueryState {
    pub fn new(records: impl Into<Arc<[HospitalRecord]>>) -> Self {
        Self {
            records: records.into(),
            criteria: FilterCriteria::default(),
            search_text: String::new(),
            version: 0,
            cached: None,
        }
    }

    pub fn records(&self) -> &Arc<[HospitalRecord]> {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn set_records(&mut self, records: impl Into<Arc<[HospitalRecord]>>) {
        self.records = records.into();
        self.version += 1;
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if self.criteria != criteria {
            self.criteria = criteria;
            self.version += 1;
        }
    }

    /// Applies an in-place edit to a copy of the criteria and stores it.
    pub fn update_criteria(&mut self, edit: impl FnOnce(&mut FilterCriteria)) {
        let mut next = self.criteria.clone();
        edit(&mut next);
        self.set_criteria(next);
    }

    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        let search_text = search_text.into();
        if self.search_text != search_text {
            self.search_text = search_text;
            self.version += 1;
        }
    }

    /// The current filtered snapshot, recomputed if any input changed.
    pub fn filtered(&mut self) -> Arc<[HospitalRecord]> {
        if let Some((version, snapshot)) = &self.cached {
            if *version == self.version {
                return Arc::clone(snapshot);
            }
        }

        let snapshot: Arc<[HospitalRecord]> =
            filter_dataset(&self.records, &self.criteria, &self.search_text).into();
        self.cached = Some((self.version, Arc::clone(&snapshot)));
        snapshot
    }

    /// Last computed snapshot, if it is still current.
    pub fn peek(&self) -> Option<Arc<[HospitalRecord]>> {
        match &self.cached {
            Some((version, snapshot)) if *version == self.version => Some(Arc::clone(snapshot)),
            _ => None,
        }
    }
}
