use std::sync::Arc;

use bedwatch_core::{load_dataset, BedKind, Category, FilterCriteria, QueryState};

#[test]
fn snapshot_is_reused_until_an_input_changes() {
    let mut state = QueryState::new(load_dataset());
    let first = state.filtered();
    let second = state.filtered();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), 20);

    state.set_search_text("pune");
    let third = state.filtered();
    assert!(!Arc::ptr_eq(&second, &third));
    assert_eq!(third.len(), 2);

    // The earlier snapshot is untouched by the recomputation.
    assert_eq!(first.len(), 20);
}

#[test]
fn setting_equal_inputs_keeps_version() {
    let mut state = QueryState::new(load_dataset());
    state.set_search_text("");
    state.set_criteria(FilterCriteria::default());
    assert_eq!(state.version(), 0);

    state.update_criteria(|criteria| criteria.toggle_category(Category::Government));
    assert_eq!(state.version(), 1);
}

#[test]
fn peek_reports_stale_snapshot_as_none() {
    let mut state = QueryState::new(load_dataset());
    assert!(state.peek().is_none());

    let _ = state.filtered();
    assert!(state.peek().is_some());

    state.update_criteria(|criteria| criteria.toggle_resource(BedKind::IcuWithVentilator));
    assert!(state.peek().is_none());
}

#[test]
fn replacing_records_invalidates_snapshot() {
    let mut state = QueryState::new(load_dataset());
    assert_eq!(state.filtered().len(), 20);

    let subset: Vec<_> = load_dataset().into_iter().take(3).collect();
    state.set_records(subset);
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn several_inputs_change_before_one_recompute() {
    let mut state = QueryState::new(load_dataset());
    state.set_search_text("hyderabad");
    state.update_criteria(|criteria| criteria.toggle_category(Category::Government));

    let names: Vec<_> = state.filtered().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, ["Osmania General Hospital"]);
}
