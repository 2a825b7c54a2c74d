use bedwatch_core::{
    filter_dataset, load_dataset, matches, result_summary, BedKind, Category, Charges,
    FilterCriteria, HospitalRecord, Vacancy,
};

fn names(records: &[HospitalRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

fn aiims() -> HospitalRecord {
    load_dataset().into_iter().find(|r| r.id == "3").unwrap()
}

#[test]
fn empty_criteria_and_search_return_everything_in_order() {
    let records = load_dataset();
    let filtered = filter_dataset(&records, &FilterCriteria::default(), "");
    assert_eq!(filtered, records);
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let record = aiims();
    let criteria = FilterCriteria::default();

    assert!(matches(&record, &criteria, "delhi"));
    assert!(matches(&record, &criteria, "AIIMS"));
    assert!(matches(&record, &criteria, "ansari nagar"));
    assert!(!matches(&record, &criteria, "mumbai"));
}

#[test]
fn search_by_district_keeps_source_order() {
    let records = load_dataset();
    let filtered = filter_dataset(&records, &FilterCriteria::default(), "KOLKATA");
    assert_eq!(names(&filtered), ["AMRI Hospitals", "SSKM Hospital"]);
}

#[test]
fn category_filter_is_or_within_field() {
    let mut criteria = FilterCriteria::default();
    criteria.toggle_category(Category::Government);
    criteria.toggle_category(Category::Private);

    let mut record = aiims();
    record.category = Category::Private;
    assert!(matches(&record, &criteria, ""));

    record.category = Category::Charity;
    assert!(!matches(&record, &criteria, ""));
}

#[test]
fn charges_filter_restricts_to_selected_types() {
    let records = load_dataset();
    let mut criteria = FilterCriteria::default();
    criteria.toggle_charges(Charges::Regulated);

    let filtered = filter_dataset(&records, &criteria, "");
    assert_eq!(names(&filtered), ["Victoria Hospital"]);
}

#[test]
fn any_resource_flag_excludes_a_record_with_no_vacancy() {
    let mut record = aiims();
    record.vacancy = Vacancy::default();

    for kind in BedKind::ALL {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_resource(kind);
        assert!(!matches(&record, &criteria, ""), "{kind:?}");
    }
}

#[test]
fn ventilator_flag_needs_icu_with_ventilator_beds() {
    let mut criteria = FilterCriteria::default();
    criteria.toggle_resource(BedKind::IcuWithVentilator);

    let mut record = aiims();
    record.vacancy = Vacancy::new(10, 10, 10, 0);
    assert!(!matches(&record, &criteria, ""));

    record.vacancy = Vacancy::new(0, 0, 0, 1);
    assert!(matches(&record, &criteria, ""));
}

#[test]
fn resource_flags_combine_with_and() {
    let mut criteria = FilterCriteria::default();
    criteria.toggle_resource(BedKind::IsolationWithoutOxygen);
    criteria.toggle_resource(BedKind::IcuWithVentilator);

    // AIIMS has no isolation-without-oxygen beds but one ventilator bed.
    assert!(!matches(&aiims(), &criteria, ""));
}

#[test]
fn all_conditions_must_hold() {
    let records = load_dataset();
    let mut criteria = FilterCriteria::default();
    criteria.toggle_category(Category::Government);
    criteria.toggle_charges(Charges::Free);
    criteria.toggle_resource(BedKind::IsolationWithOxygen);

    let filtered = filter_dataset(&records, &criteria, "delhi");
    assert_eq!(names(&filtered), ["AIIMS Delhi"]);

    criteria.toggle_resource(BedKind::IcuWithoutVentilator);
    assert!(filter_dataset(&records, &criteria, "delhi").is_empty());
}

#[test]
fn filtering_is_idempotent() {
    let records = load_dataset();
    let mut criteria = FilterCriteria::default();
    criteria.toggle_category(Category::Private);
    criteria.toggle_resource(BedKind::IcuWithVentilator);

    let once = filter_dataset(&records, &criteria, "hospital");
    let twice = filter_dataset(&once, &criteria, "hospital");
    assert_eq!(once, twice);
    assert!(!once.is_empty());
}

#[test]
fn filtering_does_not_touch_the_input() {
    let records = load_dataset();
    let before = records.clone();
    let _ = filter_dataset(&records, &FilterCriteria::default(), "zzz");
    assert_eq!(records, before);
}

#[test]
fn empty_dataset_is_a_valid_input() {
    assert!(filter_dataset(&[], &FilterCriteria::default(), "").is_empty());
}

#[test]
fn toggles_count_and_clear() {
    let mut criteria = FilterCriteria::default();
    assert!(criteria.is_empty());

    criteria.toggle_category(Category::Charity);
    criteria.toggle_charges(Charges::Free);
    criteria.toggle_charges(Charges::Paid);
    criteria.toggle_resource(BedKind::IcuWithoutVentilator);
    assert_eq!(criteria.active_count(), 4);

    criteria.toggle_charges(Charges::Free);
    criteria.toggle_resource(BedKind::IcuWithoutVentilator);
    assert_eq!(criteria.active_count(), 2);

    criteria.clear();
    assert_eq!(criteria, FilterCriteria::default());
}

#[test]
fn summary_pluralises() {
    assert_eq!(result_summary(0), "Showing 0 hospitals");
    assert_eq!(result_summary(1), "Showing 1 hospital");
    assert_eq!(result_summary(20), "Showing 20 hospitals");
}
