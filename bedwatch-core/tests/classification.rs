use bedwatch_core::{
    find_record, load_dataset, occupancy_status, status_badge, total_vacant_beds, BedwatchError,
    Category, Charges, ColorIntent, HospitalRecord, OccupancyStatus, Vacancy,
};

fn hospital(capacity: u32, vacancy: [u32; 4]) -> HospitalRecord {
    let [a, b, c, d] = vacancy;
    HospitalRecord {
        id: "x".to_string(),
        district: "Pune".to_string(),
        name: "Probe Hospital".to_string(),
        category: Category::Charity,
        address: "1 Test Road".to_string(),
        charges: Charges::Regulated,
        capacity,
        vacancy: Vacancy::new(a, b, c, d),
        latitude: 18.5,
        longitude: 73.8,
    }
}

#[test]
fn reference_dataset_has_twenty_unique_records() {
    let records = load_dataset();
    assert_eq!(records.len(), 20);

    let mut ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);

    assert!(records.iter().all(|r| r.location().is_valid()));
}

#[test]
fn total_matches_field_sum_for_whole_dataset() {
    for record in load_dataset() {
        let v = record.vacancy;
        let expected = v.isolation_without_oxygen
            + v.isolation_with_oxygen
            + v.icu_without_ventilator
            + v.icu_with_ventilator;
        assert_eq!(total_vacant_beds(&record), expected, "record {}", record.id);
    }
}

#[test]
fn sskm_is_full_and_lilavati_is_limited() {
    let records = load_dataset();

    let sskm = find_record(&records, "10").unwrap();
    assert_eq!(sskm.name, "SSKM Hospital");
    assert_eq!(sskm.capacity, 1800);
    assert_eq!(total_vacant_beds(sskm), 0);
    assert_eq!(occupancy_status(sskm), OccupancyStatus::Full);

    let lilavati = find_record(&records, "1").unwrap();
    assert_eq!(lilavati.capacity, 450);
    assert_eq!(total_vacant_beds(lilavati), 28);
    assert_eq!(occupancy_status(lilavati), OccupancyStatus::Limited);
}

#[test]
fn zero_vacancy_is_full_regardless_of_capacity() {
    for capacity in [0, 1, 10, 5000] {
        assert_eq!(occupancy_status(&hospital(capacity, [0, 0, 0, 0])), OccupancyStatus::Full);
    }
}

#[test]
fn zero_capacity_is_full_regardless_of_vacancy() {
    assert_eq!(occupancy_status(&hospital(0, [5, 5, 5, 5])), OccupancyStatus::Full);
}

#[test]
fn ten_percent_boundary() {
    // 10 / 100 = 10% exactly.
    assert_eq!(occupancy_status(&hospital(100, [10, 0, 0, 0])), OccupancyStatus::Available);
    // 9 / 100 = 9%.
    assert_eq!(occupancy_status(&hospital(100, [4, 5, 0, 0])), OccupancyStatus::Limited);
    // 1 / 1000 = 0.1%.
    assert_eq!(occupancy_status(&hospital(1000, [0, 0, 0, 1])), OccupancyStatus::Limited);
    // 99 / 1000 = 9.9%.
    assert_eq!(occupancy_status(&hospital(1000, [90, 9, 0, 0])), OccupancyStatus::Limited);
}

#[test]
fn status_agrees_with_percentage_definition() {
    for capacity in 1..=60u32 {
        for vacant in 0..=70u32 {
            let record = hospital(capacity, [vacant, 0, 0, 0]);
            let pct = 100.0 * f64::from(vacant) / f64::from(capacity);
            let expected = if pct >= 10.0 {
                OccupancyStatus::Available
            } else if pct > 0.0 {
                OccupancyStatus::Limited
            } else {
                OccupancyStatus::Full
            };
            assert_eq!(occupancy_status(&record), expected, "{vacant}/{capacity}");
        }
    }
}

#[test]
fn over_capacity_counts_stay_available() {
    assert_eq!(occupancy_status(&hospital(10, [20, 20, 0, 0])), OccupancyStatus::Available);
}

#[test]
fn badges_use_fixed_labels_and_colours() {
    let expected = [
        (OccupancyStatus::Available, "Available", ColorIntent::Green, "#22c55e"),
        (OccupancyStatus::Limited, "Limited", ColorIntent::Amber, "#f59e0b"),
        (OccupancyStatus::Full, "Full", ColorIntent::Red, "#ef4444"),
    ];
    for (status, label, color, hex) in expected {
        assert_eq!(status.label(), label);
        assert_eq!(status.color_intent(), color);
        assert_eq!(status.marker_color(), hex);
    }
    let labels: std::collections::BTreeSet<_> =
        OccupancyStatus::ALL.into_iter().map(OccupancyStatus::label).collect();
    assert_eq!(labels.len(), 3);

    let badge = status_badge(&hospital(450, [12, 8, 5, 3]));
    assert_eq!(badge.status, OccupancyStatus::Limited);
    assert_eq!(badge.label, "Limited");
}

#[test]
fn missing_id_is_not_found() {
    let records = load_dataset();
    assert_eq!(
        find_record(&records, "99").unwrap_err(),
        BedwatchError::NotFound("99".to_string())
    );
}
