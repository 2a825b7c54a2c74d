use std::io::Write;

use bedwatch_core::request::{NO_BEDS_ACTION, NO_BEDS_HINT};
use bedwatch_core::{
    can_request_bed, occupancy_percent, occupancy_status, result_summary, total_vacant_beds,
    BedBreakdown, HospitalRecord, MapSurface, MapViewport, Marker, Toast, EMPTY_RESULT_MESSAGE,
    USER_MARKER_COLOR,
};
use serde::Serialize;

pub fn list(out: &mut impl Write, records: &[HospitalRecord]) -> anyhow::Result<()> {
    if records.is_empty() {
        writeln!(out, "{EMPTY_RESULT_MESSAGE}")?;
        return Ok(());
    }

    writeln!(out, "{}", result_summary(records.len()))?;
    for record in records {
        let status = occupancy_status(record);
        writeln!(out)?;
        writeln!(out, "[{}] {} ({})", record.id, record.name, status.label())?;
        writeln!(
            out,
            "    {} | {} | {} | {} vacant beds",
            record.district,
            record.category,
            record.charges,
            total_vacant_beds(record)
        )?;
        writeln!(out, "    {}", record.address)?;
    }
    Ok(())
}

pub fn detail(out: &mut impl Write, record: &HospitalRecord) -> anyhow::Result<()> {
    let status = occupancy_status(record);
    let breakdown = BedBreakdown::of(record);

    writeln!(out, "{} [{}]", record.name, status.label())?;
    writeln!(out, "{}", record.address)?;
    writeln!(out, "{} | {}", record.category, record.charges)?;
    writeln!(out)?;
    writeln!(out, "Total Vacant Beds: {}", breakdown.total_vacant)?;
    writeln!(out, "Total Capacity:    {}", breakdown.capacity)?;
    if let Some(pct) = occupancy_percent(record) {
        writeln!(out, "Vacant share:      {pct:.1}%")?;
    }
    writeln!(out)?;
    writeln!(out, "Bed Availability by Type")?;
    for row in &breakdown.rows {
        writeln!(out, "  {:<28}{:>6}", row.label, row.vacant)?;
    }

    if !can_request_bed(record) {
        writeln!(out)?;
        writeln!(out, "{NO_BEDS_ACTION}: {NO_BEDS_HINT}")?;
    }
    Ok(())
}

pub fn toast(out: &mut impl Write, toast: &Toast) -> anyhow::Result<()> {
    writeln!(out, "{} (simulated)", toast.title)?;
    writeln!(out, "{}", toast.description)?;
    Ok(())
}

pub fn map(
    out: &mut impl Write,
    surface: &MapSurface,
    viewport: &MapViewport,
    markers: &[Marker],
) -> anyhow::Result<()> {
    match surface {
        MapSurface::NotConfigured => writeln!(
            out,
            "Map not configured: set BEDWATCH_MAP_TOKEN or map.access_token to enable tiles."
        )?,
        MapSurface::Ready { .. } => writeln!(out, "Map ready.")?,
    }
    writeln!(
        out,
        "Centre: {:.4}, {:.4} (lng, lat) at zoom {}",
        viewport.center.longitude, viewport.center.latitude, viewport.zoom
    )?;
    writeln!(out, "User marker colour: {USER_MARKER_COLOR}")?;
    writeln!(out)?;
    for marker in markers {
        writeln!(
            out,
            "{:>4}  {:<40} {:>9.4} {:>9.4}  {} {}",
            marker.hospital_id,
            marker.name,
            marker.position.longitude,
            marker.position.latitude,
            marker.color,
            marker.status.label()
        )?;
    }
    Ok(())
}

pub fn json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bedwatch_core::{filter_dataset, find_record, load_dataset, FilterCriteria};

    fn render_to_string(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_list_prints_message() {
        let text = render_to_string(|out| list(out, &[]));
        assert_eq!(text, "No hospitals found matching your criteria\n");
    }

    #[test]
    fn list_shows_status_and_vacancy() {
        let records = load_dataset();
        let filtered = filter_dataset(&records, &FilterCriteria::default(), "lilavati");
        let text = render_to_string(|out| list(out, &filtered));
        assert!(text.starts_with("Showing 1 hospital\n"));
        assert!(text.contains("[1] Lilavati Hospital and Research Centre (Limited)"));
        assert!(text.contains("28 vacant beds"));
    }

    #[test]
    fn full_hospital_detail_explains_refusal() {
        let records = load_dataset();
        let sskm = find_record(&records, "10").unwrap();
        let text = render_to_string(|out| detail(out, sskm));
        assert!(text.starts_with("SSKM Hospital [Full]"));
        assert!(text.contains("No Beds Available"));
    }

    #[test]
    fn detail_badge_matches_list_badge() {
        let records = load_dataset();
        let lilavati = find_record(&records, "1").unwrap();
        let text = render_to_string(|out| detail(out, lilavati));
        assert!(text.starts_with("Lilavati Hospital and Research Centre [Limited]\n"));
        assert!(!text.contains("Limited Availability"));
    }
}
