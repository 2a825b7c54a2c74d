//! State owned by the top-level screen controller.
//!
//! Views receive immutable snapshots of this state plus a dispatch callback.
//! Every input change goes through [`ScreenState::apply`], which recomputes
//! the filtered list in one step so views never see a half-applied update.

use std::sync::Arc;

use bedwatch_core::{
    find_record, result_summary, BedKind, BedRequestAck, BedwatchConfig, Category, Charges, FilterCriteria,
    GeoPoint, HospitalRecord, MapSurface, MapViewport, QueryState, Toast, EMPTY_RESULT_MESSAGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    #[default]
    List,
    Map,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    SetSearch(String),
    ToggleCategory(Category),
    ToggleCharges(Charges),
    ToggleResource(BedKind),
    ClearFilters,
    ToggleFilterPanel,
    ShowTab(ViewTab),
    Select(String),
    CloseDetail,
    LocationResolved(GeoPoint),
    LocationFailed(String),
    SetMapToken(String),
    BedRequested(BedRequestAck),
    /// Dismisses the toast with this id. Ignored once a newer toast replaced it.
    DismissToast(u64),
}

#[derive(Debug, Clone)]
pub struct ScreenState {
    query: QueryState,
    filtered: Arc<[HospitalRecord]>,
    selected: Option<String>,
    user_location: Option<GeoPoint>,
    config: BedwatchConfig,
    tab: ViewTab,
    filters_open: bool,
    toast: Option<(u64, Toast)>,
    next_toast_id: u64,
}

impl ScreenState {
    pub fn new(records: Vec<HospitalRecord>, config: BedwatchConfig) -> Self {
        let mut query = QueryState::new(records);
        let filtered = query.filtered();
        Self {
            query,
            filtered,
            selected: None,
            user_location: None,
            config,
            tab: ViewTab::default(),
            filters_open: false,
            toast: None,
            next_toast_id: 0,
        }
    }

    pub fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::SetSearch(text) => self.query.set_search_text(text),
            ScreenAction::ToggleCategory(category) => self
                .query
                .update_criteria(|criteria| criteria.toggle_category(category)),
            ScreenAction::ToggleCharges(charges) => self
                .query
                .update_criteria(|criteria| criteria.toggle_charges(charges)),
            ScreenAction::ToggleResource(kind) => self
                .query
                .update_criteria(|criteria| criteria.toggle_resource(kind)),
            ScreenAction::ClearFilters => self.query.set_criteria(FilterCriteria::default()),
            ScreenAction::ToggleFilterPanel => self.filters_open = !self.filters_open,
            ScreenAction::ShowTab(tab) => self.tab = tab,
            ScreenAction::Select(id) => self.selected = Some(id),
            ScreenAction::CloseDetail => self.selected = None,
            ScreenAction::LocationResolved(point) => {
                if point.is_valid() {
                    self.user_location = Some(point);
                    self.show_toast(Toast::location_detected());
                } else {
                    tracing::warn!(?point, "geolocation returned an unusable position");
                }
            }
            ScreenAction::LocationFailed(reason) => {
                tracing::info!(%reason, "geolocation unavailable");
            }
            ScreenAction::SetMapToken(token) => {
                let token = token.trim().to_string();
                self.config.map.access_token = (!token.is_empty()).then_some(token);
            }
            ScreenAction::BedRequested(ack) => {
                self.show_toast(ack.toast());
                self.selected = None;
            }
            ScreenAction::DismissToast(id) => {
                if self.toast_id() == Some(id) {
                    self.toast = None;
                }
            }
        }

        self.filtered = self.query.filtered();
    }

    fn show_toast(&mut self, toast: Toast) {
        self.next_toast_id += 1;
        self.toast = Some((self.next_toast_id, toast));
    }

    /// Current filtered snapshot, shared by the list and the map.
    pub fn filtered(&self) -> Arc<[HospitalRecord]> {
        Arc::clone(&self.filtered)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        self.query.criteria()
    }

    pub fn search_text(&self) -> &str {
        self.query.search_text()
    }

    /// Looked up in the full dataset so a selection survives re-filtering.
    pub fn selected(&self) -> Option<&HospitalRecord> {
        let id = self.selected.as_deref()?;
        find_record(self.query.records(), id).ok()
    }

    pub fn user_location(&self) -> Option<GeoPoint> {
        self.user_location
    }

    pub fn config(&self) -> &BedwatchConfig {
        &self.config
    }

    pub fn tab(&self) -> ViewTab {
        self.tab
    }

    pub fn filters_open(&self) -> bool {
        self.filters_open
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref().map(|(_, toast)| toast)
    }

    /// Identity of the visible toast; changes whenever a toast replaces another.
    pub fn toast_id(&self) -> Option<u64> {
        self.toast.as_ref().map(|(id, _)| *id)
    }

    /// Count line above the results. Always shown, including "Showing 0 hospitals".
    pub fn summary(&self) -> String {
        result_summary(self.filtered.len())
    }

    /// Body shown in place of the list when nothing matches.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.filtered.is_empty().then_some(EMPTY_RESULT_MESSAGE)
    }

    pub fn map_surface(&self) -> MapSurface {
        MapSurface::resolve(&self.config.map)
    }

    pub fn viewport(&self) -> MapViewport {
        MapViewport::for_location(&self.config.map, self.user_location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bedwatch_core::load_dataset;
    use chrono::Utc;

    fn screen() -> ScreenState {
        ScreenState::new(load_dataset(), BedwatchConfig::default())
    }

    #[test]
    fn starts_with_everything_listed() {
        let screen = screen();
        assert_eq!(screen.filtered().len(), 20);
        assert!(screen.selected().is_none());
        assert_eq!(screen.tab(), ViewTab::List);
    }

    #[test]
    fn search_and_toggles_recompute_the_snapshot() {
        let mut screen = screen();
        let before = screen.filtered();

        screen.apply(ScreenAction::SetSearch("chennai".to_string()));
        assert_eq!(screen.filtered().len(), 2);

        screen.apply(ScreenAction::ToggleCategory(Category::Private));
        let names: Vec<_> = screen.filtered().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, ["Apollo Hospitals"]);

        screen.apply(ScreenAction::ClearFilters);
        screen.apply(ScreenAction::SetSearch(String::new()));
        assert_eq!(screen.filtered().len(), 20);

        // Earlier snapshots are never patched.
        assert_eq!(before.len(), 20);
    }

    #[test]
    fn selection_survives_filtering_it_out() {
        let mut screen = screen();
        screen.apply(ScreenAction::Select("10".to_string()));
        screen.apply(ScreenAction::SetSearch("mumbai".to_string()));
        assert_eq!(screen.selected().map(|r| r.name.as_str()), Some("SSKM Hospital"));

        screen.apply(ScreenAction::CloseDetail);
        assert!(screen.selected().is_none());
    }

    #[test]
    fn location_recentres_map_without_touching_results() {
        let mut screen = screen();
        screen.apply(ScreenAction::LocationResolved(GeoPoint::new(72.83, 19.06)));
        assert_eq!(screen.viewport().zoom, 12.0);
        assert_eq!(screen.filtered().len(), 20);
        assert_eq!(screen.toast().map(|t| t.title.as_str()), Some("Location Detected"));
    }

    #[test]
    fn bad_or_failed_location_keeps_default_region() {
        let mut screen = screen();
        screen.apply(ScreenAction::LocationResolved(GeoPoint::new(f64::NAN, 0.0)));
        screen.apply(ScreenAction::LocationFailed("denied".to_string()));
        assert!(screen.user_location().is_none());
        assert_eq!(screen.viewport().zoom, 4.5);
        assert!(screen.toast().is_none());
    }

    #[test]
    fn map_token_controls_surface() {
        let mut screen = screen();
        assert_eq!(screen.map_surface(), MapSurface::NotConfigured);

        screen.apply(ScreenAction::SetMapToken("  pk.abc ".to_string()));
        assert_eq!(
            screen.map_surface(),
            MapSurface::Ready {
                token: "pk.abc".to_string()
            }
        );

        screen.apply(ScreenAction::SetMapToken("   ".to_string()));
        assert_eq!(screen.map_surface(), MapSurface::NotConfigured);
    }

    #[test]
    fn bed_request_closes_detail_and_shows_toast() {
        let mut screen = screen();
        screen.apply(ScreenAction::Select("2".to_string()));
        screen.apply(ScreenAction::BedRequested(BedRequestAck {
            hospital_id: "2".to_string(),
            hospital_name: "KEM Hospital".to_string(),
            queue_position: 4,
            requested_at: Utc::now(),
            simulated: true,
        }));

        assert!(screen.selected().is_none());
        let toast = screen.toast().unwrap();
        assert_eq!(toast.title, "Request Sent Successfully");
        assert!(toast.description.contains("#4"));

        let id = screen.toast_id().unwrap();
        screen.apply(ScreenAction::DismissToast(id));
        assert!(screen.toast().is_none());
    }

    #[test]
    fn stale_dismiss_leaves_newer_toast_visible() {
        let mut screen = screen();
        screen.apply(ScreenAction::LocationResolved(GeoPoint::new(72.83, 19.06)));
        let location_toast = screen.toast_id().unwrap();

        screen.apply(ScreenAction::BedRequested(BedRequestAck {
            hospital_id: "1".to_string(),
            hospital_name: "Lilavati Hospital and Research Centre".to_string(),
            queue_position: 7,
            requested_at: Utc::now(),
            simulated: true,
        }));
        let request_toast = screen.toast_id().unwrap();
        assert_ne!(location_toast, request_toast);

        screen.apply(ScreenAction::DismissToast(location_toast));
        assert_eq!(
            screen.toast().map(|t| t.title.as_str()),
            Some("Request Sent Successfully")
        );

        screen.apply(ScreenAction::DismissToast(request_toast));
        assert!(screen.toast().is_none());
    }

    #[test]
    fn empty_result_keeps_count_line() {
        let mut screen = screen();
        assert_eq!(screen.summary(), "Showing 20 hospitals");
        assert!(screen.empty_message().is_none());

        screen.apply(ScreenAction::SetSearch("atlantis".to_string()));
        assert_eq!(screen.summary(), "Showing 0 hospitals");
        assert_eq!(
            screen.empty_message(),
            Some("No hospitals found matching your criteria")
        );
    }
}
