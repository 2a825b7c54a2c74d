//! Browser screen for hospital bed availability, built on `yew`.
//!
//! [`screen`] holds the controller state and [`logging`] routes `tracing`
//! events to the browser console. Both compile everywhere; the views only
//! build for `wasm32`.

pub mod logging;
pub mod screen;

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::rc::Rc;
    use std::sync::Arc;

    use bedwatch_core::{
        load_dataset, markers, occupancy_status, request_bed, total_vacant_beds,
        BedBreakdown, BedKind, BedwatchConfig, Category, Charges, FilterCriteria, GeoPoint,
        HospitalRecord, MapSurface, MapViewport, OccupancyStatus, QueueConfig, Toast,
        USER_MARKER_COLOR,
    };
    use bedwatch_core::request::{NO_BEDS_ACTION, NO_BEDS_HINT, REQUEST_BED_ACTION};
    use chrono::{DateTime, Utc};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{console, Document, Element, HtmlInputElement, Window};
    use yew::prelude::*;
    use yew::TargetCast;

    use crate::screen::{ScreenAction, ScreenState, ViewTab};
    use crate::styles;

    const MAP_WIDTH: f64 = 800.0;
    const MAP_HEIGHT: f64 = 560.0;

    impl Reducible for ScreenState {
        type Action = ScreenAction;

        fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
            let mut next = (*self).clone();
            next.apply(action);
            Rc::new(next)
        }
    }

    #[derive(Properties, PartialEq)]
    pub struct BedwatchAppProps {
        pub records: Vec<HospitalRecord>,
        pub config: BedwatchConfig,
    }

    #[function_component(BedwatchApp)]
    fn bedwatch_app(props: &BedwatchAppProps) -> Html {
        let state = {
            let records = props.records.clone();
            let config = props.config.clone();
            use_reducer(move || ScreenState::new(records, config))
        };

        let dispatch = {
            let dispatcher = state.dispatcher();
            Callback::from(move |action: ScreenAction| dispatcher.dispatch(action))
        };

        use_effect_with((), |_| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                if let Err(err) = styles::ensure_styles(&document) {
                    console::error_1(&err);
                }
            }
            || ()
        });

        {
            let dispatch = dispatch.clone();
            use_effect_with((), move |_| {
                request_location(dispatch);
                || ()
            });
        }

        {
            let dispatch = dispatch.clone();
            let toast = state.toast().map(|toast| toast.duration_ms).zip(state.toast_id());
            use_effect_with(toast, move |toast| {
                let handle = (*toast)
                    .and_then(|(duration_ms, id)| schedule_dismiss(id, duration_ms, dispatch));
                move || {
                    if let (Some(handle), Some(window)) = (handle, web_sys::window()) {
                        window.clear_timeout_with_handle(handle);
                    }
                }
            });
        }

        let filtered = state.filtered();
        let criteria = state.criteria().clone();

        let on_search = {
            let dispatch = dispatch.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                dispatch.emit(ScreenAction::SetSearch(input.value()));
            })
        };

        let on_toggle_filters = {
            let dispatch = dispatch.clone();
            Callback::from(move |_: MouseEvent| dispatch.emit(ScreenAction::ToggleFilterPanel))
        };

        let on_locate = {
            let dispatch = dispatch.clone();
            Callback::from(move |_: MouseEvent| request_location(dispatch.clone()))
        };

        let summary = state.summary();

        let active_filters = criteria.active_count();

        html! {
            <div class="bedwatch-root">
                <header class="bedwatch-hero">
                    <h1>{"Hospital Bed Availability"}</h1>
                    <p>{"Real-time bed tracking across hospitals"}</p>
                </header>
                <section class="bedwatch-toolbar">
                    <div class="toolbar-row">
                        <input
                            type="search"
                            placeholder="Search by city, district, or hospital name..."
                            value={state.search_text().to_string()}
                            oninput={on_search}
                            aria-label="Search hospitals"
                        />
                        <button type="button" class="bedwatch-button" onclick={on_toggle_filters}>
                            {"Filters"}
                            {
                                if active_filters > 0 {
                                    html! { <span class="filter-count">{ active_filters }</span> }
                                } else {
                                    Html::default()
                                }
                            }
                        </button>
                        {
                            if state.user_location().is_none() {
                                html! {
                                    <button type="button" class="bedwatch-button" onclick={on_locate}>
                                        {"My Location"}
                                    </button>
                                }
                            } else {
                                Html::default()
                            }
                        }
                    </div>
                    {
                        if state.filters_open() {
                            html! { <FilterPanel criteria={criteria.clone()} on_action={dispatch.clone()} /> }
                        } else {
                            Html::default()
                        }
                    }
                    <div class="result-summary">{ summary }</div>
                </section>
                <main class="bedwatch-content">
                    { render_tabs(state.tab(), dispatch.clone()) }
                    {
                        match state.tab() {
                            ViewTab::List => render_list(&filtered, state.empty_message(), dispatch.clone()),
                            ViewTab::Map => html! {
                                <MapView
                                    records={Arc::clone(&filtered)}
                                    surface={state.map_surface()}
                                    viewport={state.viewport()}
                                    user_location={state.user_location()}
                                    on_action={dispatch.clone()}
                                />
                            },
                        }
                    }
                </main>
                {
                    match state.selected() {
                        Some(record) => html! {
                            <DetailView
                                record={record.clone()}
                                queue={state.config().queue.clone()}
                                on_action={dispatch.clone()}
                            />
                        },
                        None => Html::default(),
                    }
                }
                {
                    match (state.toast(), state.toast_id()) {
                        (Some(toast), Some(id)) => render_toast(toast, id, dispatch.clone()),
                        _ => Html::default(),
                    }
                }
            </div>
        }
    }

    fn render_tabs(active: ViewTab, dispatch: Callback<ScreenAction>) -> Html {
        let tab_button = |tab: ViewTab, label: &'static str| {
            let dispatch = dispatch.clone();
            let onclick = Callback::from(move |_: MouseEvent| dispatch.emit(ScreenAction::ShowTab(tab)));
            html! {
                <button
                    type="button"
                    class={classes!("bedwatch-button", (active == tab).then_some("is-active"))}
                    {onclick}
                >
                    { label }
                </button>
            }
        };

        html! {
            <nav class="bedwatch-tabs" role="tablist">
                { tab_button(ViewTab::List, "List View") }
                { tab_button(ViewTab::Map, "Map View") }
            </nav>
        }
    }

    fn render_list(
        records: &[HospitalRecord],
        empty_message: Option<&'static str>,
        dispatch: Callback<ScreenAction>,
    ) -> Html {
        if let Some(message) = empty_message {
            return html! {
                <div class="bedwatch-empty">
                    <p>{ message }</p>
                </div>
            };
        }

        html! {
            <div class="hospital-grid">
                {
                    for records.iter().map(|record| html! {
                        <HospitalCard
                            key={record.id.clone()}
                            record={record.clone()}
                            on_action={dispatch.clone()}
                        />
                    })
                }
            </div>
        }
    }

    fn render_status_badge(status: OccupancyStatus) -> Html {
        html! {
            <span class="status-badge" data-status={status.key()}>{ status.label() }</span>
        }
    }

    #[derive(Properties, PartialEq)]
    struct FilterPanelProps {
        criteria: FilterCriteria,
        on_action: Callback<ScreenAction>,
    }

    #[function_component(FilterPanel)]
    fn filter_panel(props: &FilterPanelProps) -> Html {
        let criteria = &props.criteria;
        let checkbox = |checked: bool, label: &'static str, action: ScreenAction| {
            let on_action = props.on_action.clone();
            let onchange = Callback::from(move |_: Event| on_action.emit(action.clone()));
            html! {
                <label>
                    <input type="checkbox" checked={checked} {onchange} />
                    { label }
                </label>
            }
        };

        let on_clear = {
            let on_action = props.on_action.clone();
            Callback::from(move |_: MouseEvent| on_action.emit(ScreenAction::ClearFilters))
        };

        html! {
            <div class="filter-panel">
                <section>
                    <h3>{"Hospital Category"}</h3>
                    {
                        for Category::ALL.into_iter().map(|category| checkbox(
                            criteria.categories.contains(&category),
                            category.as_str(),
                            ScreenAction::ToggleCategory(category),
                        ))
                    }
                </section>
                <section>
                    <h3>{"Charges"}</h3>
                    {
                        for Charges::ALL.into_iter().map(|charges| checkbox(
                            criteria.charges.contains(&charges),
                            charges.as_str(),
                            ScreenAction::ToggleCharges(charges),
                        ))
                    }
                </section>
                <section>
                    <h3>{"Available Resources"}</h3>
                    {
                        for BedKind::ALL.into_iter().map(|kind| checkbox(
                            criteria.resources.get(kind),
                            kind.resource_label(),
                            ScreenAction::ToggleResource(kind),
                        ))
                    }
                </section>
                <section>
                    <button
                        type="button"
                        class="bedwatch-button"
                        disabled={criteria.is_empty()}
                        onclick={on_clear}
                    >
                        {"Clear All Filters"}
                    </button>
                </section>
            </div>
        }
    }

    #[derive(Properties, PartialEq)]
    struct HospitalCardProps {
        record: HospitalRecord,
        on_action: Callback<ScreenAction>,
    }

    #[function_component(HospitalCard)]
    fn hospital_card(props: &HospitalCardProps) -> Html {
        let record = &props.record;
        let status = occupancy_status(record);
        let vacant = total_vacant_beds(record);

        let onclick = {
            let on_action = props.on_action.clone();
            let id = record.id.clone();
            Callback::from(move |_: MouseEvent| on_action.emit(ScreenAction::Select(id.clone())))
        };

        html! {
            <article class="hospital-card" {onclick}>
                <div class="card-header">
                    <h3>{ record.name.clone() }</h3>
                    { render_status_badge(status) }
                </div>
                <p class="card-address">{ record.address.clone() }</p>
                <p class="card-vacant">{ format!("{vacant} Vacant Beds") }</p>
                <div class="tag-row">
                    <span class="tag">{ record.category.as_str() }</span>
                    <span class="tag">{ record.charges.as_str() }</span>
                </div>
            </article>
        }
    }

    #[derive(Properties, PartialEq)]
    struct DetailViewProps {
        record: HospitalRecord,
        queue: QueueConfig,
        on_action: Callback<ScreenAction>,
    }

    #[function_component(DetailView)]
    fn detail_view(props: &DetailViewProps) -> Html {
        let record = &props.record;
        let status = occupancy_status(record);
        let breakdown = BedBreakdown::of(record);
        let is_full = status == OccupancyStatus::Full;

        let on_close = {
            let on_action = props.on_action.clone();
            Callback::from(move |_: MouseEvent| on_action.emit(ScreenAction::CloseDetail))
        };
        let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

        let on_request = {
            let record = record.clone();
            let queue = props.queue.clone();
            let on_action = props.on_action.clone();
            Callback::from(move |_: MouseEvent| {
                let now_ms = js_sys::Date::now();
                let requested_at =
                    DateTime::<Utc>::from_timestamp_millis(now_ms as i64).unwrap_or_default();
                let mut rng =
                    SmallRng::seed_from_u64(js_sys::Math::random().to_bits() ^ now_ms.to_bits());
                match request_bed(&record, &queue, &mut rng, requested_at) {
                    Ok(ack) => on_action.emit(ScreenAction::BedRequested(ack)),
                    Err(err) => console::warn_1(&JsValue::from_str(&err.to_string())),
                }
            })
        };

        html! {
            <div class="detail-backdrop" onclick={on_close}>
                <div class="detail-dialog" role="dialog" aria-modal="true" onclick={keep_open}>
                    <header class="card-header">
                        <h2>{ record.name.clone() }</h2>
                        { render_status_badge(status) }
                    </header>
                    <p class="card-address">{"Complete availability and resource information"}</p>
                    <p>{ record.address.clone() }</p>
                    <div class="tag-row">
                        <span class="tag">{ record.category.as_str() }</span>
                        <span class="tag">{ record.charges.as_str() }</span>
                    </div>
                    <div class="detail-summary">
                        <div>
                            <span>{"Total Vacant Beds"}</span>
                            <strong>{ breakdown.total_vacant }</strong>
                        </div>
                        <div>
                            <span>{"Total Capacity"}</span>
                            <strong>{ breakdown.capacity }</strong>
                        </div>
                    </div>
                    <section>
                        <h3>{"Bed Availability by Type"}</h3>
                        {
                            for breakdown.rows.iter().map(|row| html! {
                                <div class="breakdown-row">
                                    <span>{ row.label.clone() }</span>
                                    <strong>{ row.vacant }</strong>
                                </div>
                            })
                        }
                    </section>
                    <button
                        type="button"
                        class="bedwatch-button is-primary"
                        disabled={is_full}
                        onclick={on_request}
                    >
                        { if is_full { NO_BEDS_ACTION } else { REQUEST_BED_ACTION } }
                    </button>
                    {
                        if is_full {
                            html! { <p class="detail-hint">{ NO_BEDS_HINT }</p> }
                        } else {
                            Html::default()
                        }
                    }
                </div>
            </div>
        }
    }

    #[derive(Properties, PartialEq)]
    struct MapViewProps {
        records: Arc<[HospitalRecord]>,
        surface: MapSurface,
        viewport: MapViewport,
        user_location: Option<GeoPoint>,
        on_action: Callback<ScreenAction>,
    }

    #[function_component(MapView)]
    fn map_view(props: &MapViewProps) -> Html {
        let draft = use_state(String::new);

        if props.surface == MapSurface::NotConfigured {
            let on_input = {
                let draft = draft.clone();
                Callback::from(move |event: InputEvent| {
                    let input: HtmlInputElement = event.target_unchecked_into();
                    draft.set(input.value());
                })
            };
            let on_submit = {
                let draft = draft.clone();
                let on_action = props.on_action.clone();
                Callback::from(move |event: SubmitEvent| {
                    event.prevent_default();
                    on_action.emit(ScreenAction::SetMapToken((*draft).clone()));
                })
            };

            return html! {
                <div class="map-frame">
                    <div class="map-setup">
                        <form onsubmit={on_submit}>
                            <h3>{"Map Token Required"}</h3>
                            <p>{"Please enter your map public token to view the interactive map."}</p>
                            <input
                                type="text"
                                placeholder="pk.eyJ1..."
                                value={(*draft).clone()}
                                oninput={on_input}
                            />
                            <button
                                type="submit"
                                class="bedwatch-button is-primary"
                                disabled={draft.trim().is_empty()}
                            >
                                {"Load Map"}
                            </button>
                        </form>
                    </div>
                </div>
            };
        }

        let viewport = props.viewport;
        let view_box = format!("0 0 {MAP_WIDTH} {MAP_HEIGHT}");

        html! {
            <div class="map-frame">
                <svg viewBox={view_box} role="img" aria-label="Hospital map">
                    {
                        for markers(&props.records).into_iter().map(|marker| {
                            let (x, y) = viewport.project(marker.position, MAP_WIDTH, MAP_HEIGHT);
                            let on_action = props.on_action.clone();
                            let id = marker.hospital_id.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                on_action.emit(ScreenAction::Select(id.clone()))
                            });
                            html! {
                                <circle
                                    class="map-marker"
                                    cx={format!("{x:.1}")}
                                    cy={format!("{y:.1}")}
                                    r="12"
                                    fill={marker.color}
                                    {onclick}
                                >
                                    <title>{ marker.name }</title>
                                </circle>
                            }
                        })
                    }
                    {
                        match props.user_location {
                            Some(point) => {
                                let (x, y) = viewport.project(point, MAP_WIDTH, MAP_HEIGHT);
                                html! {
                                    <circle
                                        class="map-marker"
                                        cx={format!("{x:.1}")}
                                        cy={format!("{y:.1}")}
                                        r="8"
                                        fill={USER_MARKER_COLOR}
                                    />
                                }
                            }
                            None => Html::default(),
                        }
                    }
                </svg>
                <div class="map-legend">
                    {
                        for OccupancyStatus::ALL.into_iter().map(|status| html! {
                            <div>
                                <span class="legend-dot" style={format!("background:{}", status.marker_color())}></span>
                                { status.legend() }
                            </div>
                        })
                    }
                </div>
            </div>
        }
    }

    fn render_toast(toast: &Toast, id: u64, dispatch: Callback<ScreenAction>) -> Html {
        let onclick =
            Callback::from(move |_: MouseEvent| dispatch.emit(ScreenAction::DismissToast(id)));
        html! {
            <div class="bedwatch-toast" role="status" {onclick}>
                <h4>{ toast.title.clone() }</h4>
                <p>{ toast.description.clone() }</p>
            </div>
        }
    }

    /// Returns the timer handle so the effect can cancel it when the toast changes.
    fn schedule_dismiss(
        id: u64,
        duration_ms: u32,
        dispatch: Callback<ScreenAction>,
    ) -> Option<i32> {
        let window = web_sys::window()?;
        let callback = Closure::once_into_js(move || dispatch.emit(ScreenAction::DismissToast(id)));
        let timeout = i32::try_from(duration_ms).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            timeout,
        ) {
            Ok(handle) => Some(handle),
            Err(err) => {
                console::error_1(&err);
                None
            }
        }
    }

    /// Fire-and-forget geolocation lookup. May never call back.
    fn request_location(dispatch: Callback<ScreenAction>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let geolocation = match window.navigator().geolocation() {
            Ok(geolocation) => geolocation,
            Err(_) => {
                dispatch.emit(ScreenAction::LocationFailed(
                    "geolocation is not supported".to_string(),
                ));
                return;
            }
        };

        let on_success = {
            let dispatch = dispatch.clone();
            Closure::once_into_js(move |position: JsValue| match read_position(&position) {
                Some(point) => dispatch.emit(ScreenAction::LocationResolved(point)),
                None => dispatch.emit(ScreenAction::LocationFailed(
                    "position has no usable coordinates".to_string(),
                )),
            })
        };
        let on_error = Closure::once_into_js(move |error: JsValue| {
            console::log_2(&JsValue::from_str("Geolocation error:"), &error);
            dispatch.emit(ScreenAction::LocationFailed(
                "geolocation request was rejected".to_string(),
            ));
        });

        if let Err(err) = geolocation.get_current_position_with_error_callback(
            on_success.unchecked_ref::<js_sys::Function>(),
            Some(on_error.unchecked_ref::<js_sys::Function>()),
        ) {
            console::error_1(&err);
        }
    }

    fn read_position(position: &JsValue) -> Option<GeoPoint> {
        let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords")).ok()?;
        let longitude = js_sys::Reflect::get(&coords, &JsValue::from_str("longitude"))
            .ok()?
            .as_f64()?;
        let latitude = js_sys::Reflect::get(&coords, &JsValue::from_str("latitude"))
            .ok()?
            .as_f64()?;
        Some(GeoPoint::new(longitude, latitude))
    }

    /// Mounts the screen under `selector` with the reference dataset.
    ///
    /// `config` is an optional `BedwatchConfig`-shaped object.
    #[wasm_bindgen]
    pub fn mount_bedwatch(selector: &str, config: JsValue) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        crate::logging::init_browser_logging();

        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Cannot access document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Invalid selector: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("No element matches the selector"))?;

        let config: BedwatchConfig = if config.is_undefined() || config.is_null() {
            BedwatchConfig::default()
        } else {
            from_value(config)?
        };
        config
            .validate()
            .map_err(|err| JsValue::from_str(&format!("Bedwatch error: {err}")))?;

        yew::Renderer::<BedwatchApp>::with_root_and_props(
            target,
            BedwatchAppProps {
                records: load_dataset(),
                config,
            },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_bedwatch;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_bedwatch(_: &str, _: wasm_bindgen::JsValue) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "bedwatch-ui only supports the wasm32 target",
    ))
}
