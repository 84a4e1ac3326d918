//! HAQ Index World Dashboard
//!
//! A choropleth world map of the Healthcare Access and Quality (HAQ) Index
//! with linked drill-down charts for the selected country: two gauges
//! (1990 and 2019), a life-stage pie, a cancer statistics bar chart and a
//! disease impact dumbbell chart.
//!
//! Data flow:
//! 1. On mount, the dataset CSV and the world GeoJSON (served next to the
//!    WASM bundle) are fetched concurrently.
//! 2. Both are parsed into an in-memory SQLite database and projected map
//!    shapes before any state is published.
//! 3. The year selector recolors the map; a country click recomputes the
//!    drill-down, which every chart below the map reads.

use haq_chart_ui::components::{
    BarChart, ChartContainer, DumbbellChart, ErrorDisplay, Gauge, LoadingSpinner, PieChart,
    WorldMap, YearSelector,
};
use haq_chart_ui::controller::{prepare, use_drill_down};
use haq_chart_ui::js_bridge;
use haq_chart_ui::state::AppState;
use haq_core::indicator::{BASELINE_YEAR, LATEST_YEAR};
use dioxus::prelude::*;

/// Runtime-fetched indicator dataset (served alongside WASM).
const DATASET_URL: &str = "./Dataset/Dataset.csv";

/// Runtime-fetched world boundaries (served alongside WASM).
const GEOJSON_URL: &str = "./GeoJson/world.geojson";

const DASHBOARD_CSS: &str = r#"
body { margin: 0; background: #1b1f2a; color: white; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }
.dashboard { display: grid; grid-template-columns: 2fr 1fr; gap: 12px; padding: 12px; }
.charts-row { grid-column: 1 / span 2; display: flex; flex-wrap: wrap; gap: 12px; justify-content: space-around; }
.gauges { display: flex; flex-direction: column; gap: 12px; }
.gauge { width: 180px; margin: 0 auto; }
.gauge-caption { text-align: center; font-size: 12px; }
.world-map { display: block; cursor: grab; }
.country { stroke: #333; stroke-width: 0.3; transition: fill 500ms; }
.country:hover { stroke: white; stroke-width: 0.8; }
.zoom-controls rect { fill: #444; cursor: pointer; }
#year-select { position: absolute; top: 10px; left: 10px; }
.tooltip { padding: 6px 10px; background: rgba(0, 0, 0, 0.6); border-radius: 6px; color: #fff; transition: opacity 200ms; z-index: 10; }
.pie-slice { stroke-width: 1px; }
"#;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("haq-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Fetch and load both data files on mount
    use_effect(move || {
        spawn(async move {
            let (csv_data, geojson) =
                match js_bridge::fetch_text_pair(DATASET_URL, GEOJSON_URL).await {
                    Ok(pair) => pair,
                    Err(e) => {
                        let message = format!("Failed to fetch data files: {}", e);
                        log::error!("{}", message);
                        state.fail(message);
                        return;
                    }
                };

            match prepare(&csv_data, &geojson) {
                Ok(data) => {
                    log::info!(
                        "Loaded {} boundary features and {} years",
                        data.shapes.len(),
                        data.years.len()
                    );
                    state.install(data);
                }
                Err(e) => {
                    let message = format!("Failed to load data files: {}", e);
                    log::error!("{}", message);
                    state.fail(message);
                }
            }
        });
    });

    // Recomputed on every country click, never on a year change
    let drill = use_drill_down(state);

    rsx! {
        style { {DASHBOARD_CSS} }

        if let Some(err) = (state.error_msg)() {
            ErrorDisplay { message: err }
        } else if (state.loading)() {
            LoadingSpinner {}
        } else {
            div {
                class: "dashboard",

                ChartContainer {
                    id: "container1".to_string(),
                    WorldMap {}
                    YearSelector {}
                }

                div {
                    class: "gauges",
                    h3 { "{state.selected_country}" }
                    if let Some(d) = drill() {
                        Gauge {
                            id: "inner-container1".to_string(),
                            year: BASELINE_YEAR.to_string(),
                            value: d.baseline.value,
                        }
                        Gauge {
                            id: "inner-container2".to_string(),
                            year: LATEST_YEAR.to_string(),
                            value: d.latest.value,
                        }
                    }
                }

                if let Some(d) = drill() {
                    div {
                        class: "charts-row",
                        ChartContainer {
                            id: "container4".to_string(),
                            PieChart { country: d.country.clone(), totals: d.age_types.clone() }
                        }
                        ChartContainer {
                            id: "container5".to_string(),
                            BarChart { values: d.cancer.clone() }
                        }
                        ChartContainer {
                            id: "container6".to_string(),
                            DumbbellChart { comparisons: d.top_indicators.clone() }
                        }
                    }
                }
            }
        }
    }
}
