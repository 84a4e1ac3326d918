//! Load preparation and selection actions.
//!
//! Loading turns the two fetched files into everything the dashboard needs
//! before any signal is touched, so a bad file never leaves a half-built
//! dashboard. After that, the only writes to the selection are
//! [`AppState::select_country`] and [`AppState::select_year`]; components
//! derive their drawings from the selection through memos.

use crate::state::AppState;
use dioxus::prelude::*;
use haq_chart::path::{MAP_HEIGHT, MAP_WIDTH};
use haq_chart::{project_features, ProjectedFeature, SequentialScale, NEUTRAL_FILL};
use haq_core::geo::parse_features;
use haq_db::models::DrillDown;
use haq_db::Database;
use std::rc::Rc;

/// Everything derived from the two data files at startup.
pub struct LoadedData {
    pub db: Database,
    pub shapes: Vec<ProjectedFeature>,
    pub years: Vec<String>,
    pub color_scale: Option<SequentialScale>,
}

/// Parse both files, load the database and project the map.
pub fn prepare(csv_data: &str, geojson: &str) -> anyhow::Result<LoadedData> {
    let db = Database::new()?;
    db.load_indicators(csv_data)?;

    let features = parse_features(geojson)?;
    let shapes = project_features(MAP_WIDTH, MAP_HEIGHT, &features);

    let years = db.query_year_index()?;
    let color_scale = db
        .query_value_extent()?
        .map(|extent| SequentialScale::new(extent.min, extent.max));

    Ok(LoadedData {
        db,
        shapes,
        years,
        color_scale,
    })
}

/// Fill color for every shape, in shape order, for one year.
pub fn region_fills(
    db: &Database,
    year: &str,
    scale: Option<&SequentialScale>,
    shapes: &[ProjectedFeature],
) -> anyhow::Result<Vec<String>> {
    let lookup = db.query_haq_lookup(year)?;
    Ok(shapes
        .iter()
        .map(|shape| match scale {
            Some(scale) => scale.fill(lookup.get(&shape.name).copied()),
            None => NEUTRAL_FILL.to_string(),
        })
        .collect())
}

/// Drill-down for a country, or `None` (logged) when the query fails.
pub fn drill_down(db: &Database, country: &str) -> Option<DrillDown> {
    match db.query_drill_down(country) {
        Ok(drill) => Some(drill),
        Err(e) => {
            log::error!("Failed to query drill-down for {}: {}", country, e);
            None
        }
    }
}

/// Drill-down for the selected country. Reads the database and the country
/// signal only, so a year change never recomputes it.
pub fn use_drill_down(state: AppState) -> Memo<Option<DrillDown>> {
    use_memo(move || {
        let country = (state.selected_country)();
        state
            .db
            .read()
            .as_ref()
            .and_then(|db| drill_down(db, &country))
    })
}

impl AppState {
    /// Publish loaded data and select the earliest year.
    pub fn install(&mut self, data: LoadedData) {
        let initial_year = data.years.first().cloned().unwrap_or_default();
        log::info!(
            "controller: {} shapes, {} years, initial year '{}'",
            data.shapes.len(),
            data.years.len(),
            initial_year
        );
        self.shapes.set(Rc::new(data.shapes));
        self.years.set(data.years);
        self.selected_year.set(initial_year);
        self.color_scale.set(data.color_scale);
        self.db.set(Some(data.db));
        self.loading.set(false);
    }

    /// Replace the dashboard with an error.
    pub fn fail(&mut self, message: String) {
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }

    /// A map click: gauges and drill-down charts follow this country.
    pub fn select_country(&mut self, name: &str) {
        log::info!("controller: selected country '{}'", name);
        self.selected_country.set(name.to_string());
    }

    /// A year change: only the map recolors.
    pub fn select_year(&mut self, year: String) {
        log::info!("controller: selected year '{}'", year);
        self.selected_year.set(year);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haq_chart::color::interpolate_viridis;
    use std::cell::Cell;

    const CSV: &str = "\
location_name,year_id,indicator_name,val,haq_index_age_type
India,1990,HAQ Index,20,
India,2019,HAQ Index,40,
Chad,2019,HAQ Index,60,
Chad,2019,Stroke,80,
Lower Elbonia,2019,HAQ Index,50,
";

    const GEOJSON: &str = r#"{"type":"FeatureCollection","features":[
      {"type":"Feature","properties":{"NAME":"India"},
       "geometry":{"type":"Polygon","coordinates":[[[68,8],[97,8],[97,35],[68,35],[68,8]]]}},
      {"type":"Feature","properties":{"NAME":"Chad"},
       "geometry":{"type":"Polygon","coordinates":[[[14,8],[24,8],[24,23],[14,8]]]}},
      {"type":"Feature","properties":{"NAME":"Peru"},
       "geometry":{"type":"Polygon","coordinates":[[[-81,-18],[-69,-18],[-69,0],[-81,-18]]]}}
    ]}"#;

    #[test]
    fn prepare_loads_everything() {
        let data = prepare(CSV, GEOJSON).unwrap();
        assert_eq!(data.years, vec!["1990", "2019"]);
        assert_eq!(data.shapes.len(), 3);
        assert_eq!(data.color_scale, Some(SequentialScale::new(20.0, 80.0)));
        assert_eq!(data.db.query_record_count().unwrap(), 5);
    }

    #[test]
    fn prepare_rejects_bad_boundary_file() {
        assert!(prepare(CSV, r#"{"type":"Point","coordinates":[0,0]}"#).is_err());
        assert!(prepare(CSV, "not json").is_err());
    }

    #[test]
    fn prepare_rejects_bad_dataset() {
        assert!(prepare("location_name,val\nIndia,1\n", GEOJSON).is_err());
    }

    #[test]
    fn fills_match_lookup_for_every_year() {
        let data = prepare(CSV, GEOJSON).unwrap();
        let scale = data.color_scale.unwrap();
        for year in &data.years {
            let lookup = data.db.query_haq_lookup(year).unwrap();
            let fills = region_fills(&data.db, year, Some(&scale), &data.shapes).unwrap();
            for (shape, fill) in data.shapes.iter().zip(&fills) {
                match lookup.get(&shape.name) {
                    Some(v) => assert_eq!(fill, &scale.color(*v)),
                    None => assert_eq!(fill, NEUTRAL_FILL, "{} in {}", shape.name, year),
                }
            }
        }
    }

    #[test]
    fn fills_for_latest_year() {
        let data = prepare(CSV, GEOJSON).unwrap();
        let scale = data.color_scale.unwrap();
        let fills = region_fills(&data.db, "2019", Some(&scale), &data.shapes).unwrap();
        // India 40 on [20, 80] is a third of the way
        assert_eq!(fills[0], interpolate_viridis(1.0 / 3.0));
        assert_eq!(fills[1], interpolate_viridis(2.0 / 3.0));
        assert_eq!(fills[2], NEUTRAL_FILL);
    }

    #[test]
    fn fills_without_scale_are_neutral() {
        let data = prepare(CSV, GEOJSON).unwrap();
        let fills = region_fills(&data.db, "2019", None, &data.shapes).unwrap();
        assert!(fills.iter().all(|f| f == NEUTRAL_FILL));
    }

    thread_local! {
        static HANDLES: Cell<Option<(AppState, Memo<Option<DrillDown>>)>> = const { Cell::new(None) };
    }

    fn selection_harness() -> Element {
        let state = use_context_provider(AppState::new);
        let drill = use_drill_down(state);
        HANDLES.with(|h| h.set(Some((state, drill))));
        rsx! { div {} }
    }

    #[test]
    fn drill_down_follows_country_not_year() {
        let mut dom = VirtualDom::new(selection_harness);
        dom.rebuild_in_place();
        let (mut state, drill) = HANDLES.with(|h| h.get()).unwrap();

        dom.in_runtime(|| {
            assert_eq!(drill(), None);
            state.install(prepare(CSV, GEOJSON).unwrap());
            let india = drill();
            assert_eq!(india.as_ref().map(|d| d.country.as_str()), Some("India"));
            assert_eq!(*state.selected_year.read(), "1990");

            state.select_year("2019".to_string());
            assert_eq!(drill(), india);

            state.select_country("Chad");
            let chad = drill().unwrap();
            assert_eq!(chad.country, "Chad");
            assert_eq!(chad.latest.value, 60.0);
            assert_eq!(*state.selected_year.read(), "2019");
        });
    }

    #[test]
    fn drill_down_for_selected_country() {
        let data = prepare(CSV, GEOJSON).unwrap();
        let drill = drill_down(&data.db, "India").unwrap();
        assert_eq!(drill.baseline.value, 20.0);
        assert_eq!(drill.latest.value, 40.0);
        assert!(drill.top_indicators.is_empty());
    }
}
