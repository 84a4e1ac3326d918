//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Selection signals are only written through the actions in
//! [`controller`](crate::controller).

use haq_chart::{ProjectedFeature, SequentialScale};
use haq_core::indicator::DEFAULT_COUNTRY;
use haq_db::Database;
use dioxus::prelude::*;
use std::rc::Rc;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Projected country outlines, in boundary file order
    pub shapes: Signal<Rc<Vec<ProjectedFeature>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Distinct years for the year selector, sorted
    pub years: Signal<Vec<String>>,
    /// Year the map is colored for
    pub selected_year: Signal<String>,
    /// Country the gauges and drill-down charts show
    pub selected_country: Signal<String>,
    /// Map color scale over the global value extent
    pub color_scale: Signal<Option<SequentialScale>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            shapes: Signal::new(Rc::new(Vec::new())),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            years: Signal::new(Vec::new()),
            selected_year: Signal::new(String::new()),
            selected_country: Signal::new(DEFAULT_COUNTRY.to_string()),
            color_scale: Signal::new(None),
        }
    }
}
