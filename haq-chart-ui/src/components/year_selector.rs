//! Dropdown selector for the map year.

use crate::state::AppState;
use dioxus::prelude::*;

/// DOM id of the year dropdown.
pub const YEAR_SELECT_ID: &str = "year-select";

/// Year dropdown. Lists the sorted distinct years and recolors the map on
/// change; the drill-down charts are not affected.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let years = state.years.read().clone();
    let selected = (state.selected_year)();

    let on_change = move |evt: Event<FormData>| {
        state.select_year(evt.value());
    };

    rsx! {
        select {
            id: YEAR_SELECT_ID,
            onchange: on_change,
            for year in years.iter() {
                option {
                    value: "{year}",
                    selected: *year == selected,
                    "{year}"
                }
            }
        }
    }
}
