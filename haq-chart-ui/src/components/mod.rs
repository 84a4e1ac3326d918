//! Dioxus RSX components for the HAQ dashboard.

mod axis;
mod bar_chart;
mod chart_container;
mod dumbbell_chart;
mod error_display;
mod gauge;
mod loading_spinner;
mod pie_chart;
mod tooltip;
mod world_map;
mod year_selector;

pub use axis::{AxisBottom, AxisLeft};
pub use bar_chart::BarChart;
pub use chart_container::ChartContainer;
pub use dumbbell_chart::DumbbellChart;
pub use error_display::ErrorDisplay;
pub use gauge::Gauge;
pub use loading_spinner::LoadingSpinner;
pub use pie_chart::PieChart;
pub use tooltip::{Tooltip, TooltipState};
pub use world_map::WorldMap;
pub use year_selector::{YearSelector, YEAR_SELECT_ID};
