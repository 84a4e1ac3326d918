//! Chart geometry for the HAQ dashboard.
//!
//! Everything here is plain data in, SVG attribute strings and numbers out.
//! There is no DOM dependency, so every layout is unit tested natively and
//! the Dioxus components in `haq-chart-ui` only have to place the results.
//!
//! - `scale`: linear and band scales, d3-compatible ticks and tick labels
//! - `color`: viridis sequential scale, gauge bands, fixed palettes
//! - `gauge`, `pie`, `bar`, `dumbbell`: per-chart layouts
//! - `projection`, `path`: Natural Earth projection and boundary paths
//! - `zoom`: pan/zoom transform for the map

pub mod bar;
pub mod color;
pub mod dumbbell;
pub mod gauge;
pub mod path;
pub mod pie;
pub mod projection;
pub mod scale;
pub mod zoom;

pub use color::{GaugeColor, SequentialScale, NEUTRAL_FILL};
pub use path::{project_features, ProjectedFeature};
pub use scale::{AxisTick, BandScale, LinearScale};
pub use zoom::ZoomTransform;
