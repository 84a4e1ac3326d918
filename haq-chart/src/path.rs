//! SVG path strings for projected boundary features.

use crate::projection::NaturalEarth;
use haq_core::GeoFeature;
use std::fmt::Write;

/// Map viewport in SVG units.
pub const MAP_WIDTH: f64 = 960.0;
pub const MAP_HEIGHT: f64 = 500.0;

/// A boundary feature ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedFeature {
    pub name: String,
    /// SVG `d` attribute; empty for features without polygon geometry.
    pub path: String,
}

/// Round to three decimals; `Display` then drops trailing zeros.
fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Path data for every ring of a feature, one closed subpath per ring.
pub fn feature_path(projection: &NaturalEarth, feature: &GeoFeature) -> String {
    let mut d = String::new();
    for ring in feature.rings() {
        for (i, &point) in ring.iter().enumerate() {
            let [x, y] = projection.project(point);
            let cmd = if i == 0 { 'M' } else { 'L' };
            // writing to a String cannot fail
            let _ = write!(d, "{}{},{}", cmd, round3(x), round3(y));
        }
        if !ring.is_empty() {
            d.push('Z');
        }
    }
    d
}

/// Fit a projection to the viewport and project every feature, in order.
pub fn project_features(width: f64, height: f64, features: &[GeoFeature]) -> Vec<ProjectedFeature> {
    let projection = NaturalEarth::fit_size(width, height, features);
    let projected: Vec<ProjectedFeature> = features
        .iter()
        .map(|feature| ProjectedFeature {
            name: feature.name.clone(),
            path: feature_path(&projection, feature),
        })
        .collect();
    log::info!(
        "path: projected {} features at scale {:.1}",
        projected.len(),
        projection.scale
    );
    projected
}
