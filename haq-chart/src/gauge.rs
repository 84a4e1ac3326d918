//! Semicircular gauge geometry.
//!
//! The gauge lives in a `0 0 100 100` viewBox: an arc of radius 45 around
//! (50, 50) sweeps counter-clockwise from 12 o'clock, and a needle drawn
//! pointing right is rotated into place.

use crate::color::GaugeColor;

pub const VIEW_BOX: &str = "0 0 100 100";
pub const CENTER: f64 = 50.0;
pub const RADIUS: f64 = 45.0;
/// Needle tip before rotation.
pub const NEEDLE_TIP: (f64, f64) = (88.0, 50.0);

/// Point on a circle for an angle in degrees measured clockwise from 12
/// o'clock.
pub fn polar_to_cartesian(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = (angle_deg - 90.0) * std::f64::consts::PI / 180.0;
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// SVG path for the arc between two angles (degrees).
///
/// The path starts at `end_angle` and sweeps counter-clockwise back to
/// `start_angle`.
pub fn describe_arc(x: f64, y: f64, r: f64, start_angle: f64, end_angle: f64) -> String {
    let (sx, sy) = polar_to_cartesian(x, y, r, end_angle);
    let (ex, ey) = polar_to_cartesian(x, y, r, start_angle);
    let large_arc = if end_angle - start_angle <= 180.0 { 0 } else { 1 };
    format!("M {} {} A {} {} 0 {} 0 {} {}", sx, sy, r, r, large_arc, ex, ey)
}

/// Everything a gauge draws for one value.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    pub value: f64,
    pub arc_path: String,
    pub color: GaugeColor,
    /// Rotation in degrees about the centre.
    pub needle_rotation: f64,
    pub label: String,
}

impl GaugeView {
    /// Lay out a gauge. Values outside `[0, 100]` are not clamped.
    pub fn new(value: f64) -> Self {
        let angle = (value / 100.0) * 180.0;
        Self {
            value,
            arc_path: describe_arc(CENTER, CENTER, RADIUS, 0.0, angle),
            color: GaugeColor::for_value(value),
            needle_rotation: angle - 90.0,
            label: format!("{:.1}", value),
        }
    }

    /// SVG `transform` attribute for the needle.
    pub fn needle_transform(&self) -> String {
        format!("rotate({} {} {})", self.needle_rotation, CENTER, CENTER)
    }
}
