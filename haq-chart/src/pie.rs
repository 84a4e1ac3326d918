//! Pie layout and the life-stage pie chart.
//!
//! Angles are in radians, measured clockwise from 12 o'clock. Slices are
//! placed in descending value order while the output keeps input order, so
//! a slice's index always refers back to its datum.

use crate::color::age_type_color;
use haq_core::AgeType;
use std::f64::consts::{PI, TAU};

pub const WIDTH: f64 = 250.0;
pub const HEIGHT: f64 = 430.0;
pub const RADIUS: f64 = 125.0;
/// Translation of the pie's centre inside the SVG.
pub const CENTER: (f64, f64) = (125.0, 225.0);
pub const TITLE: &str = "HAQ BY LIFE STAGES";
pub const TITLE_Y: f64 = -180.0;
/// Legend group offset relative to the pie centre.
pub const LEGEND_OFFSET: (f64, f64) = (-125.0, 155.0);
pub const LEGEND_SPACING: f64 = 80.0;

const EPSILON: f64 = 1e-12;

/// One laid-out slice, in input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Assign angles to `values`, largest first.
///
/// Negative values are kept but get zero width. When nothing is positive
/// every slice has zero width.
pub fn pie_layout(values: &[f64]) -> Vec<PieSlice> {
    let sum: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let k = if sum > 0.0 { TAU / sum } else { 0.0 };

    let mut order: Vec<usize> = (0..values.len()).collect();
    // Vec::sort_by is stable, so equal values keep input order
    order.sort_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut slices = vec![
        PieSlice {
            index: 0,
            value: 0.0,
            start_angle: 0.0,
            end_angle: 0.0,
        };
        values.len()
    ];
    let mut angle = 0.0;
    for i in order {
        let v = values[i];
        let width = if v > 0.0 { v * k } else { 0.0 };
        slices[i] = PieSlice {
            index: i,
            value: v,
            start_angle: angle,
            end_angle: angle + width,
        };
        angle += width;
    }
    slices
}

fn point(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// SVG path for a solid slice centred on the origin.
pub fn arc_path(radius: f64, start_angle: f64, end_angle: f64) -> String {
    let sweep = end_angle - start_angle;
    if radius <= EPSILON || sweep.abs() <= EPSILON {
        return "M0,0Z".to_string();
    }
    if sweep >= TAU - EPSILON {
        let (x0, y0) = point(radius, start_angle);
        let (x1, y1) = point(radius, start_angle + PI);
        return format!(
            "M{},{}A{r},{r},0,1,1,{},{}A{r},{r},0,1,1,{},{}Z",
            x0,
            y0,
            x1,
            y1,
            x0,
            y0,
            r = radius
        );
    }
    let (x0, y0) = point(radius, start_angle);
    let (x1, y1) = point(radius, end_angle);
    let large_arc = if sweep > PI { 1 } else { 0 };
    format!(
        "M{},{}A{r},{r},0,{},1,{},{}L0,0Z",
        x0,
        y0,
        large_arc,
        x1,
        y1,
        r = radius
    )
}

/// One drawable slice of the life-stage pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSliceView {
    pub age_type: AgeType,
    pub value: f64,
    pub path: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: &'static str,
    pub color: &'static str,
    /// Horizontal offset inside the legend group.
    pub x: f64,
}

/// The life-stage pie for one country.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartView {
    pub slices: Vec<PieSliceView>,
    pub legend: Vec<LegendItem>,
}

impl PieChartView {
    pub fn new(totals: &[(AgeType, f64)]) -> Self {
        let values: Vec<f64> = totals.iter().map(|(_, v)| *v).collect();
        let slices = pie_layout(&values)
            .into_iter()
            .map(|slice| {
                let age_type = totals[slice.index].0;
                PieSliceView {
                    age_type,
                    value: slice.value,
                    path: arc_path(RADIUS, slice.start_angle, slice.end_angle),
                    color: age_type_color(age_type),
                }
            })
            .collect();

        let legend = totals
            .iter()
            .enumerate()
            .map(|(i, (age_type, _))| LegendItem {
                label: age_type.label(),
                color: age_type_color(*age_type),
                x: i as f64 * LEGEND_SPACING,
            })
            .collect();

        Self { slices, legend }
    }

    /// Tooltip lines for a hovered slice.
    pub fn tooltip_lines(slice: &PieSliceView, country: &str) -> [String; 3] {
        [
            format!("Age Type: {}", slice.age_type.label()),
            format!("Country: {}", country),
            format!("HAQ Index: {:.2}", slice.value),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn layout_orders_by_descending_value() {
        let slices = pie_layout(&[1.0, 3.0, 2.0]);
        assert_eq!(slices.len(), 3);
        // 3.0 first, then 2.0, then 1.0
        assert!(approx(slices[1].start_angle, 0.0));
        assert!(approx(slices[1].end_angle, TAU / 2.0));
        assert!(approx(slices[2].start_angle, TAU / 2.0));
        assert!(approx(slices[0].end_angle, TAU));
        assert_eq!(slices[0].index, 0);
    }

    #[test]
    fn layout_ties_keep_input_order() {
        let slices = pie_layout(&[2.0, 2.0]);
        assert!(approx(slices[0].start_angle, 0.0));
        assert!(approx(slices[1].start_angle, PI));
    }

    #[test]
    fn layout_with_zero_sum() {
        let slices = pie_layout(&[0.0, 0.0, 0.0]);
        assert!(slices.iter().all(|s| s.start_angle == s.end_angle));
    }

    #[test]
    fn negative_values_take_no_space() {
        let slices = pie_layout(&[-1.0, 1.0]);
        assert!(approx(slices[1].end_angle - slices[1].start_angle, TAU));
        assert_eq!(slices[0].start_angle, slices[0].end_angle);
        assert_eq!(slices[0].value, -1.0);
    }

    #[test]
    fn quarter_slice_path() {
        assert_eq!(
            arc_path(100.0, 0.0, PI / 2.0),
            format!("M0,-100A100,100,0,0,1,100,{}L0,0Z", -100.0 * (PI / 2.0).cos())
        );
    }

    #[test]
    fn large_slice_uses_large_arc() {
        let path = arc_path(10.0, 0.0, 1.5 * PI);
        assert!(path.contains(",0,1,1,"), "{}", path);
    }

    #[test]
    fn full_and_empty_slices() {
        let full = arc_path(10.0, 0.0, TAU);
        assert_eq!(full.matches('A').count(), 2);
        assert!(full.ends_with('Z'));
        assert_eq!(arc_path(10.0, 1.0, 1.0), "M0,0Z");
    }

    #[test]
    fn chart_view_colors_and_legend() {
        let view = PieChartView::new(&[
            (AgeType::Young, 44.0),
            (AgeType::Working, 38.5),
            (AgeType::Postworking, 21.3),
        ]);
        assert_eq!(view.slices.len(), 3);
        assert_eq!(view.slices[1].color, "#6c95d5");
        let xs: Vec<f64> = view.legend.iter().map(|l| l.x).collect();
        assert_eq!(xs, vec![0.0, 80.0, 160.0]);
        assert_eq!(view.legend[2].label, "Postworking");
    }

    #[test]
    fn tooltip_formats_two_decimals() {
        let view = PieChartView::new(&[(AgeType::Young, 44.0)]);
        let lines = PieChartView::tooltip_lines(&view.slices[0], "India");
        assert_eq!(lines[0], "Age Type: Young");
        assert_eq!(lines[1], "Country: India");
        assert_eq!(lines[2], "HAQ Index: 44.00");
    }
}
