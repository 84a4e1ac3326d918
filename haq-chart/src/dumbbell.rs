//! Two-year comparison (dumbbell) chart layout.

use crate::bar::Margin;
use crate::scale::{AxisTick, BandScale, LinearScale, DEFAULT_TICK_COUNT};

pub const WIDTH: f64 = 360.0;
pub const HEIGHT: f64 = 440.0;
pub const MARGIN: Margin = Margin {
    top: 70.0,
    right: 30.0,
    bottom: 20.0,
    left: 70.0,
};
/// Fixed plot area, smaller than the SVG less margins to leave room for
/// rotated labels.
pub const PLOT_WIDTH: f64 = 260.0;
pub const PLOT_HEIGHT: f64 = 270.0;
pub const TITLE: &str = "DISEASE IMPACT EVOLUTION";
pub const PLACEHOLDER: &str = "No data available";
pub const DOT_RADIUS: f64 = 8.0;
pub const LINE_WIDTH: f64 = 4.0;
const BAND_PADDING: f64 = 0.4;

/// One indicator drawn as a vertical segment between its two years.
#[derive(Debug, Clone, PartialEq)]
pub struct DumbbellRow {
    pub label: String,
    pub start_value: f64,
    pub end_value: f64,
    /// Band centre on the x axis.
    pub cx: f64,
    pub start_y: f64,
    pub end_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DumbbellView {
    pub rows: Vec<DumbbellRow>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

impl DumbbellView {
    /// Lay out `(label, start, end)` triples; `None` when there is nothing to
    /// draw and the placeholder should be shown instead.
    pub fn new(data: &[(&str, f64, f64)]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        let labels: Vec<&str> = data.iter().map(|(label, _, _)| *label).collect();
        let x = BandScale::new(&labels, [0.0, PLOT_WIDTH], BAND_PADDING);
        let max = data
            .iter()
            .map(|(_, start, end)| start.max(*end))
            .fold(0.0_f64, f64::max);
        let y = LinearScale::new([0.0, max], [PLOT_HEIGHT, 0.0]).nice(DEFAULT_TICK_COUNT);

        let rows = data
            .iter()
            .filter_map(|(label, start, end)| {
                Some(DumbbellRow {
                    label: label.to_string(),
                    start_value: *start,
                    end_value: *end,
                    cx: x.center(label)?,
                    start_y: y.scale(*start),
                    end_y: y.scale(*end),
                })
            })
            .collect();

        Some(Self {
            rows,
            x_ticks: x.axis_ticks(),
            y_ticks: y.axis_ticks(DEFAULT_TICK_COUNT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_data_is_placeholder() {
        assert!(DumbbellView::new(&[]).is_none());
    }

    #[test]
    fn y_axis_is_niced_over_both_years() {
        let view = DumbbellView::new(&[
            ("Tuberculosis", 90.0, 70.0),
            ("Diarrheal diseases", 80.0, 97.3),
        ])
        .unwrap();
        assert_eq!(view.y_ticks.last().map(|t| t.label.as_str()), Some("100"));
        assert_eq!(view.y_ticks.last().map(|t| t.position), Some(0.0));

        let tb = &view.rows[0];
        assert!((tb.start_y - PLOT_HEIGHT * 0.1).abs() < 1e-9);
        assert!((tb.end_y - PLOT_HEIGHT * 0.3).abs() < 1e-9);
    }

    #[test]
    fn rows_sit_on_band_centres() {
        let view = DumbbellView::new(&[("A", 1.0, 2.0), ("B", 3.0, 4.0)]).unwrap();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].cx, view.x_ticks[0].position);
        assert!(view.rows[0].cx < view.rows[1].cx);
    }

    #[test]
    fn all_zero_values_still_draw() {
        let view = DumbbellView::new(&[("A", 0.0, 0.0)]).unwrap();
        assert_eq!(view.rows[0].start_y, PLOT_HEIGHT / 2.0);
    }
}
