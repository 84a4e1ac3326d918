//! Cancer statistics bar chart layout.

use crate::scale::{AxisTick, BandScale, LinearScale, DEFAULT_TICK_COUNT};

pub const WIDTH: f64 = 420.0;
pub const HEIGHT: f64 = 450.0;
pub const MARGIN: Margin = Margin {
    top: 110.0,
    right: 30.0,
    bottom: 120.0,
    left: 80.0,
};
pub const PLOT_WIDTH: f64 = WIDTH - MARGIN.left - MARGIN.right;
pub const PLOT_HEIGHT: f64 = HEIGHT - MARGIN.top - MARGIN.bottom;
pub const TITLE: &str = "CANCER STATISTICS";
pub const GRADIENT_ID: &str = "barGradient";
const BAND_PADDING: f64 = 0.2;

/// Outer margins around a chart's plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    /// `transform` placing the plot group inside the margins.
    pub fn translate(&self) -> String {
        format!("translate({},{})", self.left, self.top)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bars plus both axes, in plot-area coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartView {
    pub bars: Vec<Bar>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

impl BarChartView {
    /// Lay out `(label, value)` pairs left to right.
    ///
    /// The value axis runs from 0 to the largest value, without rounding the
    /// top; with no data it collapses to `[0, 0]`.
    pub fn new(data: &[(&str, f64)]) -> Self {
        let labels: Vec<&str> = data.iter().map(|(label, _)| *label).collect();
        let x = BandScale::new(&labels, [0.0, PLOT_WIDTH], BAND_PADDING);
        let max = data.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        let y = LinearScale::new([0.0, max], [PLOT_HEIGHT, 0.0]);

        let bars = data
            .iter()
            .filter_map(|(label, value)| {
                let bx = x.band(label)?;
                let by = y.scale(*value);
                Some(Bar {
                    label: label.to_string(),
                    value: *value,
                    x: bx,
                    y: by,
                    width: x.bandwidth(),
                    height: (PLOT_HEIGHT - by).max(0.0),
                })
            })
            .collect();

        Self {
            bars,
            x_ticks: x.axis_ticks(),
            y_ticks: y.axis_ticks(DEFAULT_TICK_COUNT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_dimensions() {
        assert_eq!(PLOT_WIDTH, 310.0);
        assert_eq!(PLOT_HEIGHT, 220.0);
        assert_eq!(MARGIN.translate(), "translate(80,110)");
    }

    #[test]
    fn tallest_bar_fills_plot() {
        let view = BarChartView::new(&[("Breast", 12.0), ("Cervical", 9.5), ("Uterine", 6.0)]);
        assert_eq!(view.bars.len(), 3);
        assert_eq!(view.bars[0].y, 0.0);
        assert_eq!(view.bars[0].height, PLOT_HEIGHT);
        assert!((view.bars[2].height - PLOT_HEIGHT * 0.5).abs() < 1e-9);
        assert!(view.bars[0].x < view.bars[1].x);
    }

    #[test]
    fn axes_follow_data() {
        let view = BarChartView::new(&[("Breast", 12.0), ("Cervical", 9.5)]);
        let labels: Vec<&str> = view.x_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Breast", "Cervical"]);
        assert_eq!(view.y_ticks.first().map(|t| t.label.as_str()), Some("0"));
        assert_eq!(view.y_ticks.last().map(|t| t.label.as_str()), Some("12"));
    }

    #[test]
    fn empty_chart_has_no_bars() {
        let view = BarChartView::new(&[]);
        assert!(view.bars.is_empty());
        assert!(view.x_ticks.is_empty());
    }
}
