//! Color scales and fixed palettes.

use haq_core::AgeType;

/// Fill for map regions without a matching HAQ Index value.
pub const NEUTRAL_FILL: &str = "#ccc";

/// Viridis sampled at ten evenly spaced stops.
const VIRIDIS: [(u8, u8, u8); 10] = [
    (0x44, 0x01, 0x54),
    (0x48, 0x28, 0x78),
    (0x3e, 0x4a, 0x89),
    (0x31, 0x68, 0x8e),
    (0x26, 0x82, 0x8e),
    (0x1f, 0x9e, 0x89),
    (0x35, 0xb7, 0x79),
    (0x6d, 0xcd, 0x59),
    (0xb4, 0xde, 0x2c),
    (0xfd, 0xe7, 0x25),
];

/// Viridis color for `t` in `[0, 1]`; out-of-range input is clamped.
pub fn interpolate_viridis(t: f64) -> String {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let last = VIRIDIS.len() - 1;
    let scaled = t * last as f64;
    let i = (scaled.floor() as usize).min(last - 1);
    let frac = scaled - i as f64;

    let (r0, g0, b0) = VIRIDIS[i];
    let (r1, g1, b1) = VIRIDIS[i + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    format!("#{:02x}{:02x}{:02x}", lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Sequential viridis scale over a fixed numeric domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialScale {
    min: f64,
    max: f64,
}

impl SequentialScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn domain(&self) -> [f64; 2] {
        [self.min, self.max]
    }

    /// A zero-width domain maps every value to the middle color.
    pub fn color(&self, value: f64) -> String {
        let t = if self.max == self.min {
            0.5
        } else {
            (value - self.min) / (self.max - self.min)
        };
        interpolate_viridis(t)
    }

    /// Map fill for a looked-up value, neutral when there is none.
    pub fn fill(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => self.color(v),
            None => NEUTRAL_FILL.to_string(),
        }
    }
}

/// Gauge arc color band for an HAQ Index value.
///
/// The bands are checked from the top down, so every value (including
/// negatives and NaN) lands in one of these four; there is no fifth color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeColor {
    Red,
    Orange,
    Yellow,
    Green,
}

impl GaugeColor {
    pub fn for_value(value: f64) -> Self {
        if value >= 80.0 {
            GaugeColor::Red
        } else if value >= 60.0 {
            GaugeColor::Orange
        } else if value >= 30.0 {
            GaugeColor::Yellow
        } else {
            GaugeColor::Green
        }
    }

    /// CSS color keyword.
    pub fn css(self) -> &'static str {
        match self {
            GaugeColor::Red => "red",
            GaugeColor::Orange => "orange",
            GaugeColor::Yellow => "yellow",
            GaugeColor::Green => "green",
        }
    }
}

/// Pie slice and legend color for a life stage.
pub fn age_type_color(age_type: AgeType) -> &'static str {
    match age_type {
        AgeType::Young => "#477bcb",
        AgeType::Working => "#6c95d5",
        AgeType::Postworking => "#91b0e0",
    }
}

/// Bar fill gradient stops, top to bottom.
pub const BAR_GRADIENT: (&str, &str) = ("#a7c0e6", "#000000");

/// Dumbbell endpoint colors for the baseline and latest years.
pub const DUMBBELL_BASELINE: &str = "#377eb8";
pub const DUMBBELL_LATEST: &str = "#4daf4a";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viridis_endpoints() {
        assert_eq!(interpolate_viridis(0.0), "#440154");
        assert_eq!(interpolate_viridis(1.0), "#fde725");
        assert_eq!(interpolate_viridis(-3.0), "#440154");
        assert_eq!(interpolate_viridis(7.0), "#fde725");
    }

    #[test]
    fn viridis_hits_interior_stops() {
        assert_eq!(interpolate_viridis(5.0 / 9.0), "#1f9e89");
    }

    #[test]
    fn viridis_interpolates_between_stops() {
        // a quarter of the way from #440154 to #482878
        assert_eq!(interpolate_viridis(0.25 / 9.0), "#450b5d");
    }

    #[test]
    fn sequential_scale_spans_domain() {
        let s = SequentialScale::new(10.0, 90.0);
        assert_eq!(s.color(10.0), "#440154");
        assert_eq!(s.color(90.0), "#fde725");
        assert_eq!(s.fill(None), NEUTRAL_FILL);
        assert_eq!(s.fill(Some(0.0)), "#440154", "zero is a value, not a miss");
    }

    #[test]
    fn degenerate_domain_uses_midpoint() {
        let s = SequentialScale::new(42.0, 42.0);
        assert_eq!(s.color(42.0), interpolate_viridis(0.5));
    }

    #[test]
    fn gauge_color_thresholds() {
        let cases = [
            (80.0, GaugeColor::Red),
            (100.0, GaugeColor::Red),
            (79.9, GaugeColor::Orange),
            (60.0, GaugeColor::Orange),
            (59.9, GaugeColor::Yellow),
            (30.0, GaugeColor::Yellow),
            (29.9, GaugeColor::Green),
            (0.0, GaugeColor::Green),
            (-5.0, GaugeColor::Green),
        ];
        for (value, expected) in cases {
            assert_eq!(GaugeColor::for_value(value), expected, "value {}", value);
        }
        assert_eq!(GaugeColor::Orange.css(), "orange");
    }

    #[test]
    fn age_type_palette() {
        assert_eq!(age_type_color(AgeType::Young), "#477bcb");
        assert_eq!(age_type_color(AgeType::Postworking), "#91b0e0");
    }
}
