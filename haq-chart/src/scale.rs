//! Linear and band scales with d3-compatible tick generation.
//!
//! Charts drawn by the dashboard share one layout vocabulary: a continuous
//! value axis ([`LinearScale`]) and a categorical axis ([`BandScale`]). Tick
//! values and labels follow d3's `ticks`/`nice`/`tickFormat` rules so the
//! axes read the same as the reference charts.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Default number of ticks requested by an axis.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// One labelled tick on an axis, positioned in range (pixel) space.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// JavaScript `Math.round`: halves round towards positive infinity.
fn js_round(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Integer tick bounds and increment for `[start, stop]`.
///
/// A negative increment encodes a fractional step as `1 / -inc`, which keeps
/// tick values exact for steps like 0.1.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let pos_inc = 10f64.powf(-power) / factor;
        i1 = js_round(start * pos_inc);
        i2 = js_round(stop * pos_inc);
        if i1 / pos_inc < start {
            i1 += 1.0;
        }
        if i2 / pos_inc > stop {
            i2 -= 1.0;
        }
        inc = -pos_inc;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = js_round(start / inc);
        i2 = js_round(stop / inc);
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Evenly spaced, human-friendly values covering `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    (0..n)
        .map(|i| {
            let i = i as f64;
            let idx = if reverse { i2 - i } else { i1 + i };
            if inc < 0.0 {
                idx / -inc
            } else {
                idx * inc
            }
        })
        .collect()
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// The distance between adjacent [`ticks`] for the same arguments.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let inc = if reverse {
        tick_increment(stop, start, count)
    } else {
        tick_increment(start, stop, count)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse {
        -step
    } else {
        step
    }
}

/// Decimal places needed to tell ticks `step` apart.
pub fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// Format like d3's `,.Nf`: fixed decimals, comma thousands separators and
/// a typographic minus (U+2212) for negative values.
pub fn format_fixed_grouped(value: f64, precision: usize) -> String {
    let digits = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    // -0.00 prints without a sign
    let is_zero = digits.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        format!("\u{2212}{}", grouped)
    } else {
        grouped
    }
}

/// Maps a continuous domain onto a continuous range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Map a domain value into the range.
    ///
    /// A zero-width domain maps every value to the middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }

    /// Extend the domain outward to round tick values.
    pub fn nice(mut self, count: usize) -> Self {
        let [mut d0, mut d1] = self.domain;
        let reversed = d1 < d0;
        if reversed {
            std::mem::swap(&mut d0, &mut d1);
        }

        let (mut start, mut stop) = (d0, d1);
        let mut prestep: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if !step.is_finite() {
                break;
            }
            if prestep == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }

        if start.is_finite() && stop.is_finite() {
            self.domain = if reversed { [stop, start] } else { [start, stop] };
        }
        self
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain[0], self.domain[1], count)
    }

    /// Ticks with labels, positioned in range space.
    pub fn axis_ticks(&self, count: usize) -> Vec<AxisTick> {
        let precision = precision_fixed(tick_step(self.domain[0], self.domain[1], count));
        self.ticks(count)
            .into_iter()
            .map(|value| AxisTick {
                position: self.scale(value),
                label: format_fixed_grouped(value, precision),
            })
            .collect()
    }
}

/// Divides a continuous range into uniform bands, one per category.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Build a band scale with equal inner and outer padding.
    ///
    /// Repeated labels collapse onto the first occurrence's band.
    pub fn new<S: AsRef<str>>(labels: &[S], range: [f64; 2], padding: f64) -> Self {
        let mut domain: Vec<String> = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label.as_ref();
            if !domain.iter().any(|d| d == label) {
                domain.push(label.to_string());
            }
        }

        let n = domain.len() as f64;
        let [r0, r1] = range;
        let step = (r1 - r0) / (n - padding + 2.0 * padding).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self {
            domain,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Start of the band for `label`, or `None` for an unknown label.
    pub fn band(&self, label: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|d| d == label)
            .map(|i| self.start + self.step * i as f64)
    }

    /// Centre of the band for `label`.
    pub fn center(&self, label: &str) -> Option<f64> {
        self.band(label).map(|x| x + self.bandwidth / 2.0)
    }

    /// One tick per category at the band centre.
    pub fn axis_ticks(&self) -> Vec<AxisTick> {
        self.domain
            .iter()
            .enumerate()
            .map(|(i, label)| AxisTick {
                position: self.start + self.step * i as f64 + self.bandwidth / 2.0,
                label: label.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn ticks_for_unit_interval() {
        assert_eq!(
            ticks(0.0, 1.0, 10),
            vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
        );
    }

    #[test]
    fn ticks_pick_round_steps() {
        assert_eq!(ticks(0.0, 44.0, 10), vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0]);
        assert_eq!(ticks(0.0, 160.0, 10), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 120.0, 140.0, 160.0]);
        assert_eq!(ticks(1.0, 9.0, 4), vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn ticks_reverse_and_degenerate() {
        assert_eq!(ticks(1.0, 0.0, 2), vec![1.0, 0.5, 0.0]);
        assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
        assert!(ticks(f64::NAN, 1.0, 10).is_empty());
    }

    #[test]
    fn tick_step_matches_ticks() {
        assert!(approx(tick_step(0.0, 1.0, 10), 0.1));
        assert!(approx(tick_step(0.0, 44.0, 10), 5.0));
        assert!(approx(tick_step(44.0, 0.0, 10), -5.0));
    }

    #[test]
    fn nice_extends_to_round_values() {
        let s = LinearScale::new([0.0, 97.3], [270.0, 0.0]).nice(DEFAULT_TICK_COUNT);
        assert_eq!(s.domain(), [0.0, 100.0]);

        let s = LinearScale::new([0.0, 0.96], [0.0, 1.0]).nice(DEFAULT_TICK_COUNT);
        assert!(approx(s.domain()[1], 1.0));

        let s = LinearScale::new([1.1, 10.9], [0.0, 1.0]).nice(DEFAULT_TICK_COUNT);
        assert_eq!(s.domain(), [1.0, 11.0]);
    }

    #[test]
    fn nice_leaves_degenerate_domain() {
        let s = LinearScale::new([0.0, 0.0], [270.0, 0.0]).nice(DEFAULT_TICK_COUNT);
        assert_eq!(s.domain(), [0.0, 0.0]);
    }

    #[test]
    fn linear_scale_maps_and_inverts_range() {
        let s = LinearScale::new([0.0, 200.0], [220.0, 0.0]);
        assert_eq!(s.scale(0.0), 220.0);
        assert_eq!(s.scale(200.0), 0.0);
        assert_eq!(s.scale(50.0), 165.0);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let s = LinearScale::new([5.0, 5.0], [0.0, 1.0]);
        assert_eq!(s.scale(5.0), 0.5);
        assert_eq!(s.scale(100.0), 0.5);
    }

    #[test]
    fn axis_labels_use_step_precision() {
        let s = LinearScale::new([0.0, 1.0], [100.0, 0.0]);
        let labels: Vec<String> = s.axis_ticks(5).into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);

        let s = LinearScale::new([0.0, 5000.0], [100.0, 0.0]);
        let ticks = s.axis_ticks(5);
        assert_eq!(ticks.last().unwrap().label, "5,000");
        assert_eq!(ticks.last().unwrap().position, 0.0);
    }

    #[test]
    fn grouped_format() {
        assert_eq!(format_fixed_grouped(1234567.0, 0), "1,234,567");
        assert_eq!(format_fixed_grouped(123.0, 0), "123");
        assert_eq!(format_fixed_grouped(-2.5, 1), "\u{2212}2.5");
        assert_eq!(format_fixed_grouped(-0.001, 2), "0.00");
        assert_eq!(format_fixed_grouped(1000.25, 2), "1,000.25");
    }

    #[test]
    fn precision_from_step() {
        assert_eq!(precision_fixed(20.0), 0);
        assert_eq!(precision_fixed(1.0), 0);
        assert_eq!(precision_fixed(0.5), 1);
        assert_eq!(precision_fixed(0.05), 2);
    }

    #[test]
    fn band_scale_layout() {
        let s = BandScale::new(&["A", "B", "C", "D", "E"], [0.0, 310.0], 0.2);
        // step = 310 / (5 - 0.2 + 0.4)
        let step = 310.0 / 5.2;
        assert!(approx(s.step(), step));
        assert!(approx(s.bandwidth(), step * 0.8));
        assert!(approx(s.band("A").unwrap(), step * 0.2));
        let last_end = s.band("E").unwrap() + s.bandwidth();
        assert!(approx(310.0 - last_end, step * 0.2), "outer padding is symmetric");
        assert!(s.band("Z").is_none());
    }

    #[test]
    fn band_scale_dedupes_labels() {
        let s = BandScale::new(&["A", "B", "A"], [0.0, 100.0], 0.0);
        assert_eq!(s.domain(), &["A".to_string(), "B".to_string()]);
        assert!(approx(s.bandwidth(), 50.0));
    }

    #[test]
    fn band_axis_ticks_at_centres() {
        let s = BandScale::new(&["A", "B"], [0.0, 100.0], 0.0);
        let ticks = s.axis_ticks();
        assert_eq!(ticks[0], AxisTick { position: 25.0, label: "A".into() });
        assert_eq!(ticks[1].position, 75.0);
        assert_eq!(s.center("B"), Some(75.0));
    }

    #[test]
    fn empty_band_scale() {
        let s = BandScale::new::<&str>(&[], [0.0, 100.0], 0.2);
        assert!(s.axis_ticks().is_empty());
        assert!(s.band("A").is_none());
    }
}
