//! Natural Earth I map projection.

use haq_core::GeoFeature;

/// Scale the fit starts from before stretching to the viewport.
const FIT_BASE_SCALE: f64 = 150.0;

/// Unscaled Natural Earth I coordinates for a point in radians.
pub fn natural_earth_raw(lambda: f64, phi: f64) -> (f64, f64) {
    let phi2 = phi * phi;
    let phi4 = phi2 * phi2;
    let x = lambda
        * (0.8707 - 0.131979 * phi2
            + phi4 * (-0.013791 + phi4 * (0.003971 * phi2 - 0.001529 * phi4)));
    let y = phi
        * (1.007226
            + phi2 * (0.015085 + phi4 * (-0.044475 + 0.028874 * phi2 - 0.005916 * phi4)));
    (x, y)
}

/// A scaled and translated Natural Earth projection. Screen y grows down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NaturalEarth {
    pub scale: f64,
    pub translate: [f64; 2],
}

impl NaturalEarth {
    pub fn new(scale: f64, translate: [f64; 2]) -> Self {
        Self { scale, translate }
    }

    /// Project `[longitude, latitude]` in degrees to screen coordinates.
    pub fn project(&self, lon_lat: [f64; 2]) -> [f64; 2] {
        let (x, y) = natural_earth_raw(lon_lat[0].to_radians(), lon_lat[1].to_radians());
        [
            x * self.scale + self.translate[0],
            -y * self.scale + self.translate[1],
        ]
    }

    /// Fit all features into a `width` x `height` box: uniform scale, centred
    /// on the projected bounds.
    ///
    /// With nothing to measure the projection is centred at base scale.
    pub fn fit_size(width: f64, height: f64, features: &[GeoFeature]) -> Self {
        let base = Self::new(FIT_BASE_SCALE, [0.0, 0.0]);
        let Some([x0, y0, x1, y1]) = base.bounds(features) else {
            log::warn!("projection: no coordinates to fit, using default placement");
            return Self::new(FIT_BASE_SCALE, [width / 2.0, height / 2.0]);
        };

        let (bw, bh) = (x1 - x0, y1 - y0);
        let k = (width / bw).min(height / bh);
        if !k.is_finite() || k <= 0.0 {
            return Self::new(FIT_BASE_SCALE, [width / 2.0, height / 2.0]);
        }
        Self::new(
            FIT_BASE_SCALE * k,
            [
                (width - k * (x1 + x0)) / 2.0,
                (height - k * (y1 + y0)) / 2.0,
            ],
        )
    }

    /// `[min_x, min_y, max_x, max_y]` of every projected vertex.
    pub fn bounds(&self, features: &[GeoFeature]) -> Option<[f64; 4]> {
        let mut bounds: Option<[f64; 4]> = None;
        for ring in features.iter().flat_map(|f| f.rings()) {
            for &point in ring {
                let [x, y] = self.project(point);
                if !x.is_finite() || !y.is_finite() {
                    continue;
                }
                bounds = Some(match bounds {
                    None => [x, y, x, y],
                    Some([x0, y0, x1, y1]) => [x0.min(x), y0.min(y), x1.max(x), y1.max(y)],
                });
            }
        }
        bounds
    }
}
