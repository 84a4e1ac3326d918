//! Pan/zoom transform for the map group.
//!
//! Mirrors d3-zoom's behaviour: the transform is `translate(x,y) scale(k)`,
//! scaling keeps an anchor point fixed on screen, and `k` is clamped to
//! [`SCALE_EXTENT`].

/// Allowed zoom factors.
pub const SCALE_EXTENT: [f64; 2] = [1.0, 8.0];

/// Scale step for the zoom buttons.
pub const BUTTON_ZOOM_IN: f64 = 2.0;
pub const BUTTON_ZOOM_OUT: f64 = 0.5;

/// Pointer movement (CSS px) before a press turns into a drag.
pub const DRAG_THRESHOLD: f64 = 3.0;

/// Unit of a wheel event's delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaMode {
    Pixel,
    Line,
    Page,
}

/// Zoom factor for one wheel event.
pub fn wheel_factor(delta_y: f64, mode: DeltaMode) -> f64 {
    let multiplier = match mode {
        DeltaMode::Pixel => 0.002,
        DeltaMode::Line => 0.05,
        DeltaMode::Page => 1.0,
    };
    2f64.powf(-delta_y * multiplier)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Multiply the scale by `factor`, keeping `anchor` (viewport
    /// coordinates) fixed. The result is clamped to [`SCALE_EXTENT`].
    pub fn scale_by(self, factor: f64, anchor: [f64; 2]) -> Self {
        let k1 = (self.k * factor).clamp(SCALE_EXTENT[0], SCALE_EXTENT[1]);
        if !k1.is_finite() {
            return self;
        }
        // anchor in the untransformed coordinate space
        let px = (anchor[0] - self.x) / self.k;
        let py = (anchor[1] - self.y) / self.k;
        Self {
            k: k1,
            x: anchor[0] - px * k1,
            y: anchor[1] - py * k1,
        }
    }

    /// Pan by a viewport-space offset.
    pub fn translate_by(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Apply the transform to a point.
    pub fn apply(&self, point: [f64; 2]) -> [f64; 2] {
        [point[0] * self.k + self.x, point[1] * self.k + self.y]
    }

    /// SVG `transform` attribute value.
    pub fn to_svg_transform(&self) -> String {
        format!("translate({},{}) scale({})", self.x, self.y, self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_transform_string() {
        assert_eq!(
            ZoomTransform::default().to_svg_transform(),
            "translate(0,0) scale(1)"
        );
    }

    #[test]
    fn scale_about_center_keeps_center_fixed() {
        let center = [480.0, 250.0];
        let t = ZoomTransform::IDENTITY.scale_by(BUTTON_ZOOM_IN, center);
        assert_eq!(t.k, 2.0);
        assert_eq!(t.apply(center), center);
        assert_eq!(t, ZoomTransform { k: 2.0, x: -480.0, y: -250.0 });
    }

    #[test]
    fn scale_is_clamped() {
        let mut t = ZoomTransform::IDENTITY;
        for _ in 0..10 {
            t = t.scale_by(BUTTON_ZOOM_IN, [0.0, 0.0]);
        }
        assert_eq!(t.k, 8.0);

        let out = ZoomTransform::IDENTITY.scale_by(BUTTON_ZOOM_OUT, [100.0, 100.0]);
        assert_eq!(out, ZoomTransform::IDENTITY, "cannot zoom out past 1x");
    }

    #[test]
    fn anchored_zoom_after_pan() {
        let t = ZoomTransform::IDENTITY.translate_by(30.0, -10.0).scale_by(2.0, [100.0, 100.0]);
        // the world point under the anchor before zooming stays under it
        let world = [(100.0 - 30.0), (100.0 + 10.0)];
        assert_eq!(t.apply(world), [100.0, 100.0]);
    }

    #[test]
    fn wheel_factor_by_mode() {
        assert_eq!(wheel_factor(0.0, DeltaMode::Pixel), 1.0);
        assert_eq!(wheel_factor(-500.0, DeltaMode::Pixel), 2.0);
        assert_eq!(wheel_factor(20.0, DeltaMode::Line), 0.5);
        assert_eq!(wheel_factor(1.0, DeltaMode::Page), 0.5);
    }

    #[test]
    fn translate_keeps_scale() {
        let t = ZoomTransform { k: 3.0, x: 1.0, y: 2.0 }.translate_by(4.0, 5.0);
        assert_eq!(t, ZoomTransform { k: 3.0, x: 5.0, y: 7.0 });
    }
}
