//! Recognizer thresholds.
//!
//! Policy
//! - Defaults are the values the drawing game shipped with; they were tuned
//!   by hand on children's drawings. Callers pass a config explicitly, there
//!   is no process-wide setting.

/// Thresholds for corner detection and the quadrilateral checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecognizerCfg {
    /// Corner band lower bound (degrees, exclusive).
    pub corner_min_deg: f64,
    /// Corner band upper bound (degrees, exclusive).
    pub corner_max_deg: f64,
    /// Accepted deviation from the expected corner count.
    pub corner_slack: usize,
    /// Closure tolerance as a multiple of the simplification tolerance.
    pub closure_factor: f64,
    /// Accepted bounding-box `width / height` range (inclusive).
    pub aspect_min: f64,
    pub aspect_max: f64,
    /// Minimum isoperimetric quotient for quadrilaterals.
    pub min_compactness: f64,
    /// Expected corner count that enables the aspect/compactness checks.
    pub quad_corners: usize,
}

impl Default for RecognizerCfg {
    fn default() -> Self {
        Self {
            corner_min_deg: 20.0,
            corner_max_deg: 160.0,
            corner_slack: 1,
            closure_factor: 2.0,
            aspect_min: 0.5,
            aspect_max: 2.0,
            min_compactness: 0.1,
            quad_corners: 4,
        }
    }
}

impl RecognizerCfg {
    /// Whether `angle` (degrees) lies strictly inside the corner band.
    #[inline]
    pub fn is_corner_angle(&self, angle: f64) -> bool {
        angle > self.corner_min_deg && angle < self.corner_max_deg
    }

    /// Inclusive corner-count window around `expected`.
    #[inline]
    pub fn corner_window(&self, expected: usize) -> (usize, usize) {
        (
            expected.saturating_sub(self.corner_slack),
            expected.saturating_add(self.corner_slack),
        )
    }
}
