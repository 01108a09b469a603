//! Point alias and axis-aligned bounding box.

use nalgebra::Vector2;

/// A canvas point `(x, y)`.
pub type Pt2 = Vector2<f64>;

/// Axis-aligned bounding box `[min, max]` (component-wise).
///
/// Invariants:
/// - `min.x <= max.x` and `min.y <= max.y` for boxes built by `bounding_box`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox2 {
    pub min: Pt2,
    pub max: Pt2,
}

impl BBox2 {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// `width / height`, or `None` for a flat box (zero height).
    #[inline]
    pub fn aspect_ratio(&self) -> Option<f64> {
        let h = self.height();
        if h > 0.0 {
            Some(self.width() / h)
        } else {
            None
        }
    }

    /// Grow to include `p`.
    #[inline]
    pub fn include(&mut self, p: Pt2) {
        self.min = self.min.inf(&p);
        self.max = self.max.sup(&p);
    }
}
