//! Turning angles and corner counting on closed rings.
//!
//! A ring is a simplified polygon read cyclically. Before counting, callers
//! usually drop the closing duplicate (`close_ring`) and fix the traversal
//! direction (`normalize_winding`): `angle_at` measures a counter-clockwise
//! sweep, so the same square traced the other way round would report 270°
//! at every corner.
//!
//! Code cross-refs: `geom::angle_at`, `cfg::RecognizerCfg::is_corner_angle`

use crate::cfg::RecognizerCfg;
use crate::geom::{angle_at, distance, signed_area, Pt2};

/// A ring vertex whose turning angle falls inside the corner band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corner {
    pub index: usize,
    /// Degrees in `[0, 360)`.
    pub angle: f64,
}

/// Per-vertex angles and the vertices that qualified as corners.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CornerReport {
    pub angles: Vec<f64>,
    pub corners: Vec<Corner>,
}

impl CornerReport {
    #[inline]
    pub fn count(&self) -> usize {
        self.corners.len()
    }
}

/// Angle at every vertex of `ring` (cyclic) and the corners among them.
///
/// Rings with fewer than 3 vertices have no defined angles and yield an
/// empty report.
pub fn analyze_corners(ring: &[Pt2], cfg: &RecognizerCfg) -> CornerReport {
    let n = ring.len();
    if n < 3 {
        return CornerReport::default();
    }
    let angles: Vec<f64> = (0..n)
        .map(|i| angle_at(ring[(i + n - 1) % n], ring[i], ring[(i + 1) % n]))
        .collect();
    let corners = angles
        .iter()
        .enumerate()
        .filter(|&(_, &a)| cfg.is_corner_angle(a))
        .map(|(index, &angle)| Corner { index, angle })
        .collect();
    CornerReport { angles, corners }
}

/// Drop the last point when it lies within `gap` of the first.
///
/// A closed trace ends where it started; keeping both copies would put a
/// zero-length edge into the ring. Three vertices are only shortened when
/// the last one coincides with the first; otherwise it is a corner of the
/// ring, not its closing copy.
pub fn close_ring(poly: &[Pt2], gap: f64) -> Vec<Pt2> {
    match poly {
        [first, .., last]
            if (poly.len() > 3 || first == last) && distance(*first, *last) <= gap =>
        {
            poly[..poly.len() - 1].to_vec()
        }
        _ => poly.to_vec(),
    }
}

/// Reverse `ring` in place when its signed area is positive.
///
/// Afterwards convex vertices report their interior angle from `angle_at`.
/// Returns whether the ring was reversed.
pub fn normalize_winding(ring: &mut [Pt2]) -> bool {
    if signed_area(ring) > 0.0 {
        ring.reverse();
        true
    } else {
        false
    }
}
