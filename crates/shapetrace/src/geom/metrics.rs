use super::types::{BBox2, Pt2};

#[inline]
pub fn distance(a: Pt2, b: Pt2) -> f64 {
    (a - b).norm()
}

/// Distance from `p` to the infinite line through `a` and `b`.
///
/// Uses `|cross(b-a, p-a)| / |b-a|`. When `a` and `b` coincide the line is
/// undefined and the Euclidean distance to `a` is returned instead.
pub fn perpendicular_distance(p: Pt2, a: Pt2, b: Pt2) -> f64 {
    let ab = b - a;
    let len = ab.norm();
    if len == 0.0 {
        return distance(p, a);
    }
    let ap = p - a;
    (ab.x * ap.y - ab.y * ap.x).abs() / len
}

/// Turning angle at `vertex` in degrees, in `[0, 360)`.
///
/// Counter-clockwise sweep from `prev - vertex` to `next - vertex`
/// (`atan2` difference). Depends on traversal order: for rings with
/// non-positive signed area a convex vertex reports its interior angle.
/// A zero-length edge contributes direction `atan2(0, 0) = 0`.
pub fn angle_at(prev: Pt2, vertex: Pt2, next: Pt2) -> f64 {
    let v_in = prev - vertex;
    let v_out = next - vertex;
    let a1 = v_in.y.atan2(v_in.x);
    let a2 = v_out.y.atan2(v_out.x);
    let mut deg = (a2 - a1).to_degrees();
    if deg < 0.0 {
        deg += 360.0;
    }
    // A tiny negative difference can round up to exactly 360 above.
    if deg >= 360.0 {
        deg -= 360.0;
    }
    deg
}

/// Sum of edge lengths, closing edge included.
pub fn perimeter(poly: &[Pt2]) -> f64 {
    let n = poly.len();
    if n < 2 {
        return 0.0;
    }
    (0..n).map(|i| distance(poly[i], poly[(i + 1) % n])).sum()
}

/// Shoelace signed area (positive for counter-clockwise in a y-up frame).
pub fn signed_area(poly: &[Pt2]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let p = poly[i];
            let q = poly[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum();
    twice / 2.0
}

#[inline]
pub fn area(poly: &[Pt2]) -> f64 {
    signed_area(poly).abs()
}

/// Component-wise min/max over all points; `None` for an empty slice.
pub fn bounding_box(poly: &[Pt2]) -> Option<BBox2> {
    let (first, rest) = poly.split_first()?;
    let mut bb = BBox2 {
        min: *first,
        max: *first,
    };
    for p in rest {
        bb.include(*p);
    }
    Some(bb)
}

/// Isoperimetric quotient `4π·area / perimeter²` (1 for a circle).
///
/// `None` when the perimeter is zero or not finite.
pub fn compactness(area: f64, perimeter: f64) -> Option<f64> {
    if !(perimeter.is_finite()) || perimeter <= 0.0 {
        return None;
    }
    Some(4.0 * std::f64::consts::PI * area / (perimeter * perimeter))
}
