//! Ramer–Douglas–Peucker polyline simplification.
//!
//! Purpose
//! - Reduce a dense pointer trace to the few vertices that carry its shape,
//!   so that corner counting sees edges instead of jitter.
//!
//! Design
//! - Works on index ranges over the caller's immutable slice and records kept
//!   points in a mask; no sub-lists are built, so ranges never alias.
//! - Divide-and-conquer runs on an explicit stack of `(start, end)` ranges, so
//!   long traces cannot exhaust the call stack.
//! - Open paths stay open: closure is judged by the classifier.
//!
//! Guarantees
//! - Output length <= input length; first and last input points are kept;
//!   original order is preserved.
//! - Idempotent: simplifying the output again with the same tolerance returns
//!   it unchanged.

use crate::geom::{perpendicular_distance, Pt2};

/// Simplify `points` with tolerance `eps` (maximum perpendicular deviation).
///
/// Inputs with fewer than 3 points are returned unchanged. `eps` is expected
/// to be positive; it is not validated here.
pub fn simplify(points: &[Pt2], eps: f64) -> Vec<Pt2> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let kept = keep_mask(points, eps);
    points
        .iter()
        .zip(&kept)
        .filter(|&(_, k)| *k)
        .map(|(p, _)| *p)
        .collect()
}

/// Indices (into `points`) of the vertices `simplify` keeps, ascending.
pub fn simplify_indices(points: &[Pt2], eps: f64) -> Vec<usize> {
    if points.len() < 3 {
        return (0..points.len()).collect();
    }
    keep_mask(points, eps)
        .into_iter()
        .enumerate()
        .filter_map(|(i, k)| k.then_some(i))
        .collect()
}

fn keep_mask(points: &[Pt2], eps: f64) -> Vec<bool> {
    let last = points.len() - 1;
    let mut kept = vec![false; points.len()];
    kept[0] = true;
    kept[last] = true;

    let mut stack = vec![(0usize, last)];
    while let Some((start, end)) = stack.pop() {
        if let Some((k, d_max)) = farthest_interior(points, start, end) {
            if d_max > eps {
                kept[k] = true;
                stack.push((k, end));
                stack.push((start, k));
            }
        }
    }
    kept
}

/// First interior index with the largest distance to chord `start→end`.
///
/// `None` when the range has no interior points.
fn farthest_interior(points: &[Pt2], start: usize, end: usize) -> Option<(usize, f64)> {
    if end <= start + 1 {
        return None;
    }
    let a = points[start];
    let b = points[end];
    let mut best = (start + 1, -1.0f64);
    for (i, p) in points.iter().enumerate().take(end).skip(start + 1) {
        let d = perpendicular_distance(*p, a, b);
        if d > best.1 {
            best = (i, d);
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Pt2> {
        raw.iter().map(|&(x, y)| vector![x, y]).collect()
    }

    #[test]
    fn short_inputs_unchanged() {
        assert!(simplify(&[], 1.0).is_empty());
        let one = pts(&[(1.0, 2.0)]);
        assert_eq!(simplify(&one, 1.0), one);
        let two = pts(&[(0.0, 0.0), (0.0, 0.0)]);
        assert_eq!(simplify(&two, 1.0), two);
    }

    #[test]
    fn collinear_run_collapses_to_endpoints() {
        let line = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);
        let out = simplify(&line, 0.1);
        assert_eq!(out, pts(&[(0.0, 0.0), (4.0, 4.0)]));
    }

    #[test]
    fn keeps_square_corners() {
        let sq = pts(&[
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 100.0),
            (0.0, 100.0),
            (0.0, 0.0),
        ]);
        assert_eq!(simplify(&sq, 5.0), sq);
    }

    #[test]
    fn dense_square_reduces_to_corners() {
        let mut trace = Vec::new();
        for i in 0..10 {
            trace.push(vector![i as f64 * 10.0, 0.0]);
        }
        for i in 0..10 {
            trace.push(vector![100.0, i as f64 * 10.0]);
        }
        for i in 0..10 {
            trace.push(vector![100.0 - i as f64 * 10.0, 100.0]);
        }
        for i in 0..=10 {
            trace.push(vector![0.0, 100.0 - i as f64 * 10.0]);
        }
        let out = simplify(&trace, 5.0);
        assert_eq!(
            out,
            pts(&[
                (0.0, 0.0),
                (100.0, 0.0),
                (100.0, 100.0),
                (0.0, 100.0),
                (0.0, 0.0)
            ])
        );
        assert_eq!(simplify_indices(&trace, 5.0), vec![0, 10, 20, 30, 40]);
    }

    #[test]
    fn small_bumps_within_tolerance_vanish() {
        let wobbly = pts(&[(0.0, 0.0), (10.0, 1.0), (20.0, -1.5), (30.0, 0.5), (40.0, 0.0)]);
        assert_eq!(simplify(&wobbly, 2.0).len(), 2);
        // Splits at the deepest bump; only the left half still exceeds eps.
        assert_eq!(
            simplify(&wobbly, 1.3),
            pts(&[(0.0, 0.0), (10.0, 1.0), (20.0, -1.5), (40.0, 0.0)])
        );
    }

    #[test]
    fn zero_length_chord_uses_euclidean_distance() {
        // Closed trace: the first chord has coinciding endpoints.
        let tri = pts(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0), (0.0, 0.0)]);
        assert_eq!(simplify(&tri, 5.0), tri);
        // Everything within eps of the shared endpoint collapses.
        let blob = pts(&[(0.0, 0.0), (1.0, 1.0), (-1.0, 0.5), (0.0, 0.0)]);
        assert_eq!(simplify(&blob, 5.0), pts(&[(0.0, 0.0), (0.0, 0.0)]));
    }

    fn trace_strategy() -> impl Strategy<Value = Vec<Pt2>> {
        prop::collection::vec((-200.0f64..200.0, -200.0f64..200.0), 0..60)
            .prop_map(|v| v.into_iter().map(|(x, y)| vector![x, y]).collect())
    }

    proptest! {
        #[test]
        fn never_grows_and_keeps_endpoints(trace in trace_strategy(), eps in 0.1f64..50.0) {
            let out = simplify(&trace, eps);
            prop_assert!(out.len() <= trace.len());
            if trace.len() < 3 {
                prop_assert_eq!(&out, &trace);
            } else {
                prop_assert_eq!(out[0], trace[0]);
                prop_assert_eq!(out[out.len() - 1], trace[trace.len() - 1]);
            }
        }

        #[test]
        fn simplification_is_idempotent(trace in trace_strategy(), eps in 0.1f64..50.0) {
            let once = simplify(&trace, eps);
            let twice = simplify(&once, eps);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn indices_match_points(trace in trace_strategy(), eps in 0.1f64..50.0) {
            let idx = simplify_indices(&trace, eps);
            prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
            let picked: Vec<Pt2> = idx.iter().map(|&i| trace[i]).collect();
            prop_assert_eq!(picked, simplify(&trace, eps));
        }
    }
}
