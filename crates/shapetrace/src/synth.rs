//! Synthetic hand-drawn traces of regular polygons.
//!
//! Purpose
//! - Reproducible, noisy input for tests, benches and the CLI demo without
//!   shipping recorded drawings.
//!
//! Model
//! - Vertices of a regular `corners`-gon on a circle of `radius`, rotated by
//!   `phase` and stretched horizontally by `stretch`.
//! - Each edge is sampled at `points_per_edge` evenly spaced points, every
//!   sample moved by uniform jitter in `[-jitter, jitter]` per axis.
//! - The trace ends with a copy of its first point shifted by `closing_gap`
//!   along x (0 gives an exactly closed trace).
//! - One seed, one `StdRng`: the same `(cfg, seed)` always yields the same
//!   drawing.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::capture::Drawing;
use crate::geom::Pt2;

#[derive(Clone, Copy, Debug)]
pub struct SketchCfg {
    pub corners: usize,
    pub radius: f64,
    pub center: Pt2,
    /// Rotation of the first vertex (radians).
    pub phase: f64,
    /// Horizontal scale factor applied after rotation.
    pub stretch: f64,
    pub points_per_edge: usize,
    pub jitter: f64,
    pub closing_gap: f64,
}

impl Default for SketchCfg {
    fn default() -> Self {
        Self {
            corners: 4,
            radius: 70.0,
            center: Vector2::new(150.0, 150.0),
            phase: std::f64::consts::FRAC_PI_4,
            stretch: 1.0,
            points_per_edge: 12,
            jitter: 1.0,
            closing_gap: 0.0,
        }
    }
}

impl SketchCfg {
    /// Axis-aligned regular polygon for `corners` (flat bottom edge).
    pub fn regular(corners: usize) -> Self {
        let n = corners.max(3) as f64;
        Self {
            corners: corners.max(3),
            // Bottom edge horizontal: first vertex half a step right of -90°.
            phase: -std::f64::consts::FRAC_PI_2 - std::f64::consts::PI / n,
            ..Self::default()
        }
    }

    /// Noise-free polygon vertices, in tracing order.
    pub fn vertices(&self) -> Vec<Pt2> {
        let n = self.corners.max(3);
        let step = std::f64::consts::TAU / n as f64;
        (0..n)
            .map(|k| {
                let th = self.phase + k as f64 * step;
                Vector2::new(
                    self.center.x + self.stretch * self.radius * th.cos(),
                    self.center.y + self.radius * th.sin(),
                )
            })
            .collect()
    }
}

/// Draw one single-stroke sketch.
pub fn draw_sketch(cfg: SketchCfg, seed: u64) -> Drawing {
    let mut rng = StdRng::seed_from_u64(seed);
    let verts = cfg.vertices();
    let n = verts.len();
    let per_edge = cfg.points_per_edge.max(1);
    let j = cfg.jitter.max(0.0);

    let mut trace = Vec::with_capacity(n * per_edge + 1);
    for k in 0..n {
        let a = verts[k];
        let b = verts[(k + 1) % n];
        for s in 0..per_edge {
            let t = s as f64 / per_edge as f64;
            trace.push(a + (b - a) * t + noise(&mut rng, j));
        }
    }
    let close = trace[0] + Vector2::new(cfg.closing_gap, 0.0);
    trace.push(close);
    Drawing::from_strokes([trace])
}

fn noise(rng: &mut StdRng, amp: f64) -> Pt2 {
    if amp == 0.0 {
        return Vector2::zeros();
    }
    Vector2::new(rng.gen_range(-amp..=amp), rng.gen_range(-amp..=amp))
}
