//! Freehand shape recognition for the drawing game.
//!
//! A child traces a shape on the canvas; the recognizer decides whether the
//! trace plausibly is the requested polygon. The pipeline is
//! capture → RDP simplification → corner analysis → gates (closure, corner
//! count, quadrilateral quality).
//!
//! Modules
//! - `geom`: distances, turning angles, perimeter, area, bounding boxes.
//! - `simplify`: Ramer–Douglas–Peucker over index ranges.
//! - `corners`: per-vertex angles, corner band, ring preparation.
//! - `classify`: the gated classifier and its diagnostics.
//! - `capture`: strokes and drawings from pointer input.
//! - `synth`: seeded synthetic sketches for tests and benches.
//!
//! Everything is synchronous and free of global state; thresholds travel in
//! an explicit `RecognizerCfg`.

pub mod api;
pub mod capture;
pub mod cfg;
pub mod classify;
pub mod corners;
pub mod geom;
pub mod simplify;
pub mod synth;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::RecognizerCfg;
pub use geom::Pt2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::capture::{CaptureError, Drawing, Stroke, StrokeCapture};
    pub use crate::cfg::RecognizerCfg;
    pub use crate::classify::{
        classify, classify_drawing, classify_with_cfg, Classification, ClassifyError,
        Diagnostics, Rejection, Shape,
    };
    pub use crate::geom::Pt2;
    pub use crate::simplify::simplify;
}

/// Corner count of `points` after simplification with `eps`, using the same
/// ring preparation as the classifier (closing duplicate removed, winding
/// normalized). Useful for tuning `eps` on recorded traces.
pub fn corner_count(points: &[Pt2], eps: f64, cfg: &RecognizerCfg) -> usize {
    let simplified = simplify::simplify(points, eps);
    let mut ring = corners::close_ring(&simplified, cfg.closure_factor * eps);
    corners::normalize_winding(&mut ring);
    corners::analyze_corners(&ring, cfg).count()
}
