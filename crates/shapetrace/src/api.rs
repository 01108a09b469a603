//! Curated surface for the game controller and the CLI.
//!
//! Prefer these re-exports over reaching into submodules; internals move.

// Input
pub use crate::capture::{CaptureError, Drawing, Stroke, StrokeCapture};
// Geometry
pub use crate::geom::{
    angle_at, area, bounding_box, compactness, distance, perimeter, perpendicular_distance,
    signed_area, BBox2, Pt2,
};
// Pipeline stages
pub use crate::corners::{analyze_corners, close_ring, normalize_winding, Corner, CornerReport};
pub use crate::simplify::{simplify, simplify_indices};
// Verdict
pub use crate::cfg::RecognizerCfg;
pub use crate::classify::{
    classify, classify_drawing, classify_with_cfg, Classification, ClassifyError, Diagnostics,
    Rejection, Shape, UnknownShape,
};
pub use crate::corner_count;
// Synthetic input
pub use crate::synth::{draw_sketch, SketchCfg};
