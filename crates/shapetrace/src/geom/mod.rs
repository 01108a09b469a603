//! Plain 2D metrics over point sequences (no allocation beyond results).
//!
//! Purpose
//! - Provide the handful of measurements the recognizer needs: distances,
//!   turning angles, cyclic perimeter, shoelace area and bounding boxes.
//! - Keep every function pure and total: degenerate inputs return `None` or a
//!   zero value instead of dividing by zero.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (`Pt2`), coordinates in canvas units.
//! - Polygons are slices treated cyclically (last point connects to first).
//! - Signed area is positive for counter-clockwise order in a y-up frame.
//!
//! Code cross-refs: `crate::simplify`, `crate::corners`, `crate::classify`

mod metrics;
mod types;

pub use metrics::{
    angle_at, area, bounding_box, compactness, distance, perimeter, perpendicular_distance,
    signed_area,
};
pub use types::{BBox2, Pt2};
