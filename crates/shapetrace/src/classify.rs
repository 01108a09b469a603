//! Shape classifier: does a freehand trace match a polygon with `k` corners?
//!
//! Pipeline (each gate short-circuits into a `Rejection`)
//! 1. too few input points (< 3),
//! 2. RDP simplification with tolerance `eps`; fewer than 3 vertices left,
//! 3. closure: first and last vertex within `closure_factor · eps`,
//! 4. corner count within `expected ± corner_slack` on the winding-normalized
//!    ring,
//! 5. quadrilaterals only: bounding-box aspect ratio and compactness.
//!
//! Non-matches are ordinary results; only broken preconditions (bad `eps`,
//! empty input, zero corners requested) are errors.
//!
//! Code cross-refs: `simplify::simplify`, `corners::{close_ring, normalize_winding,
//! analyze_corners}`, `cfg::RecognizerCfg`

use std::fmt;
use std::str::FromStr;

use crate::capture::Drawing;
use crate::cfg::RecognizerCfg;
use crate::corners::{analyze_corners, close_ring, normalize_winding};
use crate::geom::{area, bounding_box, compactness, distance, perimeter, Pt2};
use crate::simplify::simplify;

/// Target shapes the drawing game asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Triangle,
    Square,
    Rectangle,
    Pentagon,
    Hexagon,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Triangle,
        Shape::Square,
        Shape::Rectangle,
        Shape::Pentagon,
        Shape::Hexagon,
    ];

    #[inline]
    pub fn corners(self) -> usize {
        match self {
            Shape::Triangle => 3,
            Shape::Square | Shape::Rectangle => 4,
            Shape::Pentagon => 5,
            Shape::Hexagon => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Triangle => "triangle",
            Shape::Square => "square",
            Shape::Rectangle => "rectangle",
            Shape::Pentagon => "pentagon",
            Shape::Hexagon => "hexagon",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownShape(pub String);

impl fmt::Display for UnknownShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown shape name: {:?}", self.0)
    }
}

impl std::error::Error for UnknownShape {}

impl FromStr for Shape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name() == key)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}

/// Precondition violations; never used for an ordinary non-match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassifyError {
    InvalidTolerance { eps: f64 },
    EmptyInput,
    InvalidCornerCount,
    NonFinitePoint { index: usize },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTolerance { eps } => {
                write!(f, "tolerance must be finite and > 0 (got {eps})")
            }
            Self::EmptyInput => write!(f, "drawing has no points"),
            Self::InvalidCornerCount => write!(f, "expected corner count must be > 0"),
            Self::NonFinitePoint { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

/// First gate a trace failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    TooFewPoints { points: usize },
    Degenerate { vertices: usize },
    NotClosed { gap: f64, limit: f64 },
    CornerCount { found: usize, expected: usize },
    FlatBounds,
    AspectRatio { ratio: f64 },
    Irregular { compactness: f64 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { points } => {
                write!(f, "too few points to form a shape ({points})")
            }
            Self::Degenerate { vertices } => {
                write!(f, "the drawing collapses to {vertices} point(s)")
            }
            Self::NotClosed { gap, limit } => write!(
                f,
                "the shape is not closed (ends {gap:.1} apart, allowed {limit:.1})"
            ),
            Self::CornerCount { found, expected } => {
                write!(f, "found {found} corners, expected {expected}")
            }
            Self::FlatBounds => write!(f, "the shape has no height"),
            Self::AspectRatio { ratio } => {
                write!(f, "the shape is too stretched (aspect ratio {ratio:.2})")
            }
            Self::Irregular { compactness } => {
                write!(f, "the shape is too irregular (compactness {compactness:.2})")
            }
        }
    }
}

/// Measurements collected while classifying; fields stay `None` for gates
/// that were not reached.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    pub input_points: usize,
    pub simplified: Vec<Pt2>,
    pub closure_gap: Option<f64>,
    pub corner_count: Option<usize>,
    /// Turning angles of the winding-normalized ring (degrees).
    pub angles: Vec<f64>,
    pub perimeter: Option<f64>,
    pub area: Option<f64>,
    pub aspect_ratio: Option<f64>,
    pub compactness: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub matched: bool,
    pub rejection: Option<Rejection>,
    pub diagnostics: Diagnostics,
}

impl Classification {
    fn reject(rejection: Rejection, diagnostics: Diagnostics) -> Self {
        tracing::debug!(%rejection, "shape rejected");
        Self {
            matched: false,
            rejection: Some(rejection),
            diagnostics,
        }
    }

    fn accept(diagnostics: Diagnostics) -> Self {
        tracing::debug!(corners = ?diagnostics.corner_count, "shape passes all checks");
        Self {
            matched: true,
            rejection: None,
            diagnostics,
        }
    }
}

/// Classify with the default thresholds.
#[inline]
pub fn classify(
    points: &[Pt2],
    expected_corners: usize,
    eps: f64,
) -> Result<Classification, ClassifyError> {
    classify_with_cfg(points, expected_corners, eps, &RecognizerCfg::default())
}

/// Classify a captured drawing against a named target shape.
pub fn classify_drawing(
    drawing: &Drawing,
    shape: Shape,
    eps: f64,
    cfg: &RecognizerCfg,
) -> Result<Classification, ClassifyError> {
    classify_with_cfg(&drawing.points(), shape.corners(), eps, cfg)
}

/// Decide whether `points` (a flattened trace) matches a polygon with
/// `expected_corners` corners.
pub fn classify_with_cfg(
    points: &[Pt2],
    expected_corners: usize,
    eps: f64,
    cfg: &RecognizerCfg,
) -> Result<Classification, ClassifyError> {
    if !eps.is_finite() || eps <= 0.0 {
        return Err(ClassifyError::InvalidTolerance { eps });
    }
    if points.is_empty() {
        return Err(ClassifyError::EmptyInput);
    }
    if expected_corners == 0 {
        return Err(ClassifyError::InvalidCornerCount);
    }
    if let Some(index) = points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(ClassifyError::NonFinitePoint { index });
    }
    tracing::debug!(points = points.len(), expected_corners, eps, "classify");

    let mut diag = Diagnostics {
        input_points: points.len(),
        ..Diagnostics::default()
    };
    if points.len() < 3 {
        return Ok(Classification::reject(
            Rejection::TooFewPoints {
                points: points.len(),
            },
            diag,
        ));
    }

    let simplified = simplify(points, eps);
    tracing::debug!(vertices = simplified.len(), "simplified");
    let n = simplified.len();
    diag.simplified = simplified;
    if n < 3 {
        return Ok(Classification::reject(
            Rejection::Degenerate { vertices: n },
            diag,
        ));
    }

    let limit = cfg.closure_factor * eps;
    let gap = distance(diag.simplified[0], diag.simplified[n - 1]);
    diag.closure_gap = Some(gap);
    if gap > limit {
        return Ok(Classification::reject(
            Rejection::NotClosed { gap, limit },
            diag,
        ));
    }

    let mut ring = close_ring(&diag.simplified, limit);
    let reversed = normalize_winding(&mut ring);
    let report = analyze_corners(&ring, cfg);
    let found = report.count();
    tracing::debug!(found, reversed, angles = ?report.angles, "corners");
    diag.corner_count = Some(found);
    diag.angles = report.angles;
    let (lo, hi) = cfg.corner_window(expected_corners);
    if found < lo || found > hi {
        return Ok(Classification::reject(
            Rejection::CornerCount {
                found,
                expected: expected_corners,
            },
            diag,
        ));
    }

    let per = perimeter(&ring);
    let ar = area(&ring);
    diag.perimeter = Some(per);
    diag.area = Some(ar);
    diag.compactness = compactness(ar, per);
    diag.aspect_ratio = bounding_box(&ring).and_then(|bb| bb.aspect_ratio());

    if expected_corners == cfg.quad_corners {
        tracing::debug!(
            perimeter = per,
            area = ar,
            aspect_ratio = ?diag.aspect_ratio,
            compactness = ?diag.compactness,
            "quadrilateral checks"
        );
        let Some(ratio) = diag.aspect_ratio else {
            return Ok(Classification::reject(Rejection::FlatBounds, diag));
        };
        if !(cfg.aspect_min..=cfg.aspect_max).contains(&ratio) {
            return Ok(Classification::reject(
                Rejection::AspectRatio { ratio },
                diag,
            ));
        }
        let quotient = diag.compactness.unwrap_or(0.0);
        if !(cfg.min_compactness..).contains(&quotient) {
            return Ok(Classification::reject(
                Rejection::Irregular {
                    compactness: quotient,
                },
                diag,
            ));
        }
    }

    Ok(Classification::accept(diag))
}
