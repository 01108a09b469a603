//! Stroke accumulation for one drawing attempt.
//!
//! The input layer forwards pointer down/move/up events as `begin`, `append`
//! and `end`. Sealed strokes are moved into an immutable `Stroke`, so the
//! classifier always reads a stable snapshot (`drawing()`), while the open
//! stroke keeps a single writer.

use std::fmt;

use crate::geom::Pt2;

/// Sealed, immutable sequence of points from one pointer down→up gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pt2>,
}

impl Stroke {
    #[inline]
    pub fn points(&self) -> &[Pt2] {
        &self.points
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Ordered strokes submitted together for one classification.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Drawing {
    pub strokes: Vec<Stroke>,
}

impl Drawing {
    /// Build from raw per-stroke point lists (sealing each one).
    pub fn from_strokes<I>(strokes: I) -> Self
    where
        I: IntoIterator<Item = Vec<Pt2>>,
    {
        Self {
            strokes: strokes.into_iter().map(|points| Stroke { points }).collect(),
        }
    }

    /// Flattened point sequence: stroke order, then order within a stroke.
    pub fn points(&self) -> Vec<Pt2> {
        self.strokes
            .iter()
            .flat_map(|s| s.points.iter().copied())
            .collect()
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    /// `append`/`end` arrived without a preceding `begin`.
    NoOpenStroke,
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOpenStroke => write!(f, "no stroke is open (missing begin)"),
        }
    }
}

impl std::error::Error for CaptureError {}

/// Accumulates pointer input into strokes.
#[derive(Clone, Debug, Default)]
pub struct StrokeCapture {
    sealed: Vec<Stroke>,
    open: Option<Vec<Pt2>>,
}

impl StrokeCapture {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke at `p`. A stroke left open (lost up-event) is
    /// sealed first.
    pub fn begin(&mut self, p: Pt2) {
        if let Some(points) = self.open.take() {
            tracing::debug!(points = points.len(), "sealing stroke left open");
            self.sealed.push(Stroke { points });
        }
        self.open = Some(vec![p]);
    }

    pub fn append(&mut self, p: Pt2) -> Result<(), CaptureError> {
        let stroke = self.open.as_mut().ok_or(CaptureError::NoOpenStroke)?;
        stroke.push(p);
        Ok(())
    }

    /// Append the final point and seal the open stroke.
    pub fn end(&mut self, p: Pt2) -> Result<(), CaptureError> {
        let mut points = self.open.take().ok_or(CaptureError::NoOpenStroke)?;
        points.push(p);
        self.sealed.push(Stroke { points });
        Ok(())
    }

    /// All points so far, sealed strokes first, then the open stroke.
    pub fn all_points(&self) -> Vec<Pt2> {
        let open = self.open.iter().flatten();
        self.sealed
            .iter()
            .flat_map(|s| s.points.iter())
            .chain(open)
            .copied()
            .collect()
    }

    /// Snapshot of the sealed strokes.
    pub fn drawing(&self) -> Drawing {
        Drawing {
            strokes: self.sealed.clone(),
        }
    }

    /// True once a stroke has been sealed and none is open.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.open.is_none() && !self.sealed.is_empty()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Reset the canvas.
    pub fn clear(&mut self) {
        self.sealed.clear();
        self.open = None;
    }
}
