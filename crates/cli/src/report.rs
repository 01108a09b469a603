//! JSON reports printed by the CLI.

use serde::Serialize;
use shapetrace::api::{Classification, RecognizerCfg, Shape};

#[derive(Debug, Serialize)]
pub struct Report {
    pub code_version: &'static str,
    pub target: Option<String>,
    pub expected_corners: usize,
    pub eps: f64,
    pub matched: bool,
    /// Short reason for a rejection, suitable for a spoken hint.
    pub rejection: Option<String>,
    pub input_points: usize,
    pub simplified: Vec<[f64; 2]>,
    pub closure_gap: Option<f64>,
    pub corner_count: Option<usize>,
    pub angles: Vec<f64>,
    pub perimeter: Option<f64>,
    pub area: Option<f64>,
    pub aspect_ratio: Option<f64>,
    pub compactness: Option<f64>,
}

impl Report {
    pub fn new(
        target: Option<Shape>,
        expected_corners: usize,
        eps: f64,
        res: &Classification,
    ) -> Self {
        let d = &res.diagnostics;
        Self {
            code_version: shapetrace::VERSION,
            target: target.map(|s| s.to_string()),
            expected_corners,
            eps,
            matched: res.matched,
            rejection: res.rejection.map(|r| r.to_string()),
            input_points: d.input_points,
            simplified: d.simplified.iter().map(|p| [p.x, p.y]).collect(),
            closure_gap: d.closure_gap,
            corner_count: d.corner_count,
            angles: d.angles.clone(),
            perimeter: d.perimeter,
            area: d.area,
            aspect_ratio: d.aspect_ratio,
            compactness: d.compactness,
        }
    }
}

/// One line of an eps sweep.
#[derive(Debug, Serialize)]
pub struct SweepRow {
    pub eps: f64,
    pub simplified_points: usize,
    pub corners: usize,
}

impl SweepRow {
    pub fn measure(points: &[shapetrace::Pt2], eps: f64, cfg: &RecognizerCfg) -> Self {
        Self {
            eps,
            simplified_points: shapetrace::api::simplify(points, eps).len(),
            corners: shapetrace::corner_count(points, eps, cfg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use shapetrace::api::{classify, Pt2};

    fn square() -> Vec<Pt2> {
        [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0)]
            .iter()
            .map(|&(x, y)| Pt2::new(x, y))
            .collect()
    }

    #[test]
    fn report_serializes_diagnostics() {
        let res = classify(&square(), 4, 5.0).unwrap();
        let report = Report::new(Some(Shape::Square), 4, 5.0, &res);
        let v: Value = serde_json::to_value(&report).unwrap();
        assert_eq!(v["matched"], true);
        assert_eq!(v["target"], "square");
        assert_eq!(v["corner_count"], 4);
        assert_eq!(v["simplified"].as_array().unwrap().len(), 5);
        assert!(v["rejection"].is_null());
    }

    #[test]
    fn rejection_is_reported_as_text() {
        let mut open = square();
        open.pop();
        let res = classify(&open, 4, 5.0).unwrap();
        let v = serde_json::to_value(Report::new(None, 4, 5.0, &res)).unwrap();
        assert_eq!(v["matched"], false);
        assert!(v["rejection"]
            .as_str()
            .unwrap()
            .starts_with("the shape is not closed"));
        assert!(v["corner_count"].is_null());
    }

    #[test]
    fn sweep_row_counts_corners() {
        let row = SweepRow::measure(&square(), 5.0, &RecognizerCfg::default());
        assert_eq!(row.simplified_points, 5);
        assert_eq!(row.corners, 4);
    }
}
