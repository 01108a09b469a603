use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use shapetrace::api::{classify_with_cfg, draw_sketch, Drawing, RecognizerCfg, Shape, SketchCfg};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod drawing_csv;
mod report;

use report::{Report, SweepRow};

#[derive(Parser)]
#[command(name = "shapetrace")]
#[command(about = "Check freehand traces against target polygons")]
struct Cmd {
    /// Log every classifier gate
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify a recorded drawing (CSV with stroke,x,y)
    Classify {
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        target: Target,
        #[arg(long, default_value_t = 5.0)]
        eps: f64,
        /// Write the JSON report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        thresholds: Thresholds,
    },
    /// Corner count per tolerance, for tuning eps on a recorded drawing
    Sweep {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_delimiter = ',', default_value = "1,2,5,10,20")]
        eps: Vec<f64>,
        #[command(flatten)]
        thresholds: Thresholds,
    },
    /// Synthesize a hand-drawn looking sketch and classify it
    Demo {
        #[arg(long)]
        shape: Shape,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1.0)]
        jitter: f64,
        /// Horizontal stretch (1 keeps the regular polygon)
        #[arg(long, default_value_t = 1.0)]
        stretch: f64,
        /// Distance between the trace's end and its start
        #[arg(long, default_value_t = 0.0)]
        closing_gap: f64,
        #[arg(long, default_value_t = 6.0)]
        eps: f64,
        /// Also save the synthetic drawing as CSV
        #[arg(long)]
        save: Option<PathBuf>,
        #[command(flatten)]
        thresholds: Thresholds,
    },
}

#[derive(Args)]
struct Target {
    /// Target shape by name (triangle, square, rectangle, pentagon, hexagon)
    #[arg(long, conflicts_with = "corners")]
    shape: Option<Shape>,
    /// Target corner count
    #[arg(long)]
    corners: Option<usize>,
}

impl Target {
    fn expected_corners(&self) -> Result<usize> {
        self.shape
            .map(Shape::corners)
            .or(self.corners)
            .ok_or_else(|| anyhow!("pass --shape or --corners"))
    }
}

/// Overrides for the recognizer defaults.
#[derive(Args)]
struct Thresholds {
    /// Smallest vertex angle (degrees, exclusive) that counts as a corner
    #[arg(long)]
    corner_min_deg: Option<f64>,
    /// Largest vertex angle (degrees, exclusive) that counts as a corner
    #[arg(long)]
    corner_max_deg: Option<f64>,
    #[arg(long)]
    corner_slack: Option<usize>,
    #[arg(long)]
    closure_factor: Option<f64>,
    #[arg(long)]
    aspect_min: Option<f64>,
    #[arg(long)]
    aspect_max: Option<f64>,
    #[arg(long)]
    min_compactness: Option<f64>,
    /// Corner count that enables the aspect ratio and compactness checks
    #[arg(long)]
    quad_corners: Option<usize>,
}

impl Thresholds {
    fn to_cfg(&self) -> RecognizerCfg {
        let d = RecognizerCfg::default();
        RecognizerCfg {
            corner_min_deg: self.corner_min_deg.unwrap_or(d.corner_min_deg),
            corner_max_deg: self.corner_max_deg.unwrap_or(d.corner_max_deg),
            corner_slack: self.corner_slack.unwrap_or(d.corner_slack),
            closure_factor: self.closure_factor.unwrap_or(d.closure_factor),
            aspect_min: self.aspect_min.unwrap_or(d.aspect_min),
            aspect_max: self.aspect_max.unwrap_or(d.aspect_max),
            min_compactness: self.min_compactness.unwrap_or(d.min_compactness),
            quad_corners: self.quad_corners.unwrap_or(d.quad_corners),
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Classify {
            input,
            target,
            eps,
            out,
            thresholds,
        } => {
            let drawing = drawing_csv::load_drawing(&input)?;
            let expected = target.expected_corners()?;
            let cfg = thresholds.to_cfg();
            let report = run_classify(&drawing, target.shape, expected, eps, &cfg)?;
            emit(&report, out.as_deref())
        }
        Action::Sweep {
            input,
            eps,
            thresholds,
        } => sweep(&input, &eps, &thresholds.to_cfg()),
        Action::Demo {
            shape,
            seed,
            jitter,
            stretch,
            closing_gap,
            eps,
            save,
            thresholds,
        } => {
            let sketch = SketchCfg {
                jitter,
                stretch,
                closing_gap,
                ..SketchCfg::regular(shape.corners())
            };
            let drawing = draw_sketch(sketch, seed);
            tracing::info!(%shape, seed, points = drawing.point_count(), "demo_sketch");
            if let Some(path) = &save {
                drawing_csv::save_drawing(&drawing, path)?;
                tracing::info!(path = %path.display(), "demo_sketch_saved");
            }
            let cfg = thresholds.to_cfg();
            let report = run_classify(&drawing, Some(shape), shape.corners(), eps, &cfg)?;
            emit(&report, None)
        }
    }
}

fn run_classify(
    drawing: &Drawing,
    shape: Option<Shape>,
    expected: usize,
    eps: f64,
    cfg: &RecognizerCfg,
) -> Result<Report> {
    let res = classify_with_cfg(&drawing.points(), expected, eps, cfg)?;
    tracing::info!(
        matched = res.matched,
        corners = ?res.diagnostics.corner_count,
        expected,
        eps,
        "classified"
    );
    Ok(Report::new(shape, expected, eps, &res))
}

fn sweep(input: &Path, eps: &[f64], cfg: &RecognizerCfg) -> Result<()> {
    if let Some(bad) = eps.iter().find(|e| !(e.is_finite() && **e > 0.0)) {
        return Err(anyhow!("tolerance must be finite and > 0 (got {bad})"));
    }
    let points = drawing_csv::load_drawing(input)?.points();
    if points.is_empty() {
        return Err(anyhow!("{} has no points", input.display()));
    }
    let rows: Vec<SweepRow> = eps
        .iter()
        .map(|&e| SweepRow::measure(&points, e, cfg))
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn emit(report: &Report, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, json)?;
            tracing::info!(path = %path.display(), "report_written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn classify_args_parse_shape_and_overrides() {
        let cmd = Cmd::try_parse_from([
            "shapetrace",
            "classify",
            "--input",
            "d.csv",
            "--shape",
            "Square",
            "--eps",
            "4",
            "--corner-slack",
            "0",
        ])
        .unwrap();
        let Action::Classify {
            target,
            eps,
            thresholds,
            ..
        } = cmd.action
        else {
            panic!("expected classify");
        };
        assert_eq!(target.expected_corners().unwrap(), 4);
        assert_eq!(eps, 4.0);
        let cfg = thresholds.to_cfg();
        assert_eq!(cfg.corner_slack, 0);
        assert_eq!(cfg.closure_factor, RecognizerCfg::default().closure_factor);
    }

    #[test]
    fn every_threshold_has_a_flag() {
        let cmd = Cmd::try_parse_from([
            "shapetrace",
            "demo",
            "--shape",
            "triangle",
            "--corner-min-deg",
            "30",
            "--corner-max-deg",
            "150",
            "--corner-slack",
            "2",
            "--closure-factor",
            "3",
            "--aspect-min",
            "0.25",
            "--aspect-max",
            "4",
            "--min-compactness",
            "0.05",
            "--quad-corners",
            "5",
        ])
        .unwrap();
        let Action::Demo { thresholds, .. } = cmd.action else {
            panic!("expected demo");
        };
        let cfg = thresholds.to_cfg();
        assert_eq!(
            cfg,
            RecognizerCfg {
                corner_min_deg: 30.0,
                corner_max_deg: 150.0,
                corner_slack: 2,
                closure_factor: 3.0,
                aspect_min: 0.25,
                aspect_max: 4.0,
                min_compactness: 0.05,
                quad_corners: 5,
            }
        );
    }

    #[test]
    fn shape_and_corners_conflict() {
        let res = Cmd::try_parse_from([
            "shapetrace",
            "classify",
            "--input",
            "d.csv",
            "--shape",
            "square",
            "--corners",
            "4",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn missing_target_is_reported() {
        let t = Target {
            shape: None,
            corners: None,
        };
        assert!(t.expected_corners().is_err());
    }

    #[test]
    fn sweep_parses_eps_list() {
        let cmd =
            Cmd::try_parse_from(["shapetrace", "sweep", "--input", "d.csv", "--eps", "1,2.5,8"])
                .unwrap();
        let Action::Sweep { eps, .. } = cmd.action else {
            panic!("expected sweep");
        };
        assert_eq!(eps, vec![1.0, 2.5, 8.0]);
    }

    #[test]
    fn demo_sketch_of_each_shape_matches() {
        for shape in Shape::ALL {
            if shape == Shape::Rectangle {
                continue;
            }
            let sketch = SketchCfg {
                jitter: 0.5,
                ..SketchCfg::regular(shape.corners())
            };
            let drawing = draw_sketch(sketch, 3);
            let cfg = RecognizerCfg::default();
            let report = run_classify(&drawing, Some(shape), shape.corners(), 6.0, &cfg).unwrap();
            assert!(report.matched, "{shape}: {:?}", report.rejection);
        }
    }
}
