//! Drawings as CSV: one row per pointer sample, columns `stroke,x,y`.
//!
//! Rows are in temporal order. A change of `stroke` id starts a new stroke;
//! the first row of a stroke is the pointer-down sample and the last row the
//! pointer-up sample. A single-row stroke is a tap (down and up at the same
//! point), as the touch layer reports it.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use shapetrace::api::{Drawing, Pt2, StrokeCapture};
use std::fs::File;
use std::path::Path;

pub fn load_drawing(path: &Path) -> Result<Drawing> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("stroke").cast(DataType::Int64),
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading stroke,x,y from {}", path.display()))?;
    tracing::info!(rows = df.height(), "drawing_csv_rows");

    let ids = df.column("stroke")?.i64()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;

    let mut groups: Vec<(i64, Vec<Pt2>)> = Vec::new();
    for (row, ((id, x), y)) in ids.into_iter().zip(xs).zip(ys).enumerate() {
        let (Some(id), Some(x), Some(y)) = (id, x, y) else {
            bail!("row {}: empty stroke/x/y cell", row + 1);
        };
        let p = Pt2::new(x, y);
        match groups.last_mut() {
            Some((last_id, pts)) if *last_id == id => pts.push(p),
            _ => groups.push((id, vec![p])),
        }
    }
    replay(groups.into_iter().map(|(_, pts)| pts))
}

/// Feed grouped samples through `StrokeCapture` as down/move/up events.
fn replay<I>(strokes: I) -> Result<Drawing>
where
    I: IntoIterator<Item = Vec<Pt2>>,
{
    let mut capture = StrokeCapture::new();
    for pts in strokes {
        let (&down, rest) = pts
            .split_first()
            .ok_or_else(|| anyhow!("empty stroke group"))?;
        capture.begin(down);
        match rest.split_last() {
            Some((&up, moves)) => {
                for &p in moves {
                    capture.append(p)?;
                }
                capture.end(up)?;
            }
            None => capture.end(down)?,
        }
    }
    Ok(capture.drawing())
}

pub fn save_drawing(drawing: &Drawing, path: &Path) -> Result<()> {
    let mut ids: Vec<i64> = Vec::with_capacity(drawing.point_count());
    let mut xs: Vec<f64> = Vec::with_capacity(drawing.point_count());
    let mut ys: Vec<f64> = Vec::with_capacity(drawing.point_count());
    for (k, stroke) in drawing.strokes.iter().enumerate() {
        for p in stroke.points() {
            ids.push(k as i64);
            xs.push(p.x);
            ys.push(p.y);
        }
    }
    let mut df = df!("stroke" => ids, "x" => xs, "y" => ys)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(file).include_header(true).finish(&mut df)?;
    Ok(())
}
