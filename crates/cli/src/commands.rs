use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use polyfence::geom2::{self, FillRule, Point2D, Polygon, SketchCfg};
use polyfence::query::{query_with, Verdict};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::provenance::{self, Payload};

#[derive(Debug, Deserialize)]
pub struct CheckInput {
    pub vertices: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
pub struct ContainsInput {
    #[serde(default)]
    pub polygon: Option<Vec<[f64; 2]>>,
    #[serde(default)]
    pub point: Option<[f64; 2]>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CheckOutput {
    pub intersects: bool,
    /// First crossed edge, if any.
    pub edge: Option<usize>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ContainsOutput {
    pub verdict: String,
}

fn to_points(raw: &[[f64; 2]]) -> Vec<Point2D> {
    raw.iter().map(|p| Point2D::new(p[0], p[1])).collect()
}

fn read_json<T: for<'de> Deserialize<'de>>(input: &Path) -> Result<T> {
    let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", input.display()))
}

pub fn check_output(parsed: &CheckInput, ring: bool, cfg: &SketchCfg) -> CheckOutput {
    let vertices = to_points(&parsed.vertices);
    let edge = if ring {
        geom2::first_crossing_ring_with(&vertices, cfg)
    } else {
        geom2::first_crossing_with(&vertices, cfg)
    };
    CheckOutput {
        intersects: edge.is_some(),
        edge,
    }
}

pub fn contains_output(parsed: &ContainsInput, rule: FillRule) -> ContainsOutput {
    let polygon = parsed
        .polygon
        .as_deref()
        .and_then(|raw| Polygon::from_ring(&to_points(raw)));
    let point = parsed.point.map(|p| Point2D::new(p[0], p[1]));
    let verdict = query_with(polygon.as_ref(), point, rule);
    if verdict == Verdict::Unavailable {
        tracing::warn!(
            polygon = parsed.polygon.is_some(),
            point = parsed.point.is_some(),
            "no polygon or coordinates"
        );
    }
    ContainsOutput {
        verdict: verdict.to_string(),
    }
}

pub fn check(input: &Path, ring: bool, cfg: &SketchCfg, out: Option<&Path>) -> Result<Value> {
    let parsed: CheckInput = read_json(input)?;
    tracing::info!(input = %input.display(), vertices = parsed.vertices.len(), ring, "check");
    let result = serde_json::to_value(check_output(&parsed, ring, cfg))?;
    if let Some(out) = out {
        let params = json!({
            "command": "check",
            "input": input.to_string_lossy(),
            "ring": ring,
            "closing_threshold": cfg.closing_threshold,
        });
        provenance::write_result(out, &result, Payload::new(params))?;
    }
    Ok(result)
}

pub fn contains(input: &Path, rule: FillRule, out: Option<&Path>) -> Result<Value> {
    let parsed: ContainsInput = read_json(input)?;
    tracing::info!(input = %input.display(), rule = ?rule, "contains");
    let result = serde_json::to_value(contains_output(&parsed, rule))?;
    if let Some(out) = out {
        let params = json!({
            "command": "contains",
            "input": input.to_string_lossy(),
            "rule": format!("{rule:?}"),
        });
        provenance::write_result(out, &result, Payload::new(params))?;
    }
    Ok(result)
}

pub fn report() -> Value {
    json!({
        "version": polyfence::VERSION,
        "code_rev": provenance::current_git_rev(),
        "closing_threshold": geom2::CLOSING_THRESHOLD,
    })
}
