//! Reference validation.
//!
//! Reads JSON cases from `../output/reference`, runs every method on each
//! case and writes the results plus the largest deviation from the reference
//! values to `../output/bandmean`. Missing values are JSON `null`.

mod logging;

use bandmean::prelude::*;
use bandmean::{EdgePolicy, Method};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    #[serde(default)]
    notes: String,
    input: InputData,
    params: Params,
    expected: Vec<Option<f64>>,
    #[serde(skip_deserializing)]
    result: Vec<MethodResult>,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    half_width: usize,
    #[serde(default)]
    edge_policy: EdgePolicy,
}

#[derive(Debug, Deserialize, Serialize)]
struct MethodResult {
    method: Method,
    fitted: Vec<Option<f64>>,
    max_abs_diff: Option<f64>,
    markers_match: bool,
}

const TOLERANCE: f64 = 1e-9;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init("info");

    let input_dir = Path::new("../output/reference");
    let output_dir = Path::new("../output/bandmean");

    if !input_dir.exists() {
        warn!(
            "Input directory {:?} does not exist. Generate reference cases first.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    let mut failures = 0usize;
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            info!("Processing {:?}", path.file_name().unwrap_or_default());
            failures += process_file(&path, output_dir)?;
        }
    }

    if failures > 0 {
        warn!(failures, "some methods deviate from the reference");
    } else {
        info!("all methods match the reference");
    }
    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<usize, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let mut failures = 0;
    for method in Method::ALL {
        let model = RunningMean::new()
            .half_width(data.params.half_width)
            .method(method)
            .edge_policy(data.params.edge_policy)
            .build()?;

        let fitted = model.smooth(&data.input.x)?.values;
        let (max_abs_diff, markers_match) = compare(&fitted, &data.expected);

        let ok = markers_match && max_abs_diff.is_none_or(|d| d <= TOLERANCE);
        if !ok {
            failures += 1;
            warn!(case = data.name.as_str(), %method, ?max_abs_diff, markers_match, "mismatch");
        }

        data.result.push(MethodResult {
            method,
            fitted,
            max_abs_diff,
            markers_match,
        });
    }

    let file_name = input_path.file_name().ok_or("input path has no file name")?;
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_dir.join(file_name), output_json)?;

    Ok(failures)
}

/// Largest deviation over positions defined in both, and whether the
/// missing markers coincide.
fn compare(fitted: &[Option<f64>], expected: &[Option<f64>]) -> (Option<f64>, bool) {
    if fitted.len() != expected.len() {
        return (None, false);
    }

    let mut max_diff: Option<f64> = None;
    let mut markers_match = true;
    for (a, b) in fitted.iter().zip(expected) {
        match (a, b) {
            (Some(a), Some(b)) => {
                let d = (a - b).abs();
                max_diff = Some(max_diff.map_or(d, |m| m.max(d)));
            }
            (None, None) => {}
            _ => markers_match = false,
        }
    }
    (max_diff, markers_match)
}
