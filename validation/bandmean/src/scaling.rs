//! Scaling study.
//!
//! Runs the benchmark harness and writes the report as JSON for an external
//! plotter. An optional first argument names a JSON `BenchmarkConfig`; any
//! field it omits keeps its default.
//!
//! ```text
//! cargo run --release --bin scaling -- config.json
//! ```

mod logging;

use bandmean::prelude::*;
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init("debug");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = path.as_str(), "loading configuration");
            serde_json::from_reader(fs::File::open(path)?)?
        }
        None => BenchmarkConfig {
            sizes: vec![256, 512, 1024, 2048, 4096],
            consistency_tolerance: Some(1e-9),
            ..BenchmarkConfig::default()
        },
    };

    let harness = BenchmarkHarness::from_config(config)?;
    let report = harness.run();
    println!("{}", report);

    let sizes = report.sizes();
    if let (Some(&first), Some(&last)) = (sizes.first(), sizes.last()) {
        for method in report.methods() {
            if let Some(exp) = report.scaling_exponent(method, first, last) {
                info!(method, exponent = exp, "empirical growth {} -> {}", first, last);
            }
        }
    }

    let output_dir = Path::new("../output/scaling");
    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("report.json");
    fs::write(&output_path, serde_json::to_string_pretty(&report)?)?;
    info!("Report written to {:?}", output_path);

    Ok(())
}
