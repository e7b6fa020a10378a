mod config;
mod submission;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use config::PredictorConfig;
use scoring::Pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = PredictorConfig::load()?;

    // Artifacts load once; a missing file halts before any submission is
    // read.
    let pipeline = match Pipeline::load(
        &config.baseline_path,
        &config.model_path,
        &config.label_column,
    ) {
        Ok(pipeline) => pipeline,
        Err(err) => {
            error!(%err, "artifact load failed, refusing submissions");
            return Err(err.into());
        }
    };

    info!(
        baseline = %config.baseline_path.display(),
        baseline_rows = pipeline.baseline_rows(),
        model = %config.model_path.display(),
        model_id = %pipeline.classifier().model_id,
        model_version = %pipeline.classifier().model_version,
        "gradguard predictor started"
    );

    let input: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => Box::new(BufReader::new(File::open(&path).with_context(|| {
            format!("failed opening submissions file {path}")
        })?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut accepted = 0usize;
    let mut rejected = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed reading submission input")?;
        if line.trim().is_empty() {
            continue;
        }

        match submission::evaluate(&pipeline, &line) {
            Ok(response) => {
                accepted += 1;
                serde_json::to_writer(&mut out, &response).context("failed writing response")?;
                out.write_all(b"\n").context("failed writing response")?;
            }
            Err(err) => {
                rejected += 1;
                warn!(line = index + 1, %err, "submission rejected");
                serde_json::to_writer(&mut out, &submission::rejection(&err))
                    .context("failed writing response")?;
                out.write_all(b"\n").context("failed writing response")?;
            }
        }
    }

    info!(accepted, rejected, "gradguard predictor stopped");
    Ok(())
}
