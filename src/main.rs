use std::env;
use std::path::Path;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use favicrop::{JobStatus, config::BatchConfig, run_batch};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        error!("Usage: favicrop <manifest.json>");
        std::process::exit(2);
    }

    let manifest_path = Path::new(&args[1]);
    let config = match BatchConfig::read_config(manifest_path) {
        Ok(config) => config,
        Err(err) => {
            error!("Couldn't read manifest {}: {}", manifest_path.display(), err);
            std::process::exit(2);
        }
    };

    info!("Processing {} favicon source(s)", config.jobs.len());

    let summary = run_batch(&config);

    for result in &summary.results {
        match &result.status {
            JobStatus::Completed(report) => {
                for file in &report.sized {
                    info!("Created: {}", file.path.display());
                }
                info!("Primary favicon created: {}", report.primary.display());
            }
            JobStatus::SkippedMissing => {
                warn!("File not found, skipping: {}", result.job.input.display());
            }
            JobStatus::Failed(err) => {
                error!("Error processing {}: {}", result.job.input.display(), err);
            }
        }
    }

    info!(
        "Processing finished: {} completed, {} skipped, {} failed",
        summary.completed(),
        summary.skipped(),
        summary.failed()
    );
}
