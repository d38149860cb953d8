//! Math Worksheets - Batch generator for printable arithmetic worksheets

mod batch;

use anyhow::{bail, Context, Result};
use batch::run_batch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use worksheet_model::WorksheetConfig;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = WorksheetConfig::default();
    config.validate().context("invalid worksheet configuration")?;

    let out_dir = std::env::current_dir().context("cannot determine output directory")?;
    tracing::info!(dir = %out_dir.display(), worksheets = config.num_worksheets, "starting batch");

    let summary = run_batch(&config, &out_dir, &mut rand::thread_rng());

    if summary.is_success() {
        println!(
            "\nAll {} worksheets have been successfully generated.",
            summary.total()
        );
        return Ok(());
    }

    eprintln!(
        "\n{} of {} worksheets failed:",
        summary.failed.len(),
        summary.total()
    );
    for failure in &summary.failed {
        eprintln!("  {}", failure);
    }
    bail!("{} worksheet(s) could not be generated", summary.failed.len())
}
