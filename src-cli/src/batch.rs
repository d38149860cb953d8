//! Batch generation of worksheet artifacts

use rand::Rng;
use std::fmt;
use std::path::Path;
use store::{render_worksheet, RenderStyle, RenderSummary, StoreError};
use thiserror::Error;
use worksheet_model::{generate_worksheet, GenerationError, WorksheetConfig};

/// Why a single worksheet was not produced
#[derive(Debug, Error)]
pub enum WorksheetError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Render(#[from] StoreError),
}

/// A worksheet that could not be produced
#[derive(Debug)]
pub struct WorksheetFailure {
    /// 1-based worksheet index
    pub index: usize,
    pub file_name: String,
    pub error: WorksheetError,
}

impl fmt::Display for WorksheetFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "worksheet {} ({}): {}", self.index, self.file_name, self.error)
    }
}

/// Result of a batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: Vec<RenderSummary>,
    pub failed: Vec<WorksheetFailure>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Generate and render `config.num_worksheets` worksheets into `out_dir`
///
/// A failing worksheet is recorded and the run moves on to the next one.
pub fn run_batch<R: Rng + ?Sized>(config: &WorksheetConfig, out_dir: &Path, rng: &mut R) -> BatchSummary {
    let style = RenderStyle::from_config(config);
    let total = config.num_worksheets;
    let mut summary = BatchSummary::default();

    for index in 1..=total {
        println!("Generating Worksheet {} of {}...", index, total);
        let file_name = config.file_name(index);

        let result = generate_worksheet(config, rng)
            .map_err(WorksheetError::from)
            .and_then(|worksheet| {
                render_worksheet(&out_dir.join(&file_name), &worksheet.problem_strings(), &style)
                    .map_err(WorksheetError::from)
            });

        match result {
            Ok(rendered) => {
                println!("Successfully generated worksheet: {}", file_name);
                summary.succeeded.push(rendered);
            }
            Err(error) => {
                tracing::error!(index, file = %file_name, %error, "worksheet failed");
                summary.failed.push(WorksheetFailure {
                    index,
                    file_name,
                    error,
                });
            }
        }
    }

    summary
}
