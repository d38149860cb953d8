//! Worksheet rendering
//!
//! Lays out a list of formatted problems, converts the layout to render
//! items, and writes the result as a PDF artifact.

use crate::pdf::{export_pdf, PdfError, PdfExportOptions};
use crate::{Result, StoreError};
use layout_engine::{PageConfig, Paginator, SheetStyle};
use render_model::{RenderConfig, RenderConverter};
use serde::Serialize;
use std::path::{Path, PathBuf};
use worksheet_model::WorksheetConfig;

/// Everything that controls how a worksheet looks on paper
#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub page: PageConfig,
    pub sheet: SheetStyle,
    pub render: RenderConfig,
    pub pdf: PdfExportOptions,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_config(&WorksheetConfig::default())
    }
}

impl RenderStyle {
    /// US Letter worksheet style for a configuration
    pub fn from_config(config: &WorksheetConfig) -> Self {
        Self {
            page: PageConfig::letter(),
            sheet: SheetStyle::from_config(config),
            render: RenderConfig::default(),
            pdf: PdfExportOptions::new()
                .with_title(config.title.clone())
                .with_subject("Addition and subtraction practice")
                .with_keywords(vec!["math".to_string(), "worksheet".to_string()]),
        }
    }

    pub fn with_pdf_options(mut self, pdf: PdfExportOptions) -> Self {
        self.pdf = pdf;
        self
    }

    pub fn with_sheet(mut self, sheet: SheetStyle) -> Self {
        self.sheet = sheet;
        self
    }
}

/// Outcome of rendering one worksheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSummary {
    pub path: PathBuf,
    pub page_count: usize,
    pub byte_size: u64,
}

/// Render `problems` as a worksheet PDF at `output_target`
///
/// The artifact is written atomically: it either appears complete or not at
/// all. I/O failures surface as [`StoreError::Write`].
pub fn render_worksheet<S: AsRef<str>>(
    output_target: &Path,
    problems: &[S],
    style: &RenderStyle,
) -> Result<RenderSummary> {
    let paginator = Paginator::new(style.page.clone(), style.sheet.clone())?;
    let layout = paginator.layout(problems)?;
    let model = RenderConverter::new(style.render.clone()).convert(&layout)?;

    let byte_size = export_pdf(&model.pages, output_target, style.pdf.clone()).map_err(|e| match e {
        PdfError::Io(source) => StoreError::Write {
            path: output_target.to_path_buf(),
            source,
        },
        other => StoreError::Pdf(other),
    })?;

    tracing::info!(
        path = %output_target.display(),
        pages = layout.page_count(),
        bytes = byte_size,
        "worksheet rendered"
    );

    Ok(RenderSummary {
        path: output_target.to_path_buf(),
        page_count: layout.page_count(),
        byte_size,
    })
}
