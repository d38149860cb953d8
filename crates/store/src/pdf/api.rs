//! PDF Export Public API

use super::options::PdfExportOptions;
use super::writer::{PdfDocumentWriter, PdfError, Result};
use render_model::PageRender;
use std::path::Path;

/// Export render pages to PDF bytes in memory
pub fn export_pdf_bytes(pages: &[PageRender], options: PdfExportOptions) -> Result<Vec<u8>> {
    validate_pages(pages)?;
    PdfDocumentWriter::new(options).write_to_bytes(pages)
}

/// Export render pages to a PDF file
///
/// The document is fully serialized in memory first, then written to a
/// temporary file beside `path` and renamed into place, so a failed export
/// never leaves a truncated file behind.
pub fn export_pdf(pages: &[PageRender], path: impl AsRef<Path>, options: PdfExportOptions) -> Result<u64> {
    let path = path.as_ref();
    let bytes = export_pdf_bytes(pages, options)?;
    crate::write_atomic(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "PDF exported");
    Ok(bytes.len() as u64)
}

/// Validate that pages can be exported to PDF
pub fn validate_pages(pages: &[PageRender]) -> Result<()> {
    if pages.is_empty() {
        return Err(PdfError::InvalidDocument("No pages to export".to_string()));
    }

    for (i, page) in pages.iter().enumerate() {
        if !(page.width > 0.0 && page.width.is_finite()) {
            return Err(PdfError::InvalidDocument(format!(
                "Page {} has invalid width: {}",
                i, page.width
            )));
        }
        if !(page.height > 0.0 && page.height.is_finite()) {
            return Err(PdfError::InvalidDocument(format!(
                "Page {} has invalid height: {}",
                i, page.height
            )));
        }
    }

    Ok(())
}
