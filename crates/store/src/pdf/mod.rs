//! PDF Export Module
//!
//! Serializes the render model (`PageRender`, `RenderItem`) into PDF files.
//!
//! # Architecture
//!
//! - `objects`: PDF object model (Dictionary, Array, Stream, Reference)
//! - `document`: Catalog, page tree, pages and the info dictionary
//! - `content`: Content stream operators
//! - `fonts`: Standard Type1 fonts and WinAnsi text encoding
//! - `renderer`: Converts `PageRender` items to content streams
//! - `writer`: Object numbering, cross-reference table and trailer
//! - `options`: PDF export configuration
//! - `api`: Public API for PDF export

mod api;
mod content;
mod document;
mod fonts;
mod objects;
mod options;
mod renderer;
mod writer;

pub use api::*;
pub use document::PdfVersion;
pub use options::*;
pub use writer::PdfError;

#[cfg(test)]
mod tests;
