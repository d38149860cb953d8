//! PDF Writer
//!
//! File structure and serialization:
//! - Header with a binary marker comment
//! - Indirect objects, with byte offsets recorded as they are written
//! - Cross-reference table, trailer, `startxref` and `%%EOF`
//! - Optional Flate compression of content streams

use super::document::{self, DocumentInfo, MediaBox, PdfVersion};
use super::objects::{ObjectId, PdfDictionary, PdfObject, PdfStream};
use super::options::PdfExportOptions;
use super::renderer::PdfRenderer;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use render_model::PageRender;
use std::io::{self, Write};
use thiserror::Error;

/// Error type for PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Compression error: {0}")]
    Compression(String),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

const PRODUCER: &str = "math-worksheets PDF writer";

/// Low-level writer tracking object numbers and offsets
pub struct PdfWriter<W: Write> {
    out: W,
    position: u64,
    /// Byte offset of each object, indexed by object number - 1
    offsets: Vec<Option<u64>>,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(out: W, compress: bool) -> Self {
        Self {
            out,
            position: 0,
            offsets: Vec::new(),
            compress,
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.out.write_all(bytes)?;
        self.position += bytes.len() as u64;
        Ok(())
    }

    /// Reserve the next object number
    pub fn allocate(&mut self) -> ObjectId {
        self.offsets.push(None);
        ObjectId(self.offsets.len() as u32)
    }

    pub fn write_header(&mut self, version: PdfVersion) -> Result<()> {
        self.write_bytes(format!("%PDF-{}\n", version.as_str()).as_bytes())?;
        self.write_bytes(b"%\xE2\xE3\xCF\xD3\n")
    }

    fn begin_object(&mut self, id: ObjectId) -> Result<()> {
        let slot = id
            .0
            .checked_sub(1)
            .and_then(|i| self.offsets.get_mut(i as usize))
            .ok_or_else(|| PdfError::InvalidDocument(format!("object {} was never allocated", id.0)))?;
        if slot.is_some() {
            return Err(PdfError::InvalidDocument(format!("object {} written twice", id.0)));
        }
        *slot = Some(self.position);
        self.write_bytes(format!("{} 0 obj\n", id.0).as_bytes())
    }

    /// Write a direct object as indirect object `id`
    pub fn write_object(&mut self, id: ObjectId, object: &PdfObject) -> Result<()> {
        self.begin_object(id)?;
        self.write_bytes(&object.to_bytes())?;
        self.write_bytes(b"\nendobj\n")
    }

    /// Write a stream as indirect object `id`, compressing it when enabled
    pub fn write_stream(&mut self, id: ObjectId, mut stream: PdfStream) -> Result<()> {
        if self.compress {
            stream.data = deflate(&stream.data)?;
            stream.dict.set("Filter", PdfObject::name("FlateDecode"));
        }

        let mut encoded = Vec::with_capacity(stream.data.len() + 64);
        stream.encode(&mut encoded);

        self.begin_object(id)?;
        self.write_bytes(&encoded)?;
        self.write_bytes(b"\nendobj\n")
    }

    /// Write the cross-reference table and trailer, then flush
    pub fn finish(mut self, root: ObjectId, info: Option<ObjectId>) -> Result<W> {
        let xref_offset = self.position;
        let size = self.offsets.len() + 1;

        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", size);
        for (i, offset) in self.offsets.iter().enumerate() {
            let offset = offset.ok_or_else(|| {
                PdfError::InvalidDocument(format!("object {} was allocated but never written", i + 1))
            })?;
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        self.write_bytes(xref.as_bytes())?;

        let mut trailer = PdfDictionary::new().with("Size", size).with("Root", root);
        if let Some(info) = info {
            trailer.set("Info", info);
        }
        self.write_bytes(b"trailer\n")?;
        self.write_bytes(&PdfObject::from(trailer).to_bytes())?;
        self.write_bytes(format!("\nstartxref\n{}\n%%EOF\n", xref_offset).as_bytes())?;

        self.out.flush()?;
        Ok(self.out)
    }
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| PdfError::Compression(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| PdfError::Compression(e.to_string()))
}

/// Writes complete documents from rendered pages
pub struct PdfDocumentWriter {
    options: PdfExportOptions,
}

impl PdfDocumentWriter {
    pub fn new(options: PdfExportOptions) -> Self {
        Self { options }
    }

    fn document_info(&self) -> DocumentInfo {
        DocumentInfo {
            title: self.options.title.clone(),
            author: self.options.author.clone(),
            subject: self.options.subject.clone(),
            keywords: self.options.keywords.clone(),
            creator: Some(PRODUCER.to_string()),
            producer: Some(PRODUCER.to_string()),
            creation_date: self.options.include_creation_date.then(chrono::Local::now),
        }
    }

    /// Write a complete PDF document for `pages`
    ///
    /// Object layout: catalog, page tree, info, fonts, then a page object
    /// followed by its content stream for every page.
    pub fn write<W: Write>(&self, pages: &[PageRender], out: W) -> Result<W> {
        if pages.is_empty() {
            return Err(PdfError::InvalidDocument("No pages to export".to_string()));
        }

        // Render first so the font set is known before objects are numbered
        let mut renderer = PdfRenderer::new();
        let contents: Vec<_> = pages.iter().map(|page| renderer.render_page(page)).collect();

        let mut pdf = PdfWriter::new(out, self.options.compress);
        pdf.write_header(self.options.pdf_version)?;

        let catalog_id = pdf.allocate();
        let pages_id = pdf.allocate();
        let info_id = pdf.allocate();
        let font_ids: Vec<ObjectId> = renderer.fonts().fonts().map(|_| pdf.allocate()).collect();
        let page_ids: Vec<(ObjectId, ObjectId)> = pages
            .iter()
            .map(|_| (pdf.allocate(), pdf.allocate()))
            .collect();

        pdf.write_object(catalog_id, &document::catalog(pages_id).into())?;
        let kids: Vec<ObjectId> = page_ids.iter().map(|(page, _)| *page).collect();
        pdf.write_object(pages_id, &document::page_tree(&kids).into())?;
        pdf.write_object(info_id, &self.document_info().to_dictionary().into())?;

        for ((_, font), id) in renderer.fonts().fonts().zip(&font_ids) {
            pdf.write_object(*id, &font.dictionary().into())?;
        }

        let font_resources = renderer.fonts().resource_dictionary(&font_ids);
        for ((page, content), (page_id, content_id)) in pages.iter().zip(contents).zip(&page_ids) {
            let media_box = MediaBox::new(page.width, page.height);
            let dict = document::page(pages_id, media_box, font_resources.clone(), *content_id);
            pdf.write_object(*page_id, &dict.into())?;
            pdf.write_stream(*content_id, PdfStream::new(content.into_bytes()))?;
        }

        let out = pdf.finish(catalog_id, Some(info_id))?;
        tracing::debug!(pages = pages.len(), fonts = font_ids.len(), "PDF document written");
        Ok(out)
    }

    /// Write a complete PDF document into memory
    pub fn write_to_bytes(&self, pages: &[PageRender]) -> Result<Vec<u8>> {
        self.write(pages, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritten_object_is_rejected() {
        let mut pdf = PdfWriter::new(Vec::new(), false);
        let root = pdf.allocate();
        let _orphan = pdf.allocate();
        pdf.write_object(root, &PdfObject::Null).unwrap();
        assert!(matches!(pdf.finish(root, None), Err(PdfError::InvalidDocument(_))));
    }

    #[test]
    fn test_double_write_is_rejected() {
        let mut pdf = PdfWriter::new(Vec::new(), false);
        let id = pdf.allocate();
        pdf.write_object(id, &PdfObject::Null).unwrap();
        assert!(pdf.write_object(id, &PdfObject::Null).is_err());
        assert!(pdf.write_object(ObjectId(9), &PdfObject::Null).is_err());
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        // No header: its binary marker would shift offsets in a lossy string
        let mut pdf = PdfWriter::new(Vec::new(), false);
        let a = pdf.allocate();
        let b = pdf.allocate();
        pdf.write_object(b, &PdfObject::Integer(2)).unwrap();
        pdf.write_object(a, &PdfObject::Integer(1)).unwrap();
        let bytes = pdf.finish(a, None).unwrap();

        let text = String::from_utf8(bytes).unwrap();
        let xref = text.find("xref\n").unwrap();
        let entries: Vec<usize> = text[xref..]
            .lines()
            .skip(3)
            .take(2)
            .map(|line| line[..10].parse().unwrap())
            .collect();
        assert!(text[entries[0]..].starts_with("1 0 obj"));
        assert!(text[entries[1]..].starts_with("2 0 obj"));
        assert!(text.ends_with("%%EOF\n"));
    }

    #[test]
    fn test_compressed_stream() {
        let mut pdf = PdfWriter::new(Vec::new(), true);
        let id = pdf.allocate();
        pdf.write_stream(id, PdfStream::new(b"BT ET".repeat(50))).unwrap();
        let bytes = pdf.finish(id, None).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Filter /FlateDecode"));
        assert!(!text.contains("BT ET"));
    }
}
