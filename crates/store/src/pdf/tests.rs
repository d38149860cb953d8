//! End-to-end tests for PDF export

use super::*;
use layout_engine::{PageConfig, Paginator, SheetStyle};
use proptest::prelude::*;
use render_model::{Color, GlyphRun, PageRender, Rect, RenderConverter, RenderItem};
use tempfile::TempDir;

fn glyph(text: &str, family: &str, bold: bool, y: f64) -> RenderItem {
    RenderItem::GlyphRun(GlyphRun {
        text: text.to_string(),
        font_family: family.to_string(),
        font_size: 16.0,
        bold,
        color: Color::BLACK,
        x: 72.0,
        y,
    })
}

fn basic_page(index: u32) -> PageRender {
    let mut page = PageRender::new(index, 612.0, 792.0);
    page.items.push(glyph(" 3 +  4 = _____", "Helvetica", true, 100.0));
    page
}

fn worksheet_pages(problems: usize) -> Vec<PageRender> {
    let items: Vec<String> = (0..problems)
        .map(|i| format!("{:>2} - {:>2} = _____", 10 + i % 11, i % 9 + 1))
        .collect();
    let layout = Paginator::new(PageConfig::letter(), SheetStyle::default())
        .unwrap()
        .layout(&items)
        .unwrap();
    RenderConverter::default().convert(&layout).unwrap().pages
}

fn plain() -> PdfExportOptions {
    PdfExportOptions::new()
        .with_compression(false)
        .without_creation_date()
}

fn as_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Byte offsets listed in the cross-reference table
fn xref_offsets(bytes: &[u8]) -> Vec<usize> {
    let text = as_text(bytes);
    let start = text.rfind("startxref\n").unwrap();
    let xref_at: usize = text[start + 10..].lines().next().unwrap().parse().unwrap();

    let table = &bytes[xref_at..];
    let table = as_text(table);
    let mut lines = table.lines();
    assert_eq!(lines.next(), Some("xref"));
    let count: usize = lines.next().unwrap().split(' ').nth(1).unwrap().parse().unwrap();
    lines
        .skip(1)
        .take(count - 1)
        .map(|line| line[..10].parse().unwrap())
        .collect()
}

#[test]
fn test_export_basic_pdf() {
    let bytes = export_pdf_bytes(&[basic_page(0)], PdfExportOptions::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4\n"));
    assert!(bytes.ends_with(b"%%EOF\n"));
}

#[test]
fn test_document_structure() {
    let text = as_text(&export_pdf_bytes(&[basic_page(0)], plain()).unwrap());

    assert!(text.contains("/Type /Catalog"));
    assert!(text.contains("/Type /Pages"));
    assert!(text.contains("/MediaBox [0 0 612 792]"));
    assert!(text.contains("/BaseFont /Helvetica-Bold"));
    assert!(text.contains("/Encoding /WinAnsiEncoding"));
    assert!(text.contains("( 3 +  4 = _____) Tj"));
    assert!(text.contains("/Producer (math-worksheets PDF writer)"));
    assert!(!text.contains("/CreationDate"));
}

#[test]
fn test_xref_offsets_point_at_objects() {
    let bytes = export_pdf_bytes(&worksheet_pages(30), PdfExportOptions::default()).unwrap();
    let offsets = xref_offsets(&bytes);
    assert!(!offsets.is_empty());

    for (i, offset) in offsets.iter().enumerate() {
        let header = format!("{} 0 obj", i + 1);
        assert!(
            bytes[*offset..].starts_with(header.as_bytes()),
            "xref entry {} does not point at its object",
            i + 1
        );
    }
}

#[test]
fn test_metadata() {
    let options = plain()
        .with_title("Worksheet 3")
        .with_author("Math Worksheets")
        .with_subject("Arithmetic")
        .with_keywords(vec!["addition".to_string(), "subtraction".to_string()]);
    let text = as_text(&export_pdf_bytes(&[basic_page(0)], options).unwrap());

    assert!(text.contains("/Title (Worksheet 3)"));
    assert!(text.contains("/Author (Math Worksheets)"));
    assert!(text.contains("/Subject (Arithmetic)"));
    assert!(text.contains("/Keywords (addition, subtraction)"));
    assert!(text.contains("/Info 3 0 R"));
}

#[test]
fn test_creation_date_is_stamped() {
    let text = as_text(&export_pdf_bytes(&[basic_page(0)], PdfExportOptions::default()).unwrap());
    assert!(text.contains("/CreationDate (D:"));
}

#[test]
fn test_multiple_pages_and_fonts() {
    let mut second = basic_page(1);
    second.items.push(glyph("Page 2", "Courier", false, 200.0));
    let pages = vec![basic_page(0), second, basic_page(2)];

    let text = as_text(&export_pdf_bytes(&pages, plain()).unwrap());
    assert!(text.contains("/Count 3"));
    assert!(text.contains("/BaseFont /Courier"));
    assert_eq!(text.matches("/Type /Font").count(), 2);
}

#[test]
fn test_compression() {
    let pages = worksheet_pages(100);
    let compressed = export_pdf_bytes(&pages, PdfExportOptions::default()).unwrap();
    let uncompressed = export_pdf_bytes(&pages, plain()).unwrap();

    assert!(compressed.len() < uncompressed.len());
    assert!(as_text(&compressed).contains("/Filter /FlateDecode"));
    assert!(!as_text(&uncompressed).contains("/Filter"));
    assert!(as_text(&uncompressed).contains("BT\n"));
}

#[test]
fn test_same_input_same_bytes() {
    let pages = worksheet_pages(20);
    let a = export_pdf_bytes(&pages, plain()).unwrap();
    let b = export_pdf_bytes(&pages, plain()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_worksheet_page_count() {
    let text = as_text(&export_pdf_bytes(&worksheet_pages(100), plain()).unwrap());
    assert!(text.contains("/Count 5"));
    assert_eq!(text.matches("/Type /Page ").count(), 5);
    // One text run per problem plus the title
    assert_eq!(text.matches(") Tj").count(), 101);
}

#[test]
fn test_rectangles_are_painted() {
    let mut page = basic_page(0);
    page.items.push(RenderItem::Rectangle {
        bounds: Rect::new(72.0, 200.0, 200.0, 100.0),
        fill: Some(Color::WHITE),
        stroke: Some(Color::BLACK),
        stroke_width: 1.0,
    });
    let text = as_text(&export_pdf_bytes(&[page], plain()).unwrap());
    assert!(text.contains("72 492 200 100 re\nB"));
}

#[test]
fn test_version_option() {
    let bytes = export_pdf_bytes(&[basic_page(0)], plain().with_pdf_version(PdfVersion::V1_7)).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.7"));
}

#[test]
fn test_validate_pages() {
    assert!(validate_pages(&[]).is_err());
    assert!(validate_pages(&[PageRender::new(0, 0.0, 792.0)]).is_err());
    assert!(validate_pages(&[PageRender::new(0, 612.0, f64::NAN)]).is_err());
    assert!(validate_pages(&[basic_page(0)]).is_ok());

    assert!(matches!(
        export_pdf_bytes(&[], PdfExportOptions::default()),
        Err(PdfError::InvalidDocument(_))
    ));
}

#[test]
fn test_export_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sheet.pdf");

    let size = export_pdf(&worksheet_pages(20), &path, PdfExportOptions::default()).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len() as u64, size);
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_export_into_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("sheet.pdf");

    let err = export_pdf(&[basic_page(0)], &path, PdfExportOptions::default()).unwrap_err();
    assert!(matches!(err, PdfError::Io(_)));
    assert!(!path.exists());
}

#[test]
fn test_invalid_pages_leave_no_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sheet.pdf");

    assert!(export_pdf(&[], &path, PdfExportOptions::default()).is_err());
    assert!(!path.exists());
}

proptest! {
    #[test]
    fn prop_page_count_matches_layout(n in 0usize..160) {
        let pages = worksheet_pages(n);
        let text = as_text(&export_pdf_bytes(&pages, plain()).unwrap());
        let expected = format!("/Count {}", pages.len());
        prop_assert!(text.contains(&expected));
        prop_assert!(text.ends_with("%%EOF\n"));
    }
}
