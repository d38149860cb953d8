//! Render Model to PDF Conversion
//!
//! Converts `render_model::PageRender` items into page content streams.
//! Render coordinates have their origin at the top-left of the page; PDF
//! user space has it at the bottom-left, so every y coordinate is flipped.

use super::content::ContentStream;
use super::fonts::{encode_win_ansi, FontRegistry, StandardFont};
use render_model::{Color, GlyphRun, PageRender, Rect, RenderItem};

/// Color channel scaled to the 0..1 range PDF operators expect
fn channel(value: u8) -> f64 {
    value as f64 / 255.0
}

fn rgb(color: Color) -> (f64, f64, f64) {
    (channel(color.r), channel(color.g), channel(color.b))
}

/// Flip a top-left y coordinate into PDF user space
pub fn to_pdf_y(page_height: f64, y: f64) -> f64 {
    page_height - y
}

/// Renders pages and records the fonts they use
#[derive(Debug, Default)]
pub struct PdfRenderer {
    fonts: FontRegistry,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fonts referenced by every page rendered so far
    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Render one page to a content stream
    ///
    /// Graphics are painted first so text always sits on top of cell
    /// backgrounds and borders.
    pub fn render_page(&mut self, page: &PageRender) -> ContentStream {
        let mut content = ContentStream::new();

        for item in &page.items {
            if let RenderItem::Rectangle {
                bounds,
                fill,
                stroke,
                stroke_width,
            } = item
            {
                render_rectangle(&mut content, page.height, bounds, *fill, *stroke, *stroke_width);
            }
        }

        let runs: Vec<&GlyphRun> = page.glyph_runs().collect();
        if !runs.is_empty() {
            content.begin_text();
            let mut current_font: Option<(String, f64)> = None;
            let mut current_color: Option<Color> = None;

            for run in runs {
                let font = StandardFont::for_family(&run.font_family, run.bold);
                let resource = self.fonts.resource_name(font);
                if current_font.as_ref() != Some(&(resource.clone(), run.font_size)) {
                    content.set_font(&resource, run.font_size);
                    current_font = Some((resource, run.font_size));
                }
                if current_color != Some(run.color) {
                    let (r, g, b) = rgb(run.color);
                    content.set_fill_rgb(r, g, b);
                    current_color = Some(run.color);
                }

                content
                    .set_text_position(run.x, to_pdf_y(page.height, run.y))
                    .show_text(&encode_win_ansi(&run.text));
            }
            content.end_text();
        }

        content
    }
}

fn render_rectangle(
    content: &mut ContentStream,
    page_height: f64,
    bounds: &Rect,
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: f64,
) {
    if fill.is_none() && stroke.is_none() {
        return;
    }

    content.save_state();
    if let Some(color) = fill {
        let (r, g, b) = rgb(color);
        content.set_fill_rgb(r, g, b);
    }
    if let Some(color) = stroke {
        let (r, g, b) = rgb(color);
        content.set_stroke_rgb(r, g, b).set_line_width(stroke_width);
    }

    // Lower-left corner in PDF space is the rectangle's bottom edge
    let y = to_pdf_y(page_height, bounds.y + bounds.height);
    content.rectangle(bounds.x, y, bounds.width, bounds.height);

    match (fill.is_some(), stroke.is_some()) {
        (true, true) => content.fill_and_stroke(),
        (true, false) => content.fill(),
        _ => content.stroke(),
    };
    content.restore_state();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, size: f64, bold: bool, x: f64, y: f64) -> RenderItem {
        RenderItem::GlyphRun(GlyphRun {
            text: text.to_string(),
            font_family: "Helvetica".to_string(),
            font_size: size,
            bold,
            color: Color::BLACK,
            x,
            y,
        })
    }

    fn rendered(page: &PageRender) -> (String, PdfRenderer) {
        let mut renderer = PdfRenderer::new();
        let content = renderer.render_page(page);
        (String::from_utf8(content.into_bytes()).unwrap(), renderer)
    }

    #[test]
    fn test_text_y_is_flipped() {
        let mut page = PageRender::new(0, 612.0, 792.0);
        page.items.push(run("Title", 18.0, true, 100.0, 54.0));

        let (text, renderer) = rendered(&page);
        assert!(text.contains("1 0 0 1 100 738 Tm\n(Title) Tj"));
        assert_eq!(renderer.fonts().len(), 1);
    }

    #[test]
    fn test_font_switches_only_when_needed() {
        let mut page = PageRender::new(0, 612.0, 792.0);
        page.items.push(run("Title", 18.0, true, 0.0, 50.0));
        page.items.push(run("a", 16.0, true, 0.0, 100.0));
        page.items.push(run("b", 16.0, true, 0.0, 150.0));

        let (text, _) = rendered(&page);
        assert_eq!(text.matches(" Tf").count(), 2);
        assert_eq!(text.matches(" rg").count(), 1);
        assert_eq!(text.matches("BT").count(), 1);
    }

    #[test]
    fn test_rectangle_painted_before_text() {
        let mut page = PageRender::new(0, 612.0, 792.0);
        page.items.push(run("x", 12.0, false, 0.0, 100.0));
        page.items.push(RenderItem::Rectangle {
            bounds: Rect::new(10.0, 20.0, 100.0, 50.0),
            fill: None,
            stroke: Some(Color::LIGHT_GRAY),
            stroke_width: 0.5,
        });

        let (text, _) = rendered(&page);
        let rect_at = text.find(" re").unwrap();
        let text_at = text.find("BT").unwrap();
        assert!(rect_at < text_at);
        assert!(text.contains("10 722 100 50 re\nS"));
    }

    #[test]
    fn test_unpainted_rectangle_is_skipped() {
        let mut page = PageRender::new(0, 612.0, 792.0);
        page.items.push(RenderItem::Rectangle {
            bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
            fill: None,
            stroke: None,
            stroke_width: 1.0,
        });
        let (text, _) = rendered(&page);
        assert!(text.is_empty());
    }

    #[test]
    fn test_blank_page_has_empty_stream() {
        let (text, renderer) = rendered(&PageRender::new(0, 612.0, 792.0));
        assert!(text.is_empty());
        assert!(renderer.fonts().is_empty());
    }
}
