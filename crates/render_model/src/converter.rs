//! Convert layout tree to render model

use crate::{Color, GlyphRun, PageRender, Rect, RenderError, RenderItem, RenderModel, Result};
use layout_engine::{LayoutTree, PageBox, TextLine};

/// Configuration for render conversion
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Text color
    pub text_color: Color,
    /// Stroke each table cell (off for printed worksheets)
    pub draw_cell_borders: bool,
    pub border_color: Color,
    pub border_width: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            text_color: Color::BLACK,
            draw_cell_borders: false,
            border_color: Color::LIGHT_GRAY,
            border_width: 0.5,
        }
    }
}

/// Converts layout tree to render model
pub struct RenderConverter {
    config: RenderConfig,
}

impl Default for RenderConverter {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl RenderConverter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Convert a layout tree to a render model
    pub fn convert(&self, layout: &LayoutTree) -> Result<RenderModel> {
        if layout.pages.is_empty() {
            return Err(RenderError::InvalidLayout("layout has no pages".to_string()));
        }

        let mut model = RenderModel::new();
        for page in &layout.pages {
            model.add_page(self.convert_page(page)?);
        }
        Ok(model)
    }

    fn convert_page(&self, page: &PageBox) -> Result<PageRender> {
        if page.bounds.width <= 0.0 || page.bounds.height <= 0.0 {
            return Err(RenderError::InvalidLayout(format!(
                "page {} has empty bounds",
                page.index
            )));
        }

        let mut render = PageRender::new(
            page.index as u32,
            page.bounds.width as f64,
            page.bounds.height as f64,
        );

        if let Some(title) = &page.title {
            render.items.push(self.glyph_run(page, title)?);
        }

        for row in &page.rows {
            for cell in &row.cells {
                if self.config.draw_cell_borders {
                    render.items.push(RenderItem::Rectangle {
                        bounds: Rect::from(cell.bounds),
                        fill: None,
                        stroke: Some(self.config.border_color),
                        stroke_width: self.config.border_width,
                    });
                }
                if let Some(text) = &cell.text {
                    render.items.push(self.glyph_run(page, text)?);
                }
            }
        }

        Ok(render)
    }

    fn glyph_run(&self, page: &PageBox, line: &TextLine) -> Result<RenderItem> {
        if line.baseline < 0.0 || line.baseline > page.bounds.height {
            return Err(RenderError::InvalidLayout(format!(
                "text {:?} has baseline {} outside page {}",
                line.text, line.baseline, page.index
            )));
        }

        Ok(RenderItem::GlyphRun(GlyphRun {
            text: line.text.clone(),
            font_family: line.font.family.clone(),
            font_size: line.font.size as f64,
            bold: line.font.bold,
            color: self.config.text_color,
            x: line.x as f64,
            y: line.baseline as f64,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_engine::{PageConfig, Paginator, SheetStyle};
    use proptest::prelude::*;

    fn layout(n: usize) -> LayoutTree {
        let problems: Vec<String> = (0..n).map(|i| format!("{:>2} +  1 = _____", i % 19 + 1)).collect();
        Paginator::new(PageConfig::letter(), SheetStyle::default())
            .unwrap()
            .layout(&problems)
            .unwrap()
    }

    #[test]
    fn test_convert_full_worksheet() {
        let model = RenderConverter::default().convert(&layout(100)).unwrap();
        assert_eq!(model.page_count(), 5);
        assert_eq!(model.pages[0].glyph_runs().count(), 21);
        assert_eq!(model.pages[1].glyph_runs().count(), 20);
        assert!(model
            .pages
            .iter()
            .all(|p| p.width == 612.0 && p.height == 792.0));
    }

    #[test]
    fn test_title_is_first_item() {
        let model = RenderConverter::default().convert(&layout(2)).unwrap();
        let first = model.pages[0].glyph_runs().next().unwrap();
        assert_eq!(first.text, "Simple Addition and Subtraction Worksheet");
        assert_eq!(first.font_size, 18.0);
        assert!(first.bold);
    }

    #[test]
    fn test_empty_cell_has_no_text() {
        let model = RenderConverter::default().convert(&layout(1)).unwrap();
        // Title plus the single problem
        assert_eq!(model.pages[0].glyph_runs().count(), 2);
    }

    #[test]
    fn test_cell_borders() {
        let converter = RenderConverter::new(RenderConfig {
            draw_cell_borders: true,
            ..RenderConfig::default()
        });
        let model = converter.convert(&layout(3)).unwrap();
        let rects = model.pages[0]
            .items
            .iter()
            .filter(|item| matches!(item, RenderItem::Rectangle { .. }))
            .count();
        assert_eq!(rects, 4);
    }

    #[test]
    fn test_empty_layout_is_invalid() {
        let err = RenderConverter::default().convert(&LayoutTree::new()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidLayout(_)));
    }

    #[test]
    fn test_baseline_outside_page_is_invalid() {
        let mut tree = layout(2);
        tree.pages[0].rows[0].cells[0].text.as_mut().unwrap().baseline = 900.0;
        assert!(RenderConverter::default().convert(&tree).is_err());
    }

    proptest! {
        #[test]
        fn prop_one_run_per_problem(n in 0usize..120) {
            let model = RenderConverter::default().convert(&layout(n)).unwrap();
            let runs: usize = model.pages.iter().map(|p| p.glyph_runs().count()).sum();
            // Every problem plus the title
            prop_assert_eq!(runs, n + 1);
        }
    }
}
