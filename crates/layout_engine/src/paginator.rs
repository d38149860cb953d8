//! Pagination Algorithm
//!
//! Turns a flat list of formatted problems into a [`LayoutTree`].
//!
//! The problem list is first converted into a story of blocks (title, spacer,
//! one table per page chunk, explicit page breaks between chunks). The story
//! then flows top to bottom through the content area of each page:
//! - Tables split on row boundaries when a row does not fit
//! - A row taller than a whole page is an error
//! - A page break on a page that is still blank is ignored
//! - The tree always holds at least one page

use crate::{
    chunk_pages, layout_row, pair_rows, text_width, FontSpec, HAlign, LayoutError, LayoutTree,
    PageBox, PageConfig, ProblemRow, Result, TableStyle, TextLine,
};
use serde::{Deserialize, Serialize};
use worksheet_model::WorksheetConfig;

const FIT_EPSILON: f32 = 0.01;

/// Style of a standalone line of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: FontSpec,
    pub leading: f32,
    /// Extra space below the line
    pub space_after: f32,
    pub align: HAlign,
}

impl TextStyle {
    /// Vertical space the line occupies
    pub fn block_height(&self) -> f32 {
        self.leading + self.space_after
    }
}

/// Complete visual style of a worksheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetStyle {
    /// Title text printed on the first page
    pub title: String,
    pub title_style: TextStyle,
    /// Blank space between the title and the first table
    pub spacer_height: f32,
    /// Problems per page chunk
    pub problems_per_page: usize,
    pub table: TableStyle,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self::from_config(&WorksheetConfig::default())
    }
}

impl SheetStyle {
    /// Worksheet style for a configuration
    pub fn from_config(config: &WorksheetConfig) -> Self {
        Self {
            title: config.title.clone(),
            title_style: TextStyle {
                font: FontSpec::helvetica_bold(18.0),
                leading: 22.0,
                space_after: 6.0,
                align: HAlign::Center,
            },
            spacer_height: 12.0,
            problems_per_page: config.problems_per_page,
            table: TableStyle::problem_grid(),
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the chunk size
    pub fn with_problems_per_page(mut self, per_page: usize) -> Self {
        self.problems_per_page = per_page;
        self
    }

    /// Set the table style
    pub fn with_table(mut self, table: TableStyle) -> Self {
        self.table = table;
        self
    }
}

/// A unit of the story flowed onto pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutBlock {
    Title(String),
    Spacer(f32),
    Table { rows: Vec<ProblemRow> },
    PageBreak,
}

/// Flows a worksheet story onto pages
#[derive(Debug, Clone)]
pub struct Paginator {
    config: PageConfig,
    style: SheetStyle,
}

impl Paginator {
    pub fn new(config: PageConfig, style: SheetStyle) -> Result<Self> {
        config.validate()?;
        if style.problems_per_page == 0 {
            return Err(LayoutError::InvalidPageSetup(
                "problems per page must be greater than zero".to_string(),
            ));
        }
        // Rows always pair two problems
        if style.table.column_count() != 2 {
            return Err(LayoutError::InvalidPageSetup(format!(
                "problem table needs exactly 2 columns, got {}",
                style.table.column_count()
            )));
        }
        if style.table.table_width() > config.content_width() + FIT_EPSILON {
            tracing::warn!(
                table_width = style.table.table_width(),
                content_width = config.content_width(),
                "problem table is wider than the content area"
            );
        }
        Ok(Self { config, style })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn style(&self) -> &SheetStyle {
        &self.style
    }

    /// Lay out `problems` in order
    pub fn layout<S: AsRef<str>>(&self, problems: &[S]) -> Result<LayoutTree> {
        self.flow(self.build_story(problems))
    }

    /// Build the block story: title, spacer, then one table per chunk with
    /// a page break between consecutive chunks
    pub fn build_story<S: AsRef<str>>(&self, problems: &[S]) -> Vec<LayoutBlock> {
        let mut story = vec![
            LayoutBlock::Title(self.style.title.clone()),
            LayoutBlock::Spacer(self.style.spacer_height),
        ];

        for (i, chunk) in chunk_pages(problems, self.style.problems_per_page)
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                story.push(LayoutBlock::PageBreak);
            }
            story.push(LayoutBlock::Table {
                rows: pair_rows(chunk),
            });
        }

        story
    }

    /// Flow a story onto pages
    pub fn flow(&self, story: Vec<LayoutBlock>) -> Result<LayoutTree> {
        let mut state = FlowState::new(&self.config);

        for block in story {
            match block {
                LayoutBlock::Title(text) => self.place_title(&mut state, text),
                LayoutBlock::Spacer(height) => {
                    // Space at the bottom of a page is dropped, not carried over
                    if state.fits(height) {
                        state.cursor += height;
                    }
                }
                LayoutBlock::Table { rows } => self.place_table(&mut state, &rows)?,
                LayoutBlock::PageBreak => {
                    if state.page.is_blank() {
                        tracing::debug!(page = state.page.index, "ignoring page break on blank page");
                    } else {
                        state.page.break_after = true;
                        state.new_page();
                    }
                }
            }
        }

        let tree = state.finish();
        tracing::debug!(
            pages = tree.page_count(),
            rows = tree.total_rows(),
            breaks = tree.page_breaks(),
            "worksheet layout complete"
        );
        Ok(tree)
    }

    fn place_title(&self, state: &mut FlowState<'_>, text: String) {
        let style = &self.style.title_style;
        if !state.fits(style.block_height()) && !state.page.is_blank() {
            state.new_page();
        }

        let area = state.page.content_area;
        let width = text_width(&text, &style.font);
        let x = match style.align {
            HAlign::Left => area.x,
            HAlign::Center => area.x + (area.width - width) / 2.0,
            HAlign::Right => area.right() - width,
        };

        state.page.title = Some(TextLine {
            text,
            x,
            baseline: state.cursor + style.font.size,
            width,
            font: style.font.clone(),
        });
        state.cursor += style.block_height();
    }

    fn place_table(&self, state: &mut FlowState<'_>, rows: &[ProblemRow]) -> Result<()> {
        let table = &self.style.table;
        let row_height = table.row_height();
        let available = self.config.content_height();
        if row_height > available + FIT_EPSILON {
            return Err(LayoutError::RowTooTall {
                row_height,
                available,
            });
        }

        let area = self.config.content_area();
        let x = area.x + (area.width - table.table_width()) / 2.0;

        for row in rows {
            if !state.fits(row_height) {
                tracing::debug!(page = state.page.index, "table continues on next page");
                state.new_page();
            }
            let laid_out = layout_row(row, table, x, state.cursor);
            state.page.rows.push(laid_out);
            state.cursor += row_height;
        }
        Ok(())
    }
}

/// Mutable position while flowing a story
struct FlowState<'a> {
    config: &'a PageConfig,
    tree: LayoutTree,
    page: PageBox,
    cursor: f32,
}

impl<'a> FlowState<'a> {
    fn new(config: &'a PageConfig) -> Self {
        let page = PageBox::new(0, config.page_bounds(), config.content_area());
        Self {
            config,
            tree: LayoutTree::new(),
            cursor: page.content_area.y,
            page,
        }
    }

    fn fits(&self, height: f32) -> bool {
        self.cursor + height <= self.page.content_area.bottom() + FIT_EPSILON
    }

    fn new_page(&mut self) {
        let index = self.page.index + 1;
        let next = PageBox::new(index, self.config.page_bounds(), self.config.content_area());
        self.cursor = next.content_area.y;
        let finished = std::mem::replace(&mut self.page, next);
        self.tree.add_page(finished);
    }

    fn finish(mut self) -> LayoutTree {
        if !self.page.is_blank() || self.tree.pages.is_empty() {
            self.tree.add_page(self.page);
        }
        self.tree
    }
}
