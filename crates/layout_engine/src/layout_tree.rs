//! Layout tree structure

use crate::FontSpec;
use serde::{Deserialize, Serialize};

/// A rectangle in layout coordinates (origin at the top-left of the page)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        const EPSILON: f32 = 0.01;
        other.x >= self.x - EPSILON
            && other.y >= self.y - EPSILON
            && other.right() <= self.right() + EPSILON
            && other.bottom() <= self.bottom() + EPSILON
    }
}

/// A single positioned line of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    /// Left edge of the first glyph
    pub x: f32,
    /// Baseline position
    pub baseline: f32,
    /// Advance width of the whole line
    pub width: f32,
    pub font: FontSpec,
}

/// One cell of a problem row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellBox {
    /// Column index within the row
    pub column: usize,
    pub bounds: Rect,
    /// `None` for the empty right cell of an odd remainder
    pub text: Option<TextLine>,
}

impl CellBox {
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
    }
}

/// A row of the problem grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowBox {
    pub bounds: Rect,
    pub cells: Vec<CellBox>,
}

impl RowBox {
    /// Number of cells holding a problem
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

/// A page in the layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBox {
    /// Page index (0-based)
    pub index: usize,
    /// Full page bounds
    pub bounds: Rect,
    /// Content area (excluding margins)
    pub content_area: Rect,
    /// Title block, present on the first page only
    pub title: Option<TextLine>,
    /// Problem rows in top-to-bottom order
    pub rows: Vec<RowBox>,
    /// Whether an explicit page break ends this page
    pub break_after: bool,
}

impl PageBox {
    pub fn new(index: usize, bounds: Rect, content_area: Rect) -> Self {
        Self {
            index,
            bounds,
            content_area,
            title: None,
            rows: Vec::new(),
            break_after: false,
        }
    }

    /// Whether nothing has been placed on this page yet
    pub fn is_blank(&self) -> bool {
        self.title.is_none() && self.rows.is_empty()
    }

    /// All text lines on the page in reading order
    pub fn text_lines(&self) -> impl Iterator<Item = &TextLine> {
        self.title.iter().chain(
            self.rows
                .iter()
                .flat_map(|row| row.cells.iter().filter_map(|cell| cell.text.as_ref())),
        )
    }
}

/// Laid-out worksheet: one entry per physical page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutTree {
    pub pages: Vec<PageBox>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&mut self, page: PageBox) {
        self.pages.push(page);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of explicit page breaks
    pub fn page_breaks(&self) -> usize {
        self.pages.iter().filter(|p| p.break_after).count()
    }

    pub fn total_rows(&self) -> usize {
        self.pages.iter().map(|p| p.rows.len()).sum()
    }

    /// Filled-cell count of every row, grouped by page
    ///
    /// Two layouts with the same shape differ only in their text.
    pub fn shape(&self) -> Vec<Vec<usize>> {
        self.pages
            .iter()
            .map(|page| page.rows.iter().map(RowBox::filled_cells).collect())
            .collect()
    }
}
