//! Table Layout
//!
//! The problem grid is a fixed two-column table:
//! - Each page chunk is paired into rows of `[p[i], p[i + 1]]`
//! - An odd remainder gets an empty right cell
//! - Column widths are fixed, so row height depends only on the style
//! - Cell text is aligned inside the padded cell box

use crate::{text_width, CellBox, FontSpec, Rect, RowBox, TextLine, INCH};
use serde::{Deserialize, Serialize};

/// Horizontal alignment of text inside its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical alignment of text inside a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Padding inside a table cell, in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellPadding {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for CellPadding {
    fn default() -> Self {
        Self {
            top: 3.0,
            bottom: 18.0,
            left: 6.0,
            right: 6.0,
        }
    }
}

/// Style of the problem table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStyle {
    /// Fixed column widths in points
    pub column_widths: Vec<f32>,
    /// Cell font
    pub font: FontSpec,
    /// Line height of cell text
    pub leading: f32,
    pub padding: CellPadding,
    pub h_align: HAlign,
    pub v_align: VAlign,
    /// Rows are never shorter than this
    pub min_row_height: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::problem_grid()
    }
}

impl TableStyle {
    /// Two 3.5 inch columns of centered, top-aligned Helvetica-Bold 16
    pub fn problem_grid() -> Self {
        let font = FontSpec::helvetica_bold(16.0);
        Self {
            column_widths: vec![3.5 * INCH, 3.5 * INCH],
            leading: font.size * 1.2,
            font,
            padding: CellPadding::default(),
            h_align: HAlign::Center,
            v_align: VAlign::Top,
            min_row_height: 0.0,
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn table_width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// Height of every row: one line of text plus vertical padding
    pub fn row_height(&self) -> f32 {
        let natural = self.padding.top + self.leading + self.padding.bottom;
        natural.max(self.min_row_height)
    }
}

/// One row of the problem grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRow {
    pub left: String,
    pub right: Option<String>,
}

/// Split `problems` into consecutive page chunks of at most `per_page`
///
/// `per_page` must be non-zero.
pub fn chunk_pages<S: AsRef<str>>(problems: &[S], per_page: usize) -> Vec<&[S]> {
    problems.chunks(per_page).collect()
}

/// Pair a chunk into two-column rows, preserving order
pub fn pair_rows<S: AsRef<str>>(chunk: &[S]) -> Vec<ProblemRow> {
    chunk
        .chunks(2)
        .map(|pair| ProblemRow {
            left: pair[0].as_ref().to_string(),
            right: pair.get(1).map(|s| s.as_ref().to_string()),
        })
        .collect()
}

/// Place one row with its top-left corner at (`x`, `y`)
pub fn layout_row(row: &ProblemRow, style: &TableStyle, x: f32, y: f32) -> RowBox {
    let height = style.row_height();
    let texts = [Some(row.left.as_str()), row.right.as_deref()];

    let mut cells = Vec::with_capacity(style.column_count());
    let mut cell_x = x;
    for (column, width) in style.column_widths.iter().copied().enumerate() {
        let bounds = Rect::new(cell_x, y, width, height);
        let text = texts
            .get(column)
            .copied()
            .flatten()
            .map(|text| place_text(text, &bounds, style));
        cells.push(CellBox { column, bounds, text });
        cell_x += width;
    }

    RowBox {
        bounds: Rect::new(x, y, style.table_width(), height),
        cells,
    }
}

fn place_text(text: &str, cell: &Rect, style: &TableStyle) -> TextLine {
    let padding = &style.padding;
    let width = text_width(text, &style.font);

    let inner_x = cell.x + padding.left;
    let inner_width = cell.width - padding.left - padding.right;
    let x = match style.h_align {
        HAlign::Left => inner_x,
        HAlign::Center => inner_x + (inner_width - width) / 2.0,
        HAlign::Right => inner_x + inner_width - width,
    };

    let inner_y = cell.y + padding.top;
    let slack = (cell.height - padding.top - padding.bottom - style.leading).max(0.0);
    let top = match style.v_align {
        VAlign::Top => inner_y,
        VAlign::Middle => inner_y + slack / 2.0,
        VAlign::Bottom => inner_y + slack,
    };

    TextLine {
        text: text.to_string(),
        x,
        baseline: top + style.font.size,
        width,
        font: style.font.clone(),
    }
}
