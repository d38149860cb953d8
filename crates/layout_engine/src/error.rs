//! Error types for layout engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid page setup: {0}")]
    InvalidPageSetup(String),

    #[error("Row of height {row_height}pt cannot fit in a page content area of {available}pt")]
    RowTooTall { row_height: f32, available: f32 },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
