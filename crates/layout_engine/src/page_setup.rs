//! Page geometry

use crate::{LayoutError, Rect, Result};
use serde::{Deserialize, Serialize};

/// Points per inch
pub const INCH: f32 = 72.0;

/// Standard page sizes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PageSize {
    /// US Letter (8.5" x 11")
    #[default]
    Letter,
    /// A4 (210mm x 297mm)
    A4,
    /// Custom size in points
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Get the width and height in points
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.276, 841.89),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Page size plus margins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_size: PageSize,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::letter()
    }
}

impl PageConfig {
    /// US Letter with half-inch margins on every side
    pub fn letter() -> Self {
        Self {
            page_size: PageSize::Letter,
            margin_top: 0.5 * INCH,
            margin_bottom: 0.5 * INCH,
            margin_left: 0.5 * INCH,
            margin_right: 0.5 * INCH,
        }
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Use the same margin on all four sides
    pub fn with_margins(mut self, margin: f32) -> Self {
        self.margin_top = margin;
        self.margin_bottom = margin;
        self.margin_left = margin;
        self.margin_right = margin;
        self
    }

    pub fn page_width(&self) -> f32 {
        self.page_size.dimensions().0
    }

    pub fn page_height(&self) -> f32 {
        self.page_size.dimensions().1
    }

    /// Get the content area width (excluding margins)
    pub fn content_width(&self) -> f32 {
        self.page_width() - self.margin_left - self.margin_right
    }

    /// Get the content area height (excluding margins)
    pub fn content_height(&self) -> f32 {
        self.page_height() - self.margin_top - self.margin_bottom
    }

    /// Full page rectangle
    pub fn page_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.page_width(), self.page_height())
    }

    /// Content rectangle in page coordinates (origin top-left)
    pub fn content_area(&self) -> Rect {
        Rect::new(
            self.margin_left,
            self.margin_top,
            self.content_width(),
            self.content_height(),
        )
    }

    pub fn validate(&self) -> Result<()> {
        let margins = [
            self.margin_top,
            self.margin_bottom,
            self.margin_left,
            self.margin_right,
        ];
        if margins.iter().any(|m| *m < 0.0) {
            return Err(LayoutError::InvalidPageSetup(
                "margins must not be negative".to_string(),
            ));
        }
        if self.content_width() <= 0.0 || self.content_height() <= 0.0 {
            return Err(LayoutError::InvalidPageSetup(format!(
                "margins leave no content area on a {}x{} page",
                self.page_width(),
                self.page_height()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_half_inch_margins() {
        let config = PageConfig::letter();
        assert_eq!(config.page_width(), 612.0);
        assert_eq!(config.page_height(), 792.0);
        assert_eq!(config.content_width(), 540.0); // 612 - 36 - 36
        assert_eq!(config.content_height(), 720.0); // 792 - 36 - 36
    }

    #[test]
    fn test_content_area_respects_margins() {
        let area = PageConfig::letter().content_area();
        assert_eq!(area.x, 36.0);
        assert_eq!(area.y, 36.0);
        assert_eq!(area.bottom(), 756.0);
    }

    #[test]
    fn test_oversized_margins_are_rejected() {
        let config = PageConfig::letter().with_margins(400.0);
        assert!(config.validate().is_err());
        assert!(PageConfig::letter().validate().is_ok());
    }

    #[test]
    fn test_custom_size() {
        let config = PageConfig::letter().with_page_size(PageSize::Custom {
            width: 300.0,
            height: 400.0,
        });
        assert_eq!(config.content_width(), 228.0);
        assert_eq!(config.content_height(), 328.0);
    }
}
