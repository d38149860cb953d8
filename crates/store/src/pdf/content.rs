//! PDF Content Stream Generation
//!
//! Builder for the page description operators a worksheet uses:
//! - `q`/`Q`: save and restore graphics state
//! - `BT`/`ET`, `Tf`, `Tm`, `Tj`: text objects
//! - `rg`/`RG`, `w`: colors and line width
//! - `re`, `f`, `S`, `B`: rectangles and painting
//!
//! Coordinates passed in here are already in PDF user space (origin at the
//! bottom-left of the page).

use super::objects::{format_number, PdfObject};

/// Content stream builder
#[derive(Debug, Default, Clone)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append one operator line: operands separated by spaces, then the operator
    fn op(&mut self, operands: &[f64], operator: &str) -> &mut Self {
        for value in operands {
            self.data.extend_from_slice(format_number(*value).as_bytes());
            self.data.push(b' ');
        }
        self.data.extend_from_slice(operator.as_bytes());
        self.data.push(b'\n');
        self
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.op(&[], "q")
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.op(&[], "Q")
    }

    pub fn begin_text(&mut self) -> &mut Self {
        self.op(&[], "BT")
    }

    pub fn end_text(&mut self) -> &mut Self {
        self.op(&[], "ET")
    }

    /// Select a font resource (`/F1 16 Tf`)
    pub fn set_font(&mut self, resource: &str, size: f64) -> &mut Self {
        PdfObject::name(resource).encode(&mut self.data);
        self.data.push(b' ');
        self.op(&[size], "Tf")
    }

    /// Place the next glyph at (`x`, `y`) with an unscaled text matrix (`Tm`)
    pub fn set_text_position(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(&[1.0, 0.0, 0.0, 1.0, x, y], "Tm")
    }

    /// Show a string already encoded for the current font (`Tj`)
    pub fn show_text(&mut self, encoded: &[u8]) -> &mut Self {
        PdfObject::String(encoded.to_vec()).encode(&mut self.data);
        self.data.push(b' ');
        self.op(&[], "Tj")
    }

    pub fn set_fill_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.op(&[r, g, b], "rg")
    }

    pub fn set_stroke_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.op(&[r, g, b], "RG")
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.op(&[width], "w")
    }

    /// Append a rectangle path with its lower-left corner at (`x`, `y`)
    pub fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.op(&[x, y, width, height], "re")
    }

    pub fn fill(&mut self) -> &mut Self {
        self.op(&[], "f")
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.op(&[], "S")
    }

    pub fn fill_and_stroke(&mut self) -> &mut Self {
        self.op(&[], "B")
    }
}
