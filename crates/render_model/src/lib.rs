//! Render Model - Layout to render conversion
//!
//! This crate converts the layout tree into positioned render items that
//! can be drawn by a page renderer.

mod converter;
mod error;
mod render_item;

pub use converter::*;
pub use error::*;
pub use render_item::*;
