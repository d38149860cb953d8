//! Layout Engine - Page geometry, problem grid and pagination
//!
//! This crate converts a list of formatted problems into a visual layout
//! tree ready for rendering.

mod error;
mod font_metrics;
mod layout_tree;
mod page_setup;
mod paginator;
mod table_layout;

pub use error::*;
pub use font_metrics::*;
pub use layout_tree::*;
pub use page_setup::*;
pub use paginator::*;
pub use table_layout::*;
