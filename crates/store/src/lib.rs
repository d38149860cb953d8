//! Store - Worksheet rendering and file output
//!
//! This crate turns formatted problems into PDF worksheets: layout,
//! render conversion, PDF serialization and atomic artifact writes.

mod error;
mod file_io;
pub mod pdf;
mod worksheet;

pub use error::*;
pub use file_io::*;
pub use worksheet::*;
