//! Worksheet Model - Arithmetic problems and their generation
//!
//! This crate provides the problem model for the worksheet generator:
//! the fixed configuration constants, immutable `Problem` values, the
//! `Worksheet` container, and the bounded rejection-sampling generator.

mod config;
mod error;
mod generator;
mod problem;
mod worksheet;

pub use config::*;
pub use error::*;
pub use generator::*;
pub use problem::*;
pub use worksheet::*;
