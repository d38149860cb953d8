//! Error types for problem generation

use crate::Operator;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Rejection sampling for '{operator}' problems exhausted {attempts} attempts without a valid problem")]
    AttemptsExhausted { operator: Operator, attempts: u32 },

    #[error("Invalid worksheet configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
