//! Worksheet configuration
//!
//! The generator and the paginator share one explicit configuration value.
//! Its `Default` holds the fixed constants below; nothing reads a runtime
//! configuration source.

use crate::{GenerationError, Result};
use serde::{Deserialize, Serialize};

/// Total problems per worksheet (five pages of twenty)
pub const PROBLEM_COUNT: usize = 100;
/// Largest allowed sum, also the upper bound of the subtraction minuend
pub const MAX_SUM: u32 = 20;
/// Smallest allowed difference; keeps subtraction results non-negative
pub const MIN_DIFFERENCE: u32 = 0;
/// Problems laid out on one page (ten rows of two)
pub const PROBLEMS_PER_PAGE: usize = 20;
/// Worksheets produced by one batch run
pub const NUM_WORKSHEETS: usize = 10;
/// Retry cap for each rejection-sampling loop
pub const MAX_ATTEMPTS: u32 = 256;
/// Artifact file stem
pub const BASE_FILE_NAME: &str = "SimpleMathWorksheet";
/// Artifact file extension
pub const FILE_EXTENSION: &str = "pdf";
/// Title printed once at the top of the first page
pub const WORKSHEET_TITLE: &str = "Simple Addition and Subtraction Worksheet";

/// Inclusive range an operand is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandRange {
    pub min: u32,
    pub max: u32,
}

impl OperandRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// Configuration shared by the generator, the paginator and the driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetConfig {
    /// Problems per worksheet
    #[serde(default = "default_problem_count")]
    pub problem_count: usize,
    /// Upper bound on addition results
    #[serde(default = "default_max_sum")]
    pub max_sum: u32,
    /// Lower bound on subtraction results
    #[serde(default)]
    pub min_difference: u32,
    /// Problems per page before an explicit page break
    #[serde(default = "default_problems_per_page")]
    pub problems_per_page: usize,
    /// Worksheets per batch
    #[serde(default = "default_num_worksheets")]
    pub num_worksheets: usize,
    /// Range for both addition operands
    #[serde(default = "default_addend_range")]
    pub addend_range: OperandRange,
    /// Range for the subtraction minuend
    #[serde(default = "default_minuend_range")]
    pub minuend_range: OperandRange,
    /// Range for the subtraction subtrahend
    #[serde(default = "default_subtrahend_range")]
    pub subtrahend_range: OperandRange,
    /// Retry cap per rejection-sampling loop
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Artifact file stem
    #[serde(default = "default_base_name")]
    pub base_name: String,
    /// Artifact file extension
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Title on the first page
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_problem_count() -> usize {
    PROBLEM_COUNT
}

fn default_max_sum() -> u32 {
    MAX_SUM
}

fn default_problems_per_page() -> usize {
    PROBLEMS_PER_PAGE
}

fn default_num_worksheets() -> usize {
    NUM_WORKSHEETS
}

fn default_addend_range() -> OperandRange {
    OperandRange::new(1, 10)
}

fn default_minuend_range() -> OperandRange {
    OperandRange::new(10, MAX_SUM)
}

fn default_subtrahend_range() -> OperandRange {
    OperandRange::new(1, 9)
}

fn default_max_attempts() -> u32 {
    MAX_ATTEMPTS
}

fn default_base_name() -> String {
    BASE_FILE_NAME.to_string()
}

fn default_extension() -> String {
    FILE_EXTENSION.to_string()
}

fn default_title() -> String {
    WORKSHEET_TITLE.to_string()
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            problem_count: PROBLEM_COUNT,
            max_sum: MAX_SUM,
            min_difference: MIN_DIFFERENCE,
            problems_per_page: PROBLEMS_PER_PAGE,
            num_worksheets: NUM_WORKSHEETS,
            addend_range: default_addend_range(),
            minuend_range: default_minuend_range(),
            subtrahend_range: default_subtrahend_range(),
            max_attempts: MAX_ATTEMPTS,
            base_name: default_base_name(),
            extension: default_extension(),
            title: default_title(),
        }
    }
}

impl WorksheetConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of problems per worksheet
    pub fn with_problem_count(mut self, count: usize) -> Self {
        self.problem_count = count;
        self
    }

    /// Set the number of problems per page
    pub fn with_problems_per_page(mut self, per_page: usize) -> Self {
        self.problems_per_page = per_page;
        self
    }

    /// Set the number of worksheets per batch
    pub fn with_num_worksheets(mut self, count: usize) -> Self {
        self.num_worksheets = count;
        self
    }

    /// Set the upper bound on sums
    pub fn with_max_sum(mut self, max_sum: u32) -> Self {
        self.max_sum = max_sum;
        self
    }

    /// Set the lower bound on differences
    pub fn with_min_difference(mut self, min_difference: u32) -> Self {
        self.min_difference = min_difference;
        self
    }

    /// Set the addition operand range
    pub fn with_addend_range(mut self, range: OperandRange) -> Self {
        self.addend_range = range;
        self
    }

    /// Set the subtraction operand ranges
    pub fn with_subtraction_ranges(mut self, minuend: OperandRange, subtrahend: OperandRange) -> Self {
        self.minuend_range = minuend;
        self.subtrahend_range = subtrahend;
        self
    }

    /// Set the retry cap for rejection sampling
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the artifact file stem
    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    /// Set the worksheet title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Artifact file name for a 1-based worksheet index
    pub fn file_name(&self, index: usize) -> String {
        format!("{}_{}.{}", self.base_name, index, self.extension)
    }

    /// Check that the configuration can produce problems at all
    pub fn validate(&self) -> Result<()> {
        if self.max_sum < 2 {
            return Err(GenerationError::InvalidConfig(format!(
                "max_sum must be at least 2, got {}",
                self.max_sum
            )));
        }
        if self.problems_per_page == 0 {
            return Err(GenerationError::InvalidConfig(
                "problems_per_page must be greater than zero".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(GenerationError::InvalidConfig(
                "max_attempts must be greater than zero".to_string(),
            ));
        }

        let ranges = [
            ("addend_range", self.addend_range),
            ("minuend_range", self.minuend_range),
            ("subtrahend_range", self.subtrahend_range),
        ];
        for (name, range) in ranges {
            if range.is_empty() {
                return Err(GenerationError::InvalidConfig(format!(
                    "{} is empty: {}..={}",
                    name, range.min, range.max
                )));
            }
        }

        Ok(())
    }
}
