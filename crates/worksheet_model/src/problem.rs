//! Arithmetic problem values

use crate::WorksheetConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Blank printed where the student writes the answer
pub const ANSWER_BLANK: &str = "_____";

/// Arithmetic operator of a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    /// Both operators, in draw order
    pub const ALL: [Operator; 2] = [Operator::Add, Operator::Subtract];

    /// Printed symbol
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single arithmetic problem
///
/// Values are immutable once built. The generator only produces problems
/// that satisfy [`Problem::satisfies`] for its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    operand1: u32,
    operand2: u32,
    operator: Operator,
}

impl Problem {
    pub fn new(operand1: u32, operator: Operator, operand2: u32) -> Self {
        Self {
            operand1,
            operand2,
            operator,
        }
    }

    pub fn operand1(&self) -> u32 {
        self.operand1
    }

    pub fn operand2(&self) -> u32 {
        self.operand2
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The correct result
    pub fn answer(&self) -> i64 {
        let (a, b) = (self.operand1 as i64, self.operand2 as i64);
        match self.operator {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
        }
    }

    /// Whether this problem honors the range and result constraints of `config`
    pub fn satisfies(&self, config: &WorksheetConfig) -> bool {
        match self.operator {
            Operator::Add => {
                config.addend_range.contains(self.operand1)
                    && config.addend_range.contains(self.operand2)
                    && self
                        .operand1
                        .checked_add(self.operand2)
                        .is_some_and(|sum| sum <= config.max_sum)
            }
            Operator::Subtract => {
                self.operand1 >= self.operand2
                    && self.operand1 <= config.max_sum
                    && self.operand1 - self.operand2 >= config.min_difference
            }
        }
    }

    /// Fixed-width worksheet text, e.g. `" 7 +  5 = _____"`
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>2} {} {:>2} = {}",
            self.operand1,
            self.operator.symbol(),
            self.operand2,
            ANSWER_BLANK
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OperandRange;

    #[test]
    fn test_single_digit_operands_are_padded() {
        let problem = Problem::new(7, Operator::Add, 5);
        assert_eq!(problem.formatted(), " 7 +  5 = _____");
    }

    #[test]
    fn test_two_digit_operands() {
        let problem = Problem::new(18, Operator::Subtract, 9);
        assert_eq!(problem.formatted(), "18 -  9 = _____");
    }

    #[test]
    fn test_answer() {
        assert_eq!(Problem::new(10, Operator::Add, 10).answer(), 20);
        assert_eq!(Problem::new(12, Operator::Subtract, 4).answer(), 8);
    }

    #[test]
    fn test_satisfies_default_config() {
        let config = WorksheetConfig::default();
        assert!(Problem::new(10, Operator::Add, 10).satisfies(&config));
        assert!(!Problem::new(11, Operator::Add, 1).satisfies(&config));
        assert!(Problem::new(20, Operator::Subtract, 9).satisfies(&config));
        assert!(!Problem::new(3, Operator::Subtract, 4).satisfies(&config));
        assert!(!Problem::new(21, Operator::Subtract, 1).satisfies(&config));
    }

    #[test]
    fn test_overflowing_sum_does_not_satisfy() {
        let config = WorksheetConfig::default()
            .with_addend_range(OperandRange::new(u32::MAX - 1, u32::MAX));
        let problem = Problem::new(u32::MAX, Operator::Add, u32::MAX);
        assert!(!problem.satisfies(&config));
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), '+');
        assert_eq!(Operator::Subtract.symbol(), '-');
        assert_eq!(Operator::Subtract.to_string(), "-");
    }
}
