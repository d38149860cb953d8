//! Worksheet container

use crate::{GenerationError, Problem, Result};
use serde::{Deserialize, Serialize};

/// An ordered, immutable list of problems for one output artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worksheet {
    problems: Vec<Problem>,
}

impl Worksheet {
    /// Build a worksheet, checking it holds exactly `expected` problems
    pub fn from_problems(problems: Vec<Problem>, expected: usize) -> Result<Self> {
        if problems.len() != expected {
            return Err(GenerationError::InvalidConfig(format!(
                "worksheet needs {} problems, got {}",
                expected,
                problems.len()
            )));
        }
        Ok(Self { problems })
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Formatted problem text in worksheet order
    pub fn problem_strings(&self) -> Vec<String> {
        self.problems.iter().map(Problem::formatted).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operator;

    #[test]
    fn test_from_problems_checks_length() {
        let problems = vec![Problem::new(1, Operator::Add, 2); 3];
        assert!(Worksheet::from_problems(problems.clone(), 3).is_ok());
        assert!(Worksheet::from_problems(problems, 4).is_err());
    }

    #[test]
    fn test_problem_strings_preserve_order() {
        let worksheet = Worksheet::from_problems(
            vec![
                Problem::new(1, Operator::Add, 2),
                Problem::new(15, Operator::Subtract, 6),
            ],
            2,
        )
        .unwrap();

        assert_eq!(
            worksheet.problem_strings(),
            vec![" 1 +  2 = _____".to_string(), "15 -  6 = _____".to_string()]
        );
    }
}
