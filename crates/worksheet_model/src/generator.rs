//! Constrained problem generation
//!
//! Problems are drawn by bounded rejection sampling:
//!
//! - Addition draws both operands from the addend range and redraws while
//!   the sum exceeds `max_sum`.
//! - Subtraction draws a minuend and a subtrahend, swaps them if the
//!   subtrahend is larger, and redraws while the difference is below
//!   `min_difference`. With the default ranges the minuend is never smaller
//!   than the subtrahend, so the redraw only guards non-default ranges.
//!
//! Every loop is capped at `max_attempts`; exhaustion is reported as
//! [`GenerationError::AttemptsExhausted`] instead of looping forever.

use crate::{GenerationError, Operator, Problem, Result, Worksheet, WorksheetConfig};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Generate a single problem for `config` using `rng`
pub fn generate_problem<R: Rng + ?Sized>(config: &WorksheetConfig, rng: &mut R) -> Result<Problem> {
    config.validate()?;
    draw_problem(config, rng)
}

/// Generate a complete worksheet of `config.problem_count` problems
///
/// Fails as a whole if any single problem cannot be generated; no partial
/// worksheet is ever returned.
pub fn generate_worksheet<R: Rng + ?Sized>(config: &WorksheetConfig, rng: &mut R) -> Result<Worksheet> {
    config.validate()?;

    let problems = (0..config.problem_count)
        .map(|_| draw_problem(config, rng))
        .collect::<Result<Vec<_>>>()?;

    Worksheet::from_problems(problems, config.problem_count)
}

fn draw_problem<R: Rng + ?Sized>(config: &WorksheetConfig, rng: &mut R) -> Result<Problem> {
    let operator = Operator::ALL[rng.gen_range(0..Operator::ALL.len())];
    match operator {
        Operator::Add => draw_addition(config, rng),
        Operator::Subtract => draw_subtraction(config, rng),
    }
}

fn draw_addition<R: Rng + ?Sized>(config: &WorksheetConfig, rng: &mut R) -> Result<Problem> {
    let range = config.addend_range;

    for attempt in 1..=config.max_attempts {
        let a = rng.gen_range(range.min..=range.max);
        let b = rng.gen_range(range.min..=range.max);

        if a.checked_add(b).is_some_and(|sum| sum <= config.max_sum) {
            return Ok(Problem::new(a, Operator::Add, b));
        }
        tracing::trace!(attempt, a, b, max_sum = config.max_sum, "rejected addition draw");
    }

    exhausted(Operator::Add, config.max_attempts)
}

fn draw_subtraction<R: Rng + ?Sized>(config: &WorksheetConfig, rng: &mut R) -> Result<Problem> {
    let minuend = config.minuend_range;
    let subtrahend = config.subtrahend_range;

    for attempt in 1..=config.max_attempts {
        let mut a = rng.gen_range(minuend.min..=minuend.max);
        let mut b = rng.gen_range(subtrahend.min..=subtrahend.max);
        if a < b {
            std::mem::swap(&mut a, &mut b);
        }

        if a - b >= config.min_difference {
            return Ok(Problem::new(a, Operator::Subtract, b));
        }
        tracing::trace!(
            attempt,
            a,
            b,
            min_difference = config.min_difference,
            "rejected subtraction draw"
        );
    }

    exhausted(Operator::Subtract, config.max_attempts)
}

fn exhausted(operator: Operator, attempts: u32) -> Result<Problem> {
    tracing::warn!(%operator, attempts, "problem generation exhausted its retry cap");
    Err(GenerationError::AttemptsExhausted { operator, attempts })
}

/// Problem generator owning its configuration and random source
pub struct ProblemGenerator<R = ThreadRng> {
    config: WorksheetConfig,
    rng: R,
}

impl ProblemGenerator<ThreadRng> {
    /// Create a generator backed by the thread-local RNG
    pub fn new(config: WorksheetConfig) -> Result<Self> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> ProblemGenerator<R> {
    /// Create a generator with an explicit random source
    pub fn with_rng(config: WorksheetConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Get the configuration
    pub fn config(&self) -> &WorksheetConfig {
        &self.config
    }

    /// Draw the next problem
    pub fn next_problem(&mut self) -> Result<Problem> {
        draw_problem(&self.config, &mut self.rng)
    }

    /// Draw a complete worksheet
    pub fn next_worksheet(&mut self) -> Result<Worksheet> {
        generate_worksheet(&self.config, &mut self.rng)
    }
}
