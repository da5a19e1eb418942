//! Scalar root finders for the operating point.
//!
//! Two methods are provided:
//!
//! - [`newton`] - Newton-Raphson from an initial guess, using the analytic
//!   derivative. Fast (quadratic) near the root, but needs a non-flat slope.
//! - [`bisection`] - interval halving on a bracket `[a, b]` with a sign
//!   change. Slow (one bit per iteration) but cannot diverge.
//!
//! Neither solver returns `Err`. Every outcome, including numerical failure,
//! is described by a [`RootResult`] and its [`RootStatus`]:
//!
//! | Status | Solver | Value |
//! |--------|--------|-------|
//! | `Converged` | both | root estimate |
//! | `DerivativeTooSmall` | Newton | `None` |
//! | `NoSignChange` | bisection | `None` |
//! | `BudgetExhausted` | both | last estimate |

mod bisection;
mod newton;

pub use bisection::bisection;
pub use newton::newton;

use std::fmt;

use crate::error::{LoadlineError, Result};

/// Default convergence tolerance (volts).
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration budget per solver call.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Newton aborts when `|f'(U)|` drops below this floor.
pub const MIN_DERIVATIVE: f64 = 1e-12;

/// A scalar function the solvers can drive.
///
/// Bisection only calls [`value`](Residual::value); Newton also needs the
/// analytic [`derivative`](Residual::derivative). Implementations may return
/// non-finite values; the solvers treat them as ordinary floats.
pub trait Residual {
    /// Evaluate the function at `u`.
    fn value(&self, u: f64) -> f64;

    /// Evaluate the derivative at `u`.
    fn derivative(&self, u: f64) -> f64;
}

/// Termination settings shared by both solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence tolerance (volts).
    pub tolerance: f64,
    /// Maximum iterations before giving up.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance (in volts).
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check that the tolerance is positive and the budget non-zero.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(LoadlineError::invalid_solver_config(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(LoadlineError::invalid_solver_config(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// How a solver call terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootStatus {
    /// Tolerance met.
    Converged,
    /// Newton hit a flat region (`|f'| < MIN_DERIVATIVE`).
    DerivativeTooSmall,
    /// Bisection bracket has no sign change.
    NoSignChange,
    /// Iteration budget ran out; the value is a best-effort estimate.
    BudgetExhausted,
}

impl fmt::Display for RootStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootStatus::Converged => write!(f, "converged"),
            RootStatus::DerivativeTooSmall => write!(f, "derivative too small"),
            RootStatus::NoSignChange => write!(f, "no sign change on interval"),
            RootStatus::BudgetExhausted => write!(f, "iteration budget exhausted"),
        }
    }
}

/// Outcome of a single solver call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// Root estimate; `None` for the non-iterative failures.
    pub value: Option<f64>,
    /// Iterations consumed (1-indexed, 0 if none ran).
    pub iterations: usize,
    /// Termination reason.
    pub status: RootStatus,
}

impl RootResult {
    /// A converged root.
    pub fn success(value: f64, iterations: usize) -> Self {
        Self {
            value: Some(value),
            iterations,
            status: RootStatus::Converged,
        }
    }

    /// Budget exhausted; `estimate` is the last iterate.
    pub fn exhausted(estimate: f64, iterations: usize) -> Self {
        Self {
            value: Some(estimate),
            iterations,
            status: RootStatus::BudgetExhausted,
        }
    }

    /// A failure that produces no value.
    pub fn failed(iterations: usize, status: RootStatus) -> Self {
        debug_assert!(matches!(
            status,
            RootStatus::DerivativeTooSmall | RootStatus::NoSignChange
        ));
        Self {
            value: None,
            iterations,
            status,
        }
    }

    /// Whether the tolerance was met.
    pub fn converged(&self) -> bool {
        self.status == RootStatus::Converged
    }

    /// Whether a finite value is available (converged or best-effort).
    pub fn is_finite(&self) -> bool {
        self.value.is_some_and(f64::is_finite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::new();
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_budget_and_bad_tolerance() {
        assert!(SolverConfig::new().with_max_iterations(0).validate().is_err());
        assert!(SolverConfig::new().with_tolerance(0.0).validate().is_err());
        assert!(SolverConfig::new().with_tolerance(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_value_defined_only_for_iterative_outcomes() {
        assert!(RootResult::success(0.5, 3).value.is_some());
        assert!(RootResult::exhausted(0.5, 3).value.is_some());
        assert!(!RootResult::exhausted(0.5, 3).converged());
        assert!(RootResult::failed(0, RootStatus::NoSignChange).value.is_none());
        assert!(!RootResult::exhausted(f64::INFINITY, 3).is_finite());
    }
}
