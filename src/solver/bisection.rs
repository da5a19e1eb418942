//! Bisection on a bracketing interval.

use super::{Residual, RootResult, RootStatus, SolverConfig};

/// Find a root of `f` in `[a, b]` by repeated halving.
///
/// The bracket must straddle a sign change: when `f(a) * f(b) >= 0` (or
/// either end evaluates to `NaN`) the call returns
/// [`RootStatus::NoSignChange`] with no value and zero iterations. A root
/// sitting exactly on an endpoint is therefore rejected, not accepted.
/// The same applies to a bracket that is not finite or not ordered `a < b`.
///
/// Each iteration evaluates the midpoint `c`. Convergence is declared as
/// soon as the half-width `(b - a) / 2 <= tolerance`, returning `c`. Otherwise
/// the half with the sign change is kept; `f(a) * f(c) <= 0` keeps `[a, c]`,
/// so an exact zero at `c` stays in the left half. Running out of budget
/// returns the final midpoint with [`RootStatus::BudgetExhausted`].
pub fn bisection<F: Residual + ?Sized>(f: &F, a: f64, b: f64, config: &SolverConfig) -> RootResult {
    if !(a.is_finite() && b.is_finite() && a < b) {
        log::debug!("bisection: [{a}, {b}] is not an ordered finite bracket");
        return RootResult::failed(0, RootStatus::NoSignChange);
    }

    let (mut a, mut b) = (a, b);
    let mut fa = f.value(a);
    let fb = f.value(b);

    if !(fa * fb < 0.0) {
        log::debug!("bisection: no sign change on [{a}, {b}] (f(a) = {fa:e}, f(b) = {fb:e})");
        return RootResult::failed(0, RootStatus::NoSignChange);
    }

    for iter in 0..config.max_iterations {
        let c = (a + b) / 2.0;
        let fc = f.value(c);

        if (b - a) / 2.0 <= config.tolerance {
            log::debug!("bisection: converged to {c:.12} in {} iterations", iter + 1);
            return RootResult::success(c, iter + 1);
        }

        if fa * fc <= 0.0 {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
        log::trace!("bisection: iteration {} bracket [{a:.12}, {b:.12}]", iter + 1);
    }

    let c = (a + b) / 2.0;
    log::debug!(
        "bisection: no convergence after {} iterations (midpoint {c})",
        config.max_iterations
    );
    RootResult::exhausted(c, config.max_iterations)
}
