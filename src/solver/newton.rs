//! Newton-Raphson iteration for the load-line residual.

use super::{Residual, RootResult, RootStatus, SolverConfig, MIN_DERIVATIVE};

/// Find a root of `f` with Newton-Raphson, starting from `initial_guess`.
///
/// Each iteration takes the step `U_next = U - f(U) / f'(U)`. Terminates on:
/// - `|f'(U)| < MIN_DERIVATIVE`: [`RootStatus::DerivativeTooSmall`], no value,
///   `iterations` is the (1-indexed) iteration that detected it
/// - `|U_next - U| < tolerance`: [`RootStatus::Converged`] with `U_next`
/// - budget exhausted: [`RootStatus::BudgetExhausted`] with the last iterate
///
/// A non-finite iterate is carried like any other value; it never satisfies
/// the step test, so it surfaces as a non-finite exhausted estimate.
pub fn newton<F: Residual + ?Sized>(f: &F, initial_guess: f64, config: &SolverConfig) -> RootResult {
    let mut u = initial_guess;

    for iter in 0..config.max_iterations {
        let f_u = f.value(u);
        let df_u = f.derivative(u);

        if df_u.abs() < MIN_DERIVATIVE {
            log::debug!(
                "newton: |f'({u})| = {:.3e} below floor at iteration {}",
                df_u.abs(),
                iter + 1
            );
            return RootResult::failed(iter + 1, RootStatus::DerivativeTooSmall);
        }

        let u_next = u - f_u / df_u;
        log::trace!("newton: iteration {} U = {u_next:.12}", iter + 1);

        if (u_next - u).abs() < config.tolerance {
            log::debug!("newton: converged to {u_next:.12} in {} iterations", iter + 1);
            return RootResult::success(u_next, iter + 1);
        }

        u = u_next;
    }

    log::debug!(
        "newton: no convergence after {} iterations (last estimate {u})",
        config.max_iterations
    );
    RootResult::exhausted(u, config.max_iterations)
}
