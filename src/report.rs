//! Console report of the solver outcomes.
//!
//! Formatting only; the report never re-runs a solver. Failed or non-finite
//! results are described by their failure mode instead of printing `NaN` or
//! `inf` as if it were a voltage.

use std::fmt;
use std::path::Path;

use crate::circuit::{CircuitModel, OperatingPoint};
use crate::solver::{RootResult, RootStatus};
use crate::sweep::scientific;

/// Root-finding method a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Newton,
    Bisection,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Newton => write!(f, "Newton"),
            Method::Bisection => write!(f, "Bisection"),
        }
    }
}

/// One solver's result together with the operating point it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodReport {
    pub method: Method,
    pub result: RootResult,
    /// `None` unless the result carries a finite voltage.
    pub point: Option<OperatingPoint>,
}

impl MethodReport {
    /// Pair a solver result with the operating point `model` gives for it.
    pub fn new(method: Method, result: RootResult, model: &CircuitModel) -> Self {
        Self {
            method,
            result,
            point: model.operating_point(&result),
        }
    }
}

impl fmt::Display for MethodReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = self.method;
        let iterations = self.result.iterations;

        match (self.result.status, self.point) {
            (RootStatus::Converged, Some(p)) => write!(
                f,
                "{method}: U = {:.12} V, I = {} A, iterations = {iterations}",
                p.voltage,
                scientific(p.diode_current, 12)
            ),
            (RootStatus::BudgetExhausted, Some(p)) => write!(
                f,
                "{method} did not converge within {iterations} iterations (best estimate U = {:.12} V)",
                p.voltage
            ),
            (RootStatus::DerivativeTooSmall, _) => write!(
                f,
                "{method} failed: derivative too small (iterations={iterations})"
            ),
            (RootStatus::NoSignChange, _) => write!(
                f,
                "{method} failed (no sign change on interval) (iterations={iterations})"
            ),
            (_, None) => write!(
                f,
                "{method} produced a non-finite estimate (iterations={iterations})"
            ),
        }
    }
}

/// Results of both solvers for one circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub newton: MethodReport,
    pub bisection: MethodReport,
}

impl Report {
    /// Build the report for one Newton and one bisection run on `model`.
    pub fn new(model: &CircuitModel, newton: RootResult, bisection: RootResult) -> Self {
        Self {
            newton: MethodReport::new(Method::Newton, newton, model),
            bisection: MethodReport::new(Method::Bisection, bisection, model),
        }
    }

    /// `|U_newton - U_bisection|` when both solvers converged.
    pub fn root_spread(&self) -> Option<f64> {
        if !(self.newton.result.converged() && self.bisection.result.converged()) {
            return None;
        }
        match (self.newton.point, self.bisection.point) {
            (Some(n), Some(b)) => Some((n.voltage - b.voltage).abs()),
            _ => None,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- Results ----")?;
        writeln!(f, "{}", self.newton)?;
        write!(f, "{}", self.bisection)?;
        if let Some(spread) = self.root_spread() {
            write!(f, "\n|U_newton - U_bisection| = {} V", scientific(spread, 3))?;
        }
        Ok(())
    }
}

/// Line confirming the sweep file was written.
pub fn sweep_written(path: &Path) -> String {
    format!(
        "IV data written to '{}' (columns: U I_diode I_generator)",
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> CircuitModel {
        CircuitModel::default()
    }

    #[test]
    fn test_converged_line() {
        let line = MethodReport::new(Method::Newton, RootResult::success(0.5, 4), &model());
        let text = line.to_string();
        assert!(text.starts_with("Newton: U = 0.500000000000 V, I = "));
        assert!(text.ends_with(" A, iterations = 4"));
    }

    #[test]
    fn test_failure_lines_name_the_mode() {
        let m = model();
        let flat = MethodReport::new(
            Method::Newton,
            RootResult::failed(3, RootStatus::DerivativeTooSmall),
            &m,
        );
        assert_eq!(
            flat.to_string(),
            "Newton failed: derivative too small (iterations=3)"
        );

        let bracket = MethodReport::new(
            Method::Bisection,
            RootResult::failed(0, RootStatus::NoSignChange),
            &m,
        );
        assert_eq!(
            bracket.to_string(),
            "Bisection failed (no sign change on interval) (iterations=0)"
        );

        let exhausted = MethodReport::new(Method::Newton, RootResult::exhausted(0.25, 1000), &m);
        assert_eq!(
            exhausted.to_string(),
            "Newton did not converge within 1000 iterations (best estimate U = 0.250000000000 V)"
        );
    }

    #[test]
    fn test_non_finite_estimate_not_printed() {
        let line = MethodReport::new(
            Method::Newton,
            RootResult::exhausted(f64::NAN, 1000),
            &model(),
        );
        let text = line.to_string();
        assert_eq!(text, "Newton produced a non-finite estimate (iterations=1000)");
        assert!(!text.to_lowercase().contains("nan"));
    }

    #[test]
    fn test_report_layout() {
        let report = Report::new(
            &model(),
            RootResult::success(0.97, 5),
            RootResult::success(0.97, 20),
        );
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "---- Results ----");
        assert!(lines[1].starts_with("Newton: "));
        assert!(lines[2].starts_with("Bisection: "));
        assert_eq!(report.root_spread(), Some(0.0));
    }

    #[test]
    fn test_no_spread_when_a_solver_failed() {
        let report = Report::new(
            &model(),
            RootResult::success(0.97, 5),
            RootResult::failed(0, RootStatus::NoSignChange),
        );
        assert_eq!(report.root_spread(), None);
        assert_eq!(report.to_string().lines().count(), 3);
    }

    #[test]
    fn test_sweep_written_line() {
        assert_eq!(
            sweep_written(Path::new("iv_data.txt")),
            "IV data written to 'iv_data.txt' (columns: U I_diode I_generator)"
        );
    }
}
