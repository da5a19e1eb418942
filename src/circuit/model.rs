//! Residual evaluator for the diode/load-line circuit.
//!
//! Uses the Shockley diode law in the reference cell's scaling:
//!   I_d = Is * (exp(U * n / V0) - 1)
//!
//! and the generator's load line:
//!   I_g = (E - U) / R
//!
//! The residual `f(U) = R * (I_g - I_d)` is strictly decreasing in `U`
//! for positive constants, so it has exactly one root.

use crate::solver::{Residual, RootResult};

use super::{OperatingPoint, PhysicalConstants};

/// Evaluator for the load-line residual and its derivative.
///
/// Every method is total on the real line: large forward voltages overflow
/// the exponential to `inf`, and a `NaN` input yields `NaN`. Nothing panics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitModel {
    pub constants: PhysicalConstants,
}

impl Default for CircuitModel {
    fn default() -> Self {
        Self::new(PhysicalConstants::reference())
    }
}

impl CircuitModel {
    /// Create a model for the given constant set.
    pub fn new(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    /// `exp(U * n / V0)`, shared by the current and derivative terms.
    fn expo(&self, u: f64) -> f64 {
        (u * self.constants.exponent_scale()).exp()
    }

    /// `f(U) = E - U - R * Is * (exp(U * n / V0) - 1)`
    pub fn residual(&self, u: f64) -> f64 {
        let c = &self.constants;
        c.emf - u - c.series_resistance * c.saturation_current * (self.expo(u) - 1.0)
    }

    /// `f'(U) = -1 - R * Is * (n / V0) * exp(U * n / V0)`
    pub fn derivative(&self, u: f64) -> f64 {
        let c = &self.constants;
        -1.0 - (c.series_resistance * c.saturation_current * c.exponent_scale()) * self.expo(u)
    }

    /// Diode current at voltage `u`.
    pub fn diode_current(&self, u: f64) -> f64 {
        self.constants.saturation_current * (self.expo(u) - 1.0)
    }

    /// Generator (load-line) current at voltage `u`.
    pub fn generator_current(&self, u: f64) -> f64 {
        (self.constants.emf - u) / self.constants.series_resistance
    }

    /// Evaluate both currents at `u`.
    pub fn evaluate(&self, u: f64) -> OperatingPoint {
        OperatingPoint {
            voltage: u,
            diode_current: self.diode_current(u),
            generator_current: self.generator_current(u),
        }
    }

    /// Derive the operating point from a solver result.
    ///
    /// Returns `None` when the solver produced no value or a non-finite one,
    /// so callers never format `NaN`/`inf` as a valid voltage.
    pub fn operating_point(&self, root: &RootResult) -> Option<OperatingPoint> {
        root.value
            .filter(|u| u.is_finite())
            .map(|u| self.evaluate(u))
    }
}

impl Residual for CircuitModel {
    fn value(&self, u: f64) -> f64 {
        self.residual(u)
    }

    fn derivative(&self, u: f64) -> f64 {
        CircuitModel::derivative(self, u)
    }
}
