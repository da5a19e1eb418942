//! Value types describing the circuit and its solution.

use std::fmt;

/// Physical constants of the diode/load-line circuit.
///
/// All fields must be positive and finite; see
/// [`validate_constants`](super::validate_constants).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Diode ideality factor (n)
    pub ideality_factor: f64,
    /// Source EMF (E), volts
    pub emf: f64,
    /// Series resistance (R), ohms
    pub series_resistance: f64,
    /// Diode saturation current (Is), amperes
    pub saturation_current: f64,
    /// Thermal voltage (V0), volts
    pub thermal_voltage: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::reference()
    }
}

impl PhysicalConstants {
    /// The reference cell: n = 0.68, E = 1 V, R = 100 Ω, Is = 1 fA, V0 = 25 mV.
    pub const fn reference() -> Self {
        Self {
            ideality_factor: 0.68,
            emf: 1.0,
            series_resistance: 100.0,
            saturation_current: 1e-15,
            thermal_voltage: 0.025,
        }
    }

    /// Set the ideality factor.
    pub fn with_ideality_factor(mut self, n: f64) -> Self {
        self.ideality_factor = n;
        self
    }

    /// Set the source EMF (in volts).
    pub fn with_emf(mut self, emf: f64) -> Self {
        self.emf = emf;
        self
    }

    /// Set the series resistance (in ohms).
    pub fn with_series_resistance(mut self, r: f64) -> Self {
        self.series_resistance = r;
        self
    }

    /// Set the saturation current (in amperes).
    pub fn with_saturation_current(mut self, is: f64) -> Self {
        self.saturation_current = is;
        self
    }

    /// Set the thermal voltage (in volts).
    pub fn with_thermal_voltage(mut self, v0: f64) -> Self {
        self.thermal_voltage = v0;
        self
    }

    /// Scale applied to the voltage inside the exponential: `n / V0`.
    ///
    /// Kept as `n / V0` (not `1 / (n * V0)`) so the exponent matches the
    /// reference cell's law exactly.
    pub fn exponent_scale(&self) -> f64 {
        self.ideality_factor / self.thermal_voltage
    }
}

impl fmt::Display for PhysicalConstants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={}, E={} V, R={} Ω, Is={:e} A, V0={} V",
            self.ideality_factor,
            self.emf,
            self.series_resistance,
            self.saturation_current,
            self.thermal_voltage
        )
    }
}

/// Circuit state at a solved voltage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Voltage across the diode (V)
    pub voltage: f64,
    /// Current through the diode (A)
    pub diode_current: f64,
    /// Load-line current delivered by the generator (A)
    pub generator_current: f64,
}
