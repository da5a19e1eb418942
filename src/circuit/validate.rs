//! Physical constant validation.

use crate::error::{LoadlineError, Result};

use super::PhysicalConstants;

/// Validate a constant set before it is handed to the solvers.
///
/// Checks that every constant is finite and strictly positive. The residual
/// is only guaranteed to be strictly decreasing under those conditions,
/// which bisection relies on.
pub fn validate_constants(constants: &PhysicalConstants) -> Result<()> {
    let fields = [
        ("ideality_factor", constants.ideality_factor),
        ("emf", constants.emf),
        ("series_resistance", constants.series_resistance),
        ("saturation_current", constants.saturation_current),
        ("thermal_voltage", constants.thermal_voltage),
    ];

    for (param, value) in fields {
        if !value.is_finite() || value <= 0.0 {
            return Err(LoadlineError::invalid_parameter(param, value));
        }
    }

    Ok(())
}
