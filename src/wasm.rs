//! WASM bindings for Loadline.
//!
//! This module provides JavaScript-friendly bindings so the solver can back
//! an interactive load-line plot in a browser.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmLoadline } from 'loadline';
//!
//! await init();
//!
//! const solver = new WasmLoadline(0.68, 1.0, 100, 1e-15, 0.025);
//!
//! const uNewton = solver.newton(0.7);        // undefined on failure
//! const uBisect = solver.bisection(0.0, 1.0);
//! const table = solver.sweep_table(0.0, 0.01, 101);
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{validate_constants, CircuitModel, PhysicalConstants};
use crate::error::LoadlineError;
use crate::solver::{self, RootResult, SolverConfig};
use crate::sweep::{self, SweepConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: LoadlineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible operating point solver.
///
/// Wraps a [`CircuitModel`] and a [`SolverConfig`]; each call is independent.
#[wasm_bindgen]
pub struct WasmLoadline {
    model: CircuitModel,
    config: SolverConfig,
    last: Option<RootResult>,
}

#[wasm_bindgen]
impl WasmLoadline {
    /// Create a solver for the given constants with default tolerance and budget.
    ///
    /// # Arguments
    /// * `n` - Diode ideality factor
    /// * `emf` - Source EMF in volts
    /// * `r` - Series resistance in ohms
    /// * `is` - Saturation current in amperes
    /// * `v0` - Thermal voltage in volts
    #[wasm_bindgen(constructor)]
    pub fn new(n: f64, emf: f64, r: f64, is: f64, v0: f64) -> Result<WasmLoadline, JsValue> {
        let d = SolverConfig::default();
        Self::with_config(n, emf, r, is, v0, d.tolerance, d.max_iterations)
    }

    /// Create a solver with a custom tolerance and iteration budget.
    #[wasm_bindgen]
    pub fn with_config(
        n: f64,
        emf: f64,
        r: f64,
        is: f64,
        v0: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> Result<WasmLoadline, JsValue> {
        let constants = PhysicalConstants {
            ideality_factor: n,
            emf,
            series_resistance: r,
            saturation_current: is,
            thermal_voltage: v0,
        };
        validate_constants(&constants).map_err(to_js)?;

        let config = SolverConfig::new()
            .with_tolerance(tolerance)
            .with_max_iterations(max_iterations);
        config.validate().map_err(to_js)?;

        Ok(WasmLoadline {
            model: CircuitModel::new(constants),
            config,
            last: None,
        })
    }

    /// Newton-Raphson from `initial_guess`.
    ///
    /// Returns the converged voltage, or `undefined` on any failure.
    #[wasm_bindgen]
    pub fn newton(&mut self, initial_guess: f64) -> Option<f64> {
        let result = solver::newton(&self.model, initial_guess, &self.config);
        self.last = Some(result);
        result.value.filter(|_| result.converged())
    }

    /// Bisection on `[a, b]`.
    ///
    /// Returns the converged voltage, or `undefined` on any failure.
    #[wasm_bindgen]
    pub fn bisection(&mut self, a: f64, b: f64) -> Option<f64> {
        let result = solver::bisection(&self.model, a, b, &self.config);
        self.last = Some(result);
        result.value.filter(|_| result.converged())
    }

    /// Iterations used by the most recent solve (0 if none).
    #[wasm_bindgen(getter)]
    pub fn last_iterations(&self) -> usize {
        self.last.map_or(0, |r| r.iterations)
    }

    /// Termination reason of the most recent solve.
    #[wasm_bindgen(getter)]
    pub fn last_status(&self) -> Option<String> {
        self.last.map(|r| r.status.to_string())
    }

    /// Diode current at voltage `u`.
    #[wasm_bindgen]
    pub fn diode_current(&self, u: f64) -> f64 {
        self.model.diode_current(u)
    }

    /// Generator current at voltage `u`.
    #[wasm_bindgen]
    pub fn generator_current(&self, u: f64) -> f64 {
        self.model.generator_current(u)
    }

    /// Sweep as a flat array `[U0, Id0, Ig0, U1, Id1, Ig1, ...]`.
    #[wasm_bindgen]
    pub fn sweep_table(&self, start: f64, step: f64, points: usize) -> Result<Vec<f64>, JsValue> {
        let config = SweepConfig::new()
            .with_start(start)
            .with_step(step)
            .with_points(points);
        config.validate().map_err(to_js)?;

        Ok(sweep::sweep(&self.model, &config)
            .iter()
            .flat_map(|row| [row.voltage, row.diode_current, row.generator_current])
            .collect())
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
