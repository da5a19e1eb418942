//! # Loadline
//!
//! Operating-point solver for a diode (or solar cell) driven through a
//! series resistance.
//!
//! This library provides:
//! - The circuit residual `f(U) = E - U - R * Is * (exp(U * n / V0) - 1)` and its derivative
//! - Newton-Raphson and bisection root finders with explicit failure modes
//! - I-V sweep export for plotting
//! - A console report of both solvers' results
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Physical constants, residual evaluation, operating point
//! - [`solver`] - Newton-Raphson and bisection root finding
//! - [`sweep`] - Tabulated I-V export
//! - [`report`] - Human-readable solver report
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! loadline --initial-guess 0.7 --bracket-low 0 --bracket-high 1 --output iv_data.txt
//! ```
//!
//! ### Library
//!
//! ```
//! use loadline::{bisection, newton, CircuitModel, PhysicalConstants, SolverConfig};
//!
//! let model = CircuitModel::new(PhysicalConstants::reference());
//! let config = SolverConfig::default();
//!
//! let n = newton(&model, 0.7, &config);
//! let b = bisection(&model, 0.0, 1.0, &config);
//! assert!(n.converged() && b.converged());
//! assert!((n.value.unwrap() - b.value.unwrap()).abs() < 1e-5);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmLoadline } from 'loadline';
//!
//! const solver = new WasmLoadline(0.68, 1.0, 100, 1e-15, 0.025);
//! const u = solver.newton(0.7);
//! ```

pub mod circuit;
pub mod error;
pub mod report;
pub mod solver;
pub mod sweep;

// Re-export main types for convenience
pub use circuit::{CircuitModel, OperatingPoint, PhysicalConstants};
pub use error::{LoadlineError, Result};
pub use solver::{bisection, newton, Residual, RootResult, RootStatus, SolverConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmLoadline;

/// Default Newton starting point (V)
pub const DEFAULT_INITIAL_GUESS: f64 = 0.7;

/// Default bisection bracket (V)
pub const DEFAULT_BRACKET: (f64, f64) = (0.0, 1.0);
