//! Circuit model for the diode/load-line operating point.
//!
//! The circuit is a single diode (or solar cell) fed by a source of EMF `E`
//! through a series resistance `R`. Kirchhoff's current law at the diode
//! node gives the residual
//!
//! ```text
//! f(U) = E - U - R * Is * (exp(U * n / V0) - 1)
//! ```
//!
//! whose root is the operating voltage. This module holds the constant set,
//! the evaluator for `f` and `f'`, and the derived [`OperatingPoint`].

mod model;
mod types;
mod validate;

pub use model::CircuitModel;
pub use types::*;
pub use validate::validate_constants;
