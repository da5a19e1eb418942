//! Error types for the load-line solver.
//!
//! This module provides a unified error type [`LoadlineError`] for the
//! conditions that are genuine errors: rejected parameters and failed
//! output files. Numerical failures of the root finders are not errors;
//! they are reported through [`crate::solver::RootStatus`].

use thiserror::Error;

/// Result type alias using [`LoadlineError`].
pub type Result<T> = std::result::Result<T, LoadlineError>;

/// Unified error type for all load-line operations.
#[derive(Error, Debug)]
pub enum LoadlineError {
    // ============ Parameter Errors ============
    /// A physical constant is non-positive or not finite
    #[error("Invalid physical constant '{param}' (value: {value}): must be positive and finite")]
    InvalidParameter { param: &'static str, value: f64 },

    /// Tolerance or iteration budget cannot drive a solver
    #[error("Invalid solver configuration: {message}")]
    InvalidSolverConfig { message: String },

    /// Sweep range cannot be sampled
    #[error("Invalid sweep configuration: {message}")]
    InvalidSweep { message: String },

    // ============ I/O Errors ============
    /// Error writing the I-V sweep file
    #[error("Failed to write sweep file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoadlineError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(param: &'static str, value: f64) -> Self {
        Self::InvalidParameter { param, value }
    }

    /// Create an invalid solver configuration error
    pub fn invalid_solver_config(message: impl Into<String>) -> Self {
        Self::InvalidSolverConfig {
            message: message.into(),
        }
    }

    /// Create an invalid sweep error
    pub fn invalid_sweep(message: impl Into<String>) -> Self {
        Self::InvalidSweep {
            message: message.into(),
        }
    }

    /// Create a file write error
    pub fn file_write(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileWriteError {
            path: path.display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_names_the_constant() {
        let err = LoadlineError::invalid_parameter("series_resistance", -1.0);
        let msg = err.to_string();
        assert!(msg.contains("series_resistance"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn test_file_write_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LoadlineError::file_write(std::path::Path::new("/tmp/iv.txt"), io);
        assert!(err.to_string().contains("/tmp/iv.txt"));
        assert!(err.source().is_some());
    }
}
