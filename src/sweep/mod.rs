//! Tabulated I-V sweep export.
//!
//! Samples the diode and generator currents over a voltage range and writes
//! them as whitespace-separated columns, ready for gnuplot or similar:
//!
//! ```text
//! # U[V]    I_diode[A]     I_generator[A]
//! 0.00 0.000000000000e+00 1.000000000000e-02
//! 0.01 3.125870013111e-16 9.900000000000e-03
//! ...
//! ```

mod format;

pub use format::scientific;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::circuit::CircuitModel;
use crate::error::{LoadlineError, Result};

/// Header line of the sweep file.
pub const SWEEP_HEADER: &str = "# U[V]    I_diode[A]     I_generator[A]";

/// Resolution of the voltage column, which is written with two decimals (V).
pub const VOLTAGE_RESOLUTION: f64 = 0.01;

/// Default sweep file name.
pub const DEFAULT_SWEEP_PATH: &str = "iv_data.txt";

/// Voltage range to sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// First voltage (V)
    pub start: f64,
    /// Voltage increment between rows (V)
    pub step: f64,
    /// Number of rows
    pub points: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            step: 0.01,
            points: 101,
        }
    }
}

impl SweepConfig {
    /// Create a new configuration with default values (0 V to 1 V, 10 mV steps).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first voltage.
    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Set the voltage step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the number of rows.
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    /// Voltage of row `i`. Computed directly, not accumulated.
    pub fn voltage(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    /// Check the range yields at least one strictly increasing row.
    ///
    /// `start` and `step` must be whole multiples of [`VOLTAGE_RESOLUTION`],
    /// otherwise the two-decimal voltage column would round rows together or
    /// print a voltage other than the one the currents were computed at.
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() {
            return Err(LoadlineError::invalid_sweep(format!(
                "start voltage must be finite, got {}",
                self.start
            )));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(LoadlineError::invalid_sweep(format!(
                "step must be positive and finite, got {}",
                self.step
            )));
        }
        if !on_voltage_grid(self.start) {
            return Err(LoadlineError::invalid_sweep(format!(
                "start voltage must be a multiple of {VOLTAGE_RESOLUTION} V, got {}",
                self.start
            )));
        }
        if !on_voltage_grid(self.step) {
            return Err(LoadlineError::invalid_sweep(format!(
                "step must be a multiple of {VOLTAGE_RESOLUTION} V, got {}",
                self.step
            )));
        }
        if self.points == 0 {
            return Err(LoadlineError::invalid_sweep("points must be at least 1"));
        }
        Ok(())
    }
}

fn on_voltage_grid(v: f64) -> bool {
    let ticks = v / VOLTAGE_RESOLUTION;
    (ticks - ticks.round()).abs() < 1e-6
}

/// One sample of the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub voltage: f64,
    pub diode_current: f64,
    pub generator_current: f64,
}

/// Sample the circuit over the configured range.
pub fn sweep(model: &CircuitModel, config: &SweepConfig) -> Vec<SweepRow> {
    (0..config.points)
        .map(|i| {
            let point = model.evaluate(config.voltage(i));
            SweepRow {
                voltage: point.voltage,
                diode_current: point.diode_current,
                generator_current: point.generator_current,
            }
        })
        .collect()
}

/// Write the header and rows to `out`.
pub fn write_sweep<W: Write>(out: &mut W, rows: &[SweepRow]) -> std::io::Result<()> {
    writeln!(out, "{SWEEP_HEADER}")?;
    for row in rows {
        writeln!(
            out,
            "{:.2} {} {}",
            row.voltage,
            scientific(row.diode_current, 12),
            scientific(row.generator_current, 12)
        )?;
    }
    out.flush()
}

/// Write the sweep to a file, replacing any existing content.
pub fn write_sweep_file(path: &Path, rows: &[SweepRow]) -> Result<()> {
    let file = File::create(path).map_err(|e| LoadlineError::file_write(path, e))?;
    let mut out = BufWriter::new(file);
    write_sweep(&mut out, rows).map_err(|e| LoadlineError::file_write(path, e))?;
    log::debug!("sweep: wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_sweep_covers_zero_to_one_volt() {
        let rows = sweep(&CircuitModel::default(), &SweepConfig::default());
        assert_eq!(rows.len(), 101);
        assert_eq!(rows[0].voltage, 0.0);
        assert_relative_eq!(rows[100].voltage, 1.0);
        assert!(rows.windows(2).all(|w| w[0].voltage < w[1].voltage));
    }

    #[test]
    fn test_rows_match_model() {
        let model = CircuitModel::default();
        let config = SweepConfig::new().with_start(0.5).with_points(7);
        for (i, row) in sweep(&model, &config).iter().enumerate() {
            let u = config.voltage(i);
            assert_eq!(row.voltage, u);
            assert_eq!(row.diode_current, model.diode_current(u));
            assert_eq!(row.generator_current, model.generator_current(u));
        }
    }

    #[test]
    fn test_written_layout() {
        let rows = sweep(&CircuitModel::default(), &SweepConfig::new().with_points(2));
        let mut buf = Vec::new();
        write_sweep(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], SWEEP_HEADER);
        assert_eq!(lines[1], "0.00 0.000000000000e+00 1.000000000000e-02");
        assert!(lines[2].starts_with("0.01 "));
        assert!(lines[2].ends_with(" 9.900000000000e-03"));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(SweepConfig::new().with_points(0).validate().is_err());
        assert!(SweepConfig::new().with_step(0.0).validate().is_err());
        assert!(SweepConfig::new().with_step(-0.01).validate().is_err());
        assert!(SweepConfig::new().with_start(f64::INFINITY).validate().is_err());
        assert!(SweepConfig::default().validate().is_ok());
    }

    #[test]
    fn test_steps_finer_than_column_rejected() {
        assert!(SweepConfig::new().with_step(0.001).with_points(11).validate().is_err());
        assert!(SweepConfig::new().with_step(0.015).validate().is_err());
        assert!(SweepConfig::new().with_start(0.005).validate().is_err());
        assert!(SweepConfig::new().with_step(0.05).with_start(-0.2).validate().is_ok());
    }

    #[test]
    fn test_written_voltage_column_strictly_increasing() {
        let config = SweepConfig::new().with_start(-0.2).with_step(0.05).with_points(15);
        config.validate().unwrap();
        let rows = sweep(&CircuitModel::default(), &config);
        let mut buf = Vec::new();
        write_sweep(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let written: Vec<f64> = text
            .lines()
            .skip(1)
            .map(|line| line.split_whitespace().next().unwrap().parse().unwrap())
            .collect();

        assert_eq!(written.len(), 15);
        assert!(written.windows(2).all(|w| w[0] < w[1]), "{written:?}");
        for (i, u) in written.iter().enumerate() {
            assert_relative_eq!(*u, config.voltage(i), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("iv_data.txt");
        let err = write_sweep_file(&path, &[]).unwrap_err();
        assert!(matches!(err, LoadlineError::FileWriteError { .. }));
    }
}
