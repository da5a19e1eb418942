//! Loadline - diode/load-line operating point solver
//!
//! Solves for the operating point with both Newton-Raphson and bisection,
//! prints the results and writes the I-V sweep for plotting.
//!
//! # Usage
//!
//! ```bash
//! loadline --emf 1.0 --resistance 100 --output iv_data.txt
//! gnuplot -e "plot 'iv_data.txt' u 1:2 w l, '' u 1:3 w l"
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use loadline::{
    bisection,
    circuit::validate_constants,
    error::Result,
    newton,
    report::{sweep_written, Report},
    sweep::{sweep, write_sweep_file, SweepConfig, DEFAULT_SWEEP_PATH},
    CircuitModel, PhysicalConstants, SolverConfig, DEFAULT_BRACKET, DEFAULT_INITIAL_GUESS,
};

const REFERENCE: PhysicalConstants = PhysicalConstants::reference();

/// Diode/load-line operating point solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Diode ideality factor (n)
    #[arg(long, default_value_t = REFERENCE.ideality_factor)]
    ideality: f64,

    /// Source EMF in volts (E)
    #[arg(long, default_value_t = REFERENCE.emf)]
    emf: f64,

    /// Series resistance in ohms (R)
    #[arg(long, default_value_t = REFERENCE.series_resistance)]
    resistance: f64,

    /// Diode saturation current in amperes (Is)
    #[arg(long, default_value_t = REFERENCE.saturation_current)]
    saturation_current: f64,

    /// Thermal voltage in volts (V0)
    #[arg(long, default_value_t = REFERENCE.thermal_voltage)]
    thermal_voltage: f64,

    /// Convergence tolerance in volts
    #[arg(long, default_value_t = loadline::solver::DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Iteration budget for each solver
    #[arg(long, default_value_t = loadline::solver::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Newton starting voltage
    #[arg(long, default_value_t = DEFAULT_INITIAL_GUESS, allow_hyphen_values = true)]
    initial_guess: f64,

    /// Lower end of the bisection bracket
    #[arg(long, default_value_t = DEFAULT_BRACKET.0, allow_hyphen_values = true)]
    bracket_low: f64,

    /// Upper end of the bisection bracket
    #[arg(long, default_value_t = DEFAULT_BRACKET.1, allow_hyphen_values = true)]
    bracket_high: f64,

    /// Path of the I-V sweep file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_SWEEP_PATH)]
    output: PathBuf,

    /// Number of sweep rows
    #[arg(long, default_value_t = SweepConfig::default().points)]
    points: usize,

    /// Sweep voltage step in volts
    #[arg(long, default_value_t = SweepConfig::default().step)]
    step: f64,

    /// Skip writing the sweep file
    #[arg(long)]
    no_sweep: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Build and check the inputs before any solve
    let constants = PhysicalConstants {
        ideality_factor: args.ideality,
        emf: args.emf,
        series_resistance: args.resistance,
        saturation_current: args.saturation_current,
        thermal_voltage: args.thermal_voltage,
    };
    validate_constants(&constants)?;

    let config = SolverConfig::new()
        .with_tolerance(args.tolerance)
        .with_max_iterations(args.max_iterations);
    config.validate()?;

    let sweep_config = SweepConfig::new()
        .with_points(args.points)
        .with_step(args.step);
    if !args.no_sweep {
        sweep_config.validate()?;
    }

    log::info!("constants: {constants}");
    let model = CircuitModel::new(constants);

    // Newton first, then bisection
    let root_newton = newton(&model, args.initial_guess, &config);
    let root_bisect = bisection(&model, args.bracket_low, args.bracket_high, &config);

    let report = Report::new(&model, root_newton, root_bisect);
    println!("{report}");

    if args.no_sweep {
        return Ok(());
    }

    // A failed export must not discard the results printed above
    let rows = sweep(&model, &sweep_config);
    match write_sweep_file(&args.output, &rows) {
        Ok(()) => println!("{}", sweep_written(&args.output)),
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
        }
    }

    Ok(())
}
