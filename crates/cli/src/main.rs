//! Testbench runner CLI.
//!
//! This binary drives the reference `top` design through one fixed run. It performs:
//! 1. **Argument forwarding:** Every process argument is handed to the design as a plusarg.
//! 2. **Reset and free-run:** Holds reset for the configured steps, then clocks until the horizon.
//! 3. **Waveform output:** Writes `waveform.vcd` in the working directory and prints a run summary.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tbsim_core::config::Config;
use tbsim_core::design::Top;
use tbsim_core::sim::{Driver, PlusArgs};
use tbsim_core::stats::RunSummary;
use tbsim_core::trace::VcdRecorder;

#[derive(Parser, Debug)]
#[command(
    name = "tb_top",
    author,
    version,
    about = "Clock-driving testbench for the reference top design",
    long_about = "Holds reset for 5 half-periods, free-runs a 10-unit clock until t=1000, and writes waveform.vcd.\n\nAll arguments are forwarded to the design as plusargs.\n\nExamples:\n  tb_top\n  tb_top +reset_value=42"
)]
struct Cli {
    /// Arguments forwarded to the design (e.g. `+reset_value=42`).
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli.args) {
        Ok(summary) => {
            summary.print();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "testbench failed");
            eprintln!("\n[!] FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr `fmt` subscriber; `RUST_LOG` overrides the default `info` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs the reference design with the default configuration.
///
/// # Arguments
///
/// * `args` - Process arguments, forwarded verbatim to the design.
fn run(args: &[String]) -> tbsim_core::Result<RunSummary> {
    let config = Config::default();
    println!(
        "Configuration: default (period {}, reset steps {}, horizon {})",
        config.clock.period, config.clock.reset_cycles, config.run.max_sim_time
    );

    let mut driver =
        Driver::new(Top::new(), VcdRecorder::new(), config).with_args(PlusArgs::parse(args));
    driver.run()
}
