//! gas-station — runs the two-stage gas station simulation from a TOML file.
//!
//! ```bash
//! gas-station --config config.toml --csv-dir output/run1 --seed 7
//! RUST_LOG=gs_sim=debug gas-station --timing include-queue-wait
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gs_core::{Car, TimingMode, load_config_path};
use gs_output::{CsvWriter, SimOutputObserver, render_config, render_report};
use gs_sim::{SimBuilder, SimObserver, SimPhase};
use gs_stats::StatsReport;

/// Gas station simulation
///
/// Cars arrive, fuel at a station matching their fuel type, then pay at a
/// register.  Prints per-fuel and register statistics when every car has
/// left.
#[derive(Parser, Debug)]
#[command(name = "gas-station")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long, default_value = "config.toml")]
    config: PathBuf,

    /// Write cars.csv and summary.csv into this directory
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Override the configured RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured timing mode
    #[arg(long, value_enum)]
    timing: Option<TimingArg>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum TimingArg {
    ServiceOnly,
    IncludeQueueWait,
}

impl From<TimingArg> for TimingMode {
    fn from(arg: TimingArg) -> Self {
        match arg {
            TimingArg::ServiceOnly      => TimingMode::ServiceOnly,
            TimingArg::IncludeQueueWait => TimingMode::IncludeQueueWait,
        }
    }
}

// ── Observer ─────────────────────────────────────────────────────────────────

/// Logs progress and forwards to the CSV observer when one is configured.
struct ProgressObserver {
    csv:       Option<SimOutputObserver<CsvWriter>>,
    total:     u32,
    completed: u32,
}

impl SimObserver for ProgressObserver {
    fn on_phase(&mut self, phase: SimPhase) {
        if let Some(csv) = &mut self.csv {
            csv.on_phase(phase);
        }
    }

    fn on_car_completed(&mut self, car: &Car) {
        self.completed += 1;
        info!(
            car      = %car.id,
            fuel     = %car.fuel,
            station  = %car.station_id,
            register = %car.register_id,
            done     = self.completed,
            total    = self.total,
            "car left the station"
        );
        if let Some(csv) = &mut self.csv {
            csv.on_car_completed(car);
        }
    }

    fn on_sim_end(&mut self, report: &StatsReport) {
        if let Some(csv) = &mut self.csv {
            csv.on_sim_end(report);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let config = load_config_path(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let mut builder = SimBuilder::new(config);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    if let Some(timing) = cli.timing {
        builder = builder.timing(timing.into());
    }
    let mut sim = builder.build().context("invalid configuration")?;
    println!("{}", render_config(&sim.config));

    let csv = match &cli.csv_dir {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("creating CSV output in {}", dir.display()))?;
            Some(SimOutputObserver::new(writer, sim.config.timing))
        }
        None => None,
    };
    let mut obs = ProgressObserver { csv, total: sim.config.cars.count, completed: 0 };

    let t0 = Instant::now();
    let report = sim.run(&mut obs)?;
    info!(elapsed = ?t0.elapsed(), cars = obs.completed, "run finished");

    if let Some(csv) = &mut obs.csv {
        if let Some(e) = csv.take_error() {
            return Err(e).context("writing CSV output");
        }
        if let Some(dir) = &cli.csv_dir {
            println!("Wrote {} car rows to {}", csv.rows_written(), dir.display());
        }
    }

    println!("{}", render_report(&report));
    Ok(())
}
