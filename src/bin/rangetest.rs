//! Range Test: Offline Calibration of Chaotic Oscillators
//!
//! Two modes:
//!
//! - `range`: settle, then measure the raw output range to hard-code
//!   into an attractor variant
//! - `stability`: dilating search for the largest stable Euler step of a
//!   tuned attractor
//!
//! Run one attractor by key, or every registered attractor with `--all`.
//! Exits non-zero if any run fails.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

use analog_chaos::telemetry::init_tracing;
use analog_chaos::{
    discover_range, search_max_dt, AttractorKind, ChaosError, RangeConfig, StabilityConfig, KINDS,
    RANGE_LIMIT, SAMPLE_RATE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Discover the output range
    Range,
    /// Search for the maximum stable time step
    Stability,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Calibrate chaotic oscillators by simulation")]
struct Cli {
    /// Attractor key (aiza, boul, ruck, sprot)
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    kind: Option<String>,

    /// Run for every registered attractor
    #[arg(long)]
    all: bool,

    /// Calibration to perform
    #[arg(long, value_enum, default_value_t = Mode::Range)]
    mode: Mode,

    /// Updates per simulated second
    #[arg(long, default_value_t = SAMPLE_RATE)]
    sample_rate: f64,

    /// Simulated seconds discarded before measuring
    #[arg(long, default_value_t = 60.0)]
    settle_seconds: f64,

    /// Simulated seconds of range measurement
    #[arg(long, default_value_t = 4.0 * 3600.0)]
    measure_seconds: f64,

    /// Simulated seconds per stability trial
    #[arg(long, default_value_t = 600.0)]
    trial_seconds: f64,

    /// Step size multiplier between stability trials
    #[arg(long, default_value_t = 1.05)]
    growth: f64,

    /// Allowed voltage overshoot during stability trials
    #[arg(long, default_value_t = 0.05)]
    tolerance: f64,

    /// Standard deviation of Gaussian noise added to the start state
    #[arg(long)]
    perturb: Option<f64>,

    /// Seed for --perturb
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl Cli {
    fn kinds(&self) -> Result<Vec<AttractorKind>> {
        if self.all {
            return Ok(AttractorKind::ALL.to_vec());
        }

        let key = self.kind.as_deref().unwrap_or_default();
        let kind = key
            .parse::<AttractorKind>()
            .with_context(|| format!("valid kinds are: {}", KINDS.join(", ")))?;
        Ok(vec![kind])
    }

    fn range_config(&self) -> RangeConfig {
        RangeConfig {
            sample_rate: self.sample_rate,
            settle_seconds: self.settle_seconds,
            measure_seconds: self.measure_seconds,
            limit: RANGE_LIMIT,
        }
    }

    fn stability_config(&self) -> StabilityConfig {
        StabilityConfig {
            start_dt: 1.0 / self.sample_rate,
            growth: self.growth,
            trial_seconds: self.trial_seconds,
            tolerance: self.tolerance,
            ..StabilityConfig::default()
        }
    }
}

fn range_test(kind: AttractorKind, cli: &Cli) -> Result<()> {
    let mut osc = kind.oscillator();
    if let Some(noise) = cli.perturb {
        let mut rng = StdRng::seed_from_u64(cli.seed);
        osc.perturb(noise, &mut rng)?;
    }

    let report = discover_range(&mut osc, &cli.range_config())?;
    let s = report.settled;
    let f = report.finished;

    println!("Settled  at: x={:10.6}, y={:10.6}, z={:10.6}", s.x, s.y, s.z);
    println!("Finished at: x={:10.6}, y={:10.6}, z={:10.6}", f.x, f.y, f.z);
    println!("{}", report.range);
    Ok(())
}

fn stability_test(kind: AttractorKind, cli: &Cli) -> Result<()> {
    let mut osc = kind.oscillator();
    let report = match search_max_dt(&mut osc, &cli.stability_config()) {
        Err(ChaosError::Untuned(name)) if cli.all => {
            println!("Skipping {}: no known calibration range.", name);
            return Ok(());
        }
        other => other?,
    };

    if let Some(failure) = report.failure {
        println!(
            "Failed at dt = {:.8}: {} = {:.6} (sample {})",
            failure.dt, failure.axis, failure.value, failure.sample
        );
    } else {
        println!("Reached the step ceiling without failure.");
    }

    match report.max_dt {
        Some(max_dt) => println!("Recommended max_dt = {:.8} ({} trials)", max_dt, report.trials),
        None => bail!("{} is unstable even at the starting step", osc.name()),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_tracing() {
        eprintln!("{err}");
    }

    let kinds = match cli.kinds() {
        Ok(kinds) => kinds,
        Err(err) => {
            error!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0;
    for kind in kinds {
        println!("═══════════════════════════════════════════════════════════════");
        println!("  {} ({:?} mode)", kind.name(), cli.mode);
        println!("═══════════════════════════════════════════════════════════════");

        let result = match cli.mode {
            Mode::Range => range_test(kind, &cli),
            Mode::Stability => stability_test(kind, &cli),
        };

        match result {
            Ok(()) => info!(kind = %kind, "calibration complete"),
            Err(err) => {
                error!(kind = %kind, "{err:#}");
                failures += 1;
            }
        }
        println!();
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
