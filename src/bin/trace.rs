//! Trace: Headless Voltage Stream of a Chaotic Oscillator
//!
//! Drives an oscillator frame by frame the way an interactive display
//! would, records a trail of voltage points, and prints it as CSV.
//! Stepping halts as soon as the output leaves the sane region.
//!
//! The speed setting dilates simulated time:
//!
//!   dt = 10^(3·speed/100) / sample_rate

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use analog_chaos::telemetry::init_tracing;
use analog_chaos::{
    stream, AttractorKind, StreamConfig, StreamReport, Trail, DEFAULT_TRAIL_LENGTH, DISPLAY_RADIUS, KINDS,
    SAMPLE_RATE,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the voltage trail of a chaotic oscillator")]
struct Cli {
    /// Attractor key (aiza, boul, ruck, sprot)
    kind: String,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: usize,

    /// Time dilation, 0 (real time) to 100 (1000x)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=100))]
    speed: u32,

    /// Updates per real second
    #[arg(long, default_value_t = SAMPLE_RATE)]
    sample_rate: f64,

    /// Frames per real second
    #[arg(long, default_value_t = 60)]
    frame_rate: u32,

    /// Simulated seconds between recorded points
    #[arg(long, default_value_t = 0.01)]
    plot_interval: f64,

    /// Maximum number of recorded points
    #[arg(long, default_value_t = DEFAULT_TRAIL_LENGTH)]
    trail: usize,
}

/// Outcome of a trace run
struct Trace {
    trail: Trail,
    report: StreamReport,
}

fn trace(cli: &Cli) -> Result<Trace> {
    let kind: AttractorKind = cli
        .kind
        .parse()
        .with_context(|| format!("valid kinds are: {}", KINDS.join(", ")))?;

    let config = StreamConfig {
        sample_rate: cli.sample_rate,
        frame_rate: cli.frame_rate,
        speed: cli.speed,
        plot_interval: cli.plot_interval,
        frames: cli.frames,
        ..StreamConfig::default()
    };

    let mut osc = kind.oscillator();
    let mut trail = Trail::new(cli.trail);
    info!(attractor = osc.name(), dt = config.dt(), samples_per_frame = config.samples_per_frame(), "tracing");

    let report = stream(&mut osc, &config, &mut trail)?;
    Ok(Trace { trail, report })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_tracing() {
        eprintln!("{err}");
    }

    let result = match trace(&cli) {
        Ok(result) => result,
        Err(err) => {
            error!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    println!("vx,vy,vz");
    for row in result.trail.to_array().rows() {
        println!("{:.6},{:.6},{:.6}", row[0], row[1], row[2]);
    }

    if let Some(extent) = result.trail.extent() {
        eprintln!(
            "{} of {} points over {} frames",
            result.trail.len(),
            result.trail.capacity(),
            result.report.frames
        );
        eprintln!("{}", extent);
    }

    if let Some(halt) = result.report.halt {
        eprintln!(
            "FAILURE: output left the radius {} region at t = {:.3} (frame {})",
            DISPLAY_RADIUS, halt.time, halt.frame
        );
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
