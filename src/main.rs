use clap::Parser;
use gps_hover::hardware::{LoggingMotorDriver, SimulatedAccelerometer, SystemTimer};
use gps_hover::{AxisReading, LevelingConfig, LevelingController};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Run the leveling loop against a simulated accelerometer
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON configuration file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many control cycles instead of running forever
    #[arg(short = 'n', long)]
    cycles: Option<u64>,

    /// Peak deviation of the simulated tilt (raw accelerometer units)
    #[arg(long, default_value_t = 4.0)]
    wobble: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => LevelingConfig::from_file(path)?,
        None => LevelingConfig::default(),
    };
    info!(?config, "loaded configuration");

    // Resting pyboard reading: flat, 1 g on z
    let accelerometer = SimulatedAccelerometer::new(AxisReading::new(0.0, 0.0, 21.0), args.wobble);
    let mut controller =
        LevelingController::new(config, accelerometer, LoggingMotorDriver::new(), SystemTimer::new())?;

    match args.cycles {
        Some(cycles) => {
            controller.run_for(cycles)?;
            info!(cycles, "leveling loop finished");
        }
        None => controller.run()?,
    }

    Ok(())
}
