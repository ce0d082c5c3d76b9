use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use orbit_simulation::telemetry_system::export::{save_csv, save_json};
use orbit_simulation::*;

/// Propagates a satellite around a point-mass body and prints its telemetry.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Scenario JSON file; the reference scenario when omitted
    scenario: Option<PathBuf>,
    /// Write the trajectory as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Write the trajectory as JSON
    #[arg(long)]
    json: Option<PathBuf>,
    /// Stop after this many integration steps
    #[arg(long)]
    max_steps: Option<usize>,
    /// Stop after this many seconds of wall-clock time
    #[arg(long)]
    wall_clock_secs: Option<u64>,
}

impl Cli {
    fn budget(&self) -> RunBudget {
        RunBudget {
            max_steps: self.max_steps,
            wall_clock: self.wall_clock_secs.map(Duration::from_secs),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let scenario = match &cli.scenario {
        Some(path) => Scenario::from_json_file(path)?,
        None => {
            info!("No scenario file given, running the reference scenario");
            Scenario::default()
        }
    };
    scenario.validate()?;

    let initial = OrbitalElementResolver::resolve(&scenario.elements, &scenario.constants)?;
    let recorder = TrajectoryRecorder::new(scenario.constants, scenario.config);

    let trajectory = match recorder.record_with_budget(initial, cli.budget()) {
        Ok(recording) => {
            if let Termination::Stopped { at_step } = recording.termination {
                warn!("Run budget exhausted, stopped at step {}", at_step);
            }
            recording.trajectory
        }
        Err(failure) => {
            println!("Error during simulation: {}", failure);
            if !failure.partial.is_empty() {
                Telemetry::from_trajectory(&failure.partial, 100).display_data();
            }
            return Err(failure.into());
        }
    };

    let telemetry = Telemetry::from_trajectory(&trajectory, 100);
    telemetry.display_data();

    if let Some(last) = Playback::with_defaults(&trajectory).frames().last() {
        println!("\nFinal frame: {}", last.readout());
    }

    if let Some(path) = &cli.csv {
        save_csv(&trajectory, path)?;
    }
    if let Some(path) = &cli.json {
        save_json(&trajectory, path)?;
    }

    Ok(())
}
