//! Tabular and JSON encodings of a trajectory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::errors::SimulationError;
use crate::telemetry_system::trajectory::Trajectory;

pub const CSV_HEADER: &str = "time,x,y,z,vx,vy,vz,altitude,speed,energy";

/// One row per sample, SI units.
pub fn write_csv<W: Write>(trajectory: &Trajectory, mut writer: W) -> Result<(), SimulationError> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for s in trajectory {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{}",
            s.time,
            s.position.x,
            s.position.y,
            s.position.z,
            s.velocity.x,
            s.velocity.y,
            s.velocity.z,
            s.altitude,
            s.speed,
            s.energy
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(trajectory: &Trajectory, writer: W) -> Result<(), SimulationError> {
    serde_json::to_writer_pretty(writer, trajectory)?;
    Ok(())
}

pub fn save_csv<P: AsRef<Path>>(trajectory: &Trajectory, path: P) -> Result<(), SimulationError> {
    let path = path.as_ref();
    write_csv(trajectory, BufWriter::new(File::create(path)?))?;
    info!("Wrote {} samples to {}", trajectory.len(), path.display());
    Ok(())
}

pub fn save_json<P: AsRef<Path>>(trajectory: &Trajectory, path: P) -> Result<(), SimulationError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(trajectory, &mut writer)?;
    writer.flush()?;
    info!("Wrote {} samples to {}", trajectory.len(), path.display());
    Ok(())
}
