use crate::telemetry_system::trajectory::{relative_energy_drift, Trajectory, TrajectorySample};
use crate::utils::format::{format_altitude, format_time, format_vector3d};

pub struct Telemetry {
    pub log: Vec<String>,
    log_interval: usize,
    samples_seen: usize,
    max_speed: f64,
    max_altitude: f64,
    min_altitude: f64,
    initial_energy: Option<f64>,
    // None once the initial energy makes relative drift undefined
    max_energy_drift: Option<f64>,
    simulation_time: f64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Telemetry::new(1)
    }
}

impl Telemetry {
    /// Keeps a formatted log line for every `log_interval`-th sample.
    pub fn new(log_interval: usize) -> Self {
        Telemetry {
            log: Vec::new(),
            log_interval: log_interval.max(1),
            samples_seen: 0,
            max_speed: 0.0,
            max_altitude: f64::MIN,
            min_altitude: f64::MAX,
            initial_energy: None,
            max_energy_drift: Some(0.0),
            simulation_time: 0.0,
        }
    }

    pub fn from_trajectory(trajectory: &Trajectory, log_interval: usize) -> Self {
        let mut telemetry = Telemetry::new(log_interval);
        for sample in trajectory {
            telemetry.collect_data(sample);
        }
        telemetry
    }

    pub fn collect_data(&mut self, sample: &TrajectorySample) {
        self.simulation_time = sample.time;

        // Update key metrics
        self.max_speed = self.max_speed.max(sample.speed);
        self.max_altitude = self.max_altitude.max(sample.altitude);
        self.min_altitude = self.min_altitude.min(sample.altitude);
        let initial_energy = *self.initial_energy.get_or_insert(sample.energy);
        self.max_energy_drift = self
            .max_energy_drift
            .zip(relative_energy_drift(initial_energy, sample.energy))
            .map(|(max, drift)| max.max(drift));

        if self.samples_seen % self.log_interval == 0 {
            let data = format!(
                "Time: {}\n\
                     Position: {}\n\
                     Velocity: {} (Magnitude: {:.2} m/s)\n\
                     Altitude: {}\n\
                     Energy: {:.6e} J\n",
                format_time(sample.time),
                format_vector3d(&sample.position, "m", 2),
                format_vector3d(&sample.velocity, "m/s", 2),
                sample.speed,
                format_altitude(sample.altitude),
                sample.energy
            );
            self.log.push(data);
        }
        self.samples_seen += 1;
    }

    pub fn samples_seen(&self) -> usize {
        self.samples_seen
    }

    /// `None` before the first sample or when the initial energy is zero.
    pub fn max_energy_drift(&self) -> Option<f64> {
        self.initial_energy.and(self.max_energy_drift)
    }

    pub fn summary(&self) -> String {
        if self.samples_seen == 0 {
            return "No samples recorded".to_string();
        }
        let drift = match self.max_energy_drift {
            Some(drift) => format!("{:.4}%", drift * 100.0),
            None => "n/a (zero initial energy)".to_string(),
        };
        format!(
            "Samples: {}\n\
             Duration: {}\n\
             Max Speed: {:.2} m/s\n\
             Max Altitude: {}\n\
             Min Altitude: {}\n\
             Energy Drift: {}",
            self.samples_seen,
            format_time(self.simulation_time),
            self.max_speed,
            format_altitude(self.max_altitude),
            format_altitude(self.min_altitude),
            drift
        )
    }

    pub fn display_data(&self) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        println!("\n--- Simulation Summary ---");
        println!("{}", self.summary());
    }
}
