//! Unit conversions and human-readable strings shared by the telemetry log
//! and the playback readout. Inputs are SI.

use crate::utils::vector3d::Vector3D;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const METERS_PER_KILOMETER: f64 = 1_000.0;

pub fn to_minutes(seconds: f64) -> f64 {
    seconds / SECONDS_PER_MINUTE
}

pub fn to_kilometers(meters: f64) -> f64 {
    meters / METERS_PER_KILOMETER
}

/// `"4h 10m 0.00s"`, `"2m 5.00s"` or `"42.50s"`; leading zero units are dropped.
pub fn format_time(seconds: f64) -> String {
    let hours = (seconds / SECONDS_PER_HOUR).floor();
    let minutes = to_minutes(seconds - hours * SECONDS_PER_HOUR).floor();
    let rest = seconds - hours * SECONDS_PER_HOUR - minutes * SECONDS_PER_MINUTE;

    if hours >= 1.0 {
        format!("{:.0}h {:.0}m {:.2}s", hours, minutes, rest)
    } else if minutes >= 1.0 {
        format!("{:.0}m {:.2}s", minutes, rest)
    } else {
        format!("{:.2}s", rest)
    }
}

pub fn format_altitude(altitude: f64) -> String {
    if altitude.abs() >= METERS_PER_KILOMETER {
        format!("{:.2} km", to_kilometers(altitude))
    } else {
        format!("{:.2} m", altitude)
    }
}

pub fn format_vector3d(vec: &Vector3D, unit: &str, precision: usize) -> String {
    format!(
        "x = {:.precision$} {unit}, y = {:.precision$} {unit}, z = {:.precision$} {unit}",
        vec.x,
        vec.y,
        vec.z,
        precision = precision,
        unit = unit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(42.5), "42.50s");
        assert_eq!(format_time(125.0), "2m 5.00s");
        assert_eq!(format_time(1_000.0), "16m 40.00s");
        assert_eq!(format_time(15_000.0), "4h 10m 0.00s");
        assert_eq!(format_time(0.0), "0.00s");
    }

    #[test]
    fn test_format_altitude() {
        assert_eq!(format_altitude(500.0), "500.00 m");
        assert_eq!(format_altitude(500_000.0), "500.00 km");
        assert_eq!(format_altitude(-2_500.0), "-2.50 km");
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(to_minutes(14_900.0), 14_900.0 / 60.0);
        assert_eq!(to_kilometers(7_988.0), 7.988);
    }

    #[test]
    fn test_format_vector3d() {
        assert_eq!(
            format_vector3d(&Vector3D::new(1.0, -2.5, 0.14), "m", 1),
            "x = 1.0 m, y = -2.5 m, z = 0.1 m"
        );
    }
}
