//! Frame selection for replaying a recorded trajectory at a coarser rate.

use crate::constants::{FRAME_SKIP, TRAIL_LENGTH};
use crate::telemetry_system::trajectory::{Trajectory, TrajectorySample};
use crate::utils::format::{to_kilometers, to_minutes};

/// One rendered frame: the current sample plus the samples trailing it.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub index: usize,
    pub sample: &'a TrajectorySample,
    pub trail: &'a [TrajectorySample],
}

impl Frame<'_> {
    pub fn readout(&self) -> String {
        format!(
            "t={:.1} min | Alt={:.1} km | Speed={:.2} km/s",
            to_minutes(self.sample.time),
            to_kilometers(self.sample.altitude),
            to_kilometers(self.sample.speed)
        )
    }
}

/// Read-only view that walks a trajectory every `frame_skip` samples.
pub struct Playback<'a> {
    trajectory: &'a Trajectory,
    frame_skip: usize,
    trail_len: usize,
}

impl<'a> Playback<'a> {
    pub fn new(trajectory: &'a Trajectory, frame_skip: usize, trail_len: usize) -> Self {
        Playback {
            trajectory,
            frame_skip: frame_skip.max(1),
            trail_len,
        }
    }

    pub fn with_defaults(trajectory: &'a Trajectory) -> Self {
        Playback::new(trajectory, FRAME_SKIP, TRAIL_LENGTH)
    }

    pub fn frame_count(&self) -> usize {
        self.trajectory.len() / self.frame_skip
    }

    /// Frame `n` shows sample `n * frame_skip`, clamped to the last sample.
    pub fn frame(&self, n: usize) -> Option<Frame<'a>> {
        let samples = self.trajectory.samples();
        let last = samples.len().checked_sub(1)?;
        let index = n.saturating_mul(self.frame_skip).min(last);
        let start = index.saturating_sub(self.trail_len);
        Some(Frame {
            index,
            sample: &samples[index],
            trail: &samples[start..index],
        })
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame<'a>> + '_ {
        (0..self.frame_count()).filter_map(move |n| self.frame(n))
    }
}
