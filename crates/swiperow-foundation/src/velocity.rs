//! Horizontal velocity estimation from pointer samples.

use smallvec::SmallVec;

use crate::gesture_constants::{MAX_FLING_VELOCITY, VELOCITY_HORIZON_NANOS};

const MAX_SAMPLES: usize = 20;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_nanos: u64,
    position: f32,
}

/// Tracks recent positions on one axis and fits a line through them.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[Sample; MAX_SAMPLES]>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, time_nanos: u64, position: f32) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.remove(0);
        }
        self.samples.push(Sample {
            time_nanos,
            position,
        });
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Least-squares slope over the samples inside the horizon, in px/s,
    /// clamped to [`MAX_FLING_VELOCITY`]. Zero with fewer than two samples.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.samples.last() else {
            return 0.0;
        };
        let recent: SmallVec<[(f64, f64); MAX_SAMPLES]> = self
            .samples
            .iter()
            .filter(|sample| {
                newest.time_nanos.saturating_sub(sample.time_nanos) <= VELOCITY_HORIZON_NANOS
            })
            .map(|sample| {
                let age_seconds =
                    -(newest.time_nanos.saturating_sub(sample.time_nanos) as f64) / 1e9;
                (age_seconds, sample.position as f64)
            })
            .collect();
        if recent.len() < 2 {
            return 0.0;
        }

        let count = recent.len() as f64;
        let mean_t = recent.iter().map(|(t, _)| t).sum::<f64>() / count;
        let mean_x = recent.iter().map(|(_, x)| x).sum::<f64>() / count;
        let (mut covariance, mut variance) = (0.0, 0.0);
        for (t, x) in &recent {
            covariance += (t - mean_t) * (x - mean_x);
            variance += (t - mean_t) * (t - mean_t);
        }
        if variance <= f64::EPSILON {
            return 0.0;
        }
        let velocity = (covariance / variance) as f32;
        velocity.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY)
    }
}
