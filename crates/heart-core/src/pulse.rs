//! Beating scale factor applied to the whole target cloud.

use crate::constants::{PULSE_DWELL_MULTIPLIER, PULSE_DWELL_THRESHOLD, PULSE_SKIP_MULTIPLIER};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pulse {
    time: f64,
}

impl Pulse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(time: f64) -> Self {
        Self { time }
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    /// `-cos(time)`, in [-1, 1].
    #[inline]
    pub fn intensity(&self) -> f64 {
        -self.time.cos()
    }

    /// Uniform scale `(1 + n) / 2`: 0 when fully contracted, 1 at the peak.
    #[inline]
    pub fn scale(&self) -> f32 {
        ((1.0 + self.intensity()) * 0.5) as f32
    }

    /// Multiplier on the base delta for the current phase: skip through the
    /// contracted half, dwell near the peak, normal pace otherwise.
    pub fn pace(&self) -> f64 {
        if self.time.sin() < 0.0 {
            PULSE_SKIP_MULTIPLIER
        } else if self.intensity() > PULSE_DWELL_THRESHOLD {
            PULSE_DWELL_MULTIPLIER
        } else {
            1.0
        }
    }

    pub fn advance(&mut self, base_delta: f64) {
        self.time += self.pace() * base_delta;
    }
}

/// Write `point * k * heart_scale + center` for every point into `out`.
pub fn scale_targets(points: &[Vec2], k: f32, heart_scale: f32, center: Vec2, out: &mut Vec<Vec2>) {
    out.clear();
    let factor = k * heart_scale;
    out.extend(points.iter().map(|p| *p * factor + center));
}
