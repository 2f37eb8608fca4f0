//! Target point cloud sampled from a parametric heart curve.

use crate::constants::{HEART_LAYERS, MAX_CURVE_SAMPLES};
use crate::error::SimError;
use glam::Vec2;
use std::f32::consts::TAU;

/// Unscaled heart curve: `(sin³r, -(15cos r - 5cos 2r - 2cos 3r - cos 4r))`.
#[inline]
pub fn heart(r: f32) -> Vec2 {
    Vec2::new(
        r.sin().powi(3),
        -(15.0 * r.cos() - 5.0 * (2.0 * r).cos() - 2.0 * (3.0 * r).cos() - (4.0 * r).cos()),
    )
}

/// Number of angles sampled in `[0, 2π)` at `step`.
#[inline]
pub fn sample_count(step: f32) -> usize {
    (TAU / step).ceil() as usize
}

/// Sample the heart at `step` and emit each sample once per silhouette layer
/// (outer, middle, inner). The result holds `3 * sample_count(step)` points.
/// Steps finer than `2π / MAX_CURVE_SAMPLES` are rejected.
pub fn generate_targets(step: f32) -> Result<Vec<Vec2>, SimError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(SimError::InvalidSampleStep(step));
    }
    let samples = sample_count(step);
    if samples > MAX_CURVE_SAMPLES {
        return Err(SimError::InvalidSampleStep(step));
    }
    let total = samples
        .checked_mul(HEART_LAYERS.len())
        .ok_or(SimError::InvalidSampleStep(step))?;
    let mut points = Vec::with_capacity(total);
    for i in 0..samples {
        let h = heart(i as f32 * step);
        for [sx, sy] in HEART_LAYERS {
            points.push(h * Vec2::new(sx, sy));
        }
    }
    Ok(points)
}
