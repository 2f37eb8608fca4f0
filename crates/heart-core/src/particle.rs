//! Trailing particles that chase points on the heart silhouette.

use crate::color::Hsla;
use crate::constants::*;
use crate::simulation::{SimParams, Viewport};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

pub type Trail = SmallVec<[Vec2; TRAIL_CAPACITY]>;

#[derive(Clone, Debug)]
pub struct Particle {
    pub velocity: Vec2,
    pub speed: f32,
    /// Index into the target sequence currently pursued.
    pub target: usize,
    /// +1 or -1; step applied to `target` when the particle arrives.
    pub direction: i32,
    /// Per-frame velocity damping, < 1.
    pub force: f32,
    pub color: Hsla,
    /// `trail[0]` is the authoritative position; the rest lag behind it.
    pub trail: Trail,
}

impl Particle {
    /// Random particle somewhere in the viewport, trail collapsed onto its start.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        viewport: &Viewport,
        target_count: usize,
        trail_len: usize,
    ) -> Self {
        let start = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        let speed = rng.gen::<f32>() * PARTICLE_SPEED_SPAN + PARTICLE_SPEED_MIN;
        let target = rng.gen_range(0..target_count.max(1));
        let direction = if rng.gen_bool(0.5) { 1 } else { -1 };
        let force = PARTICLE_FORCE_MIN + rng.gen::<f32>() * PARTICLE_FORCE_SPAN;
        let color = Hsla::new(
            PARTICLE_HUE,
            PARTICLE_SATURATION_MIN + rng.gen::<f32>() * PARTICLE_SATURATION_SPAN,
            PARTICLE_LIGHTNESS_MIN + rng.gen::<f32>() * PARTICLE_LIGHTNESS_SPAN,
            PARTICLE_ALPHA,
        );
        Self {
            velocity: Vec2::ZERO,
            speed,
            target,
            direction,
            force,
            color,
            trail: std::iter::repeat(start).take(trail_len.max(1)).collect(),
        }
    }

    #[inline]
    pub fn head(&self) -> Vec2 {
        self.trail[0]
    }

    /// One frame of pursuit: retarget on arrival, accelerate toward the
    /// target, integrate, damp, then let the trail catch up.
    pub fn steer<R: Rng + ?Sized>(&mut self, targets: &[Vec2], params: &SimParams, rng: &mut R) {
        let count = targets.len();
        if count == 0 {
            return;
        }
        self.target %= count;

        let delta = self.head() - targets[self.target];
        let mut dist = delta.length();
        if dist == 0.0 {
            dist = DISTANCE_EPSILON;
        }

        if dist < params.proximity {
            self.retarget(count, params, rng);
        }

        self.velocity -= delta / dist * self.speed;
        self.trail[0] += self.velocity;
        self.velocity *= self.force;

        self.ease_trail(params.trace_k);
    }

    fn retarget<R: Rng + ?Sized>(&mut self, count: usize, params: &SimParams, rng: &mut R) {
        if rng.gen_bool(params.retarget_chance) {
            self.target = rng.gen_range(0..count);
        } else {
            if rng.gen_bool(params.flip_chance) {
                self.direction = -self.direction;
            }
            let next = self.target as i64 + self.direction as i64;
            self.target = next.rem_euclid(count as i64) as usize;
        }
    }

    /// Move each follower `trace_k` of the way toward its predecessor, tail
    /// first, so every segment sees its predecessor's previous-frame position.
    pub fn ease_trail(&mut self, trace_k: f32) {
        for i in (1..self.trail.len()).rev() {
            let lead = self.trail[i - 1];
            let p = &mut self.trail[i];
            *p -= (*p - lead) * trace_k;
        }
    }
}
