//! Simulation state owned by the render loop: viewport, pulse, particle pool
//! and the active click hearts, advanced one animation frame at a time.

use crate::constants::*;
use crate::device::DeviceClass;
use crate::error::SimError;
use crate::geometry::generate_targets;
use crate::particle::Particle;
use crate::pulse::{scale_targets, Pulse};
use crate::sprite::ClickHeart;
use glam::Vec2;
use rand::prelude::*;

/// Canvas-space dimensions in CSS pixels plus the device traits read at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
    pub device: DeviceClass,
}

impl Viewport {
    pub fn new(width: f32, height: f32, dpr: f32, device: DeviceClass) -> Self {
        Self {
            width,
            height,
            dpr,
            device,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Tunables fixed at initialisation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimParams {
    pub trace_k: f32,
    pub time_delta: f64,
    pub proximity: f32,
    pub retarget_chance: f64,
    pub flip_chance: f64,
    pub sprite_decay: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            trace_k: TRACE_K,
            time_delta: TIME_DELTA,
            proximity: PROXIMITY_THRESHOLD,
            retarget_chance: GLOBAL_RETARGET_CHANCE,
            flip_chance: DIRECTION_FLIP_CHANCE,
            sprite_decay: SPRITE_DECAY,
        }
    }
}

impl SimParams {
    pub fn validate(&self) -> Result<(), SimError> {
        let invalid = |name: &'static str, value: f64| -> Result<(), SimError> {
            Err(SimError::InvalidParam { name, value })
        };
        if !(self.trace_k > 0.0 && self.trace_k <= 1.0) {
            return invalid("trace_k", self.trace_k as f64);
        }
        if !(self.time_delta.is_finite() && self.time_delta > 0.0) {
            return invalid("time_delta", self.time_delta);
        }
        if !(self.proximity.is_finite() && self.proximity >= 0.0) {
            return invalid("proximity", self.proximity as f64);
        }
        if !(0.0..=1.0).contains(&self.retarget_chance) {
            return invalid("retarget_chance", self.retarget_chance);
        }
        if !(0.0..=1.0).contains(&self.flip_chance) {
            return invalid("flip_chance", self.flip_chance);
        }
        if !(self.sprite_decay.is_finite() && self.sprite_decay > 0.0) {
            return invalid("sprite_decay", self.sprite_decay as f64);
        }
        Ok(())
    }
}

pub struct Simulation {
    viewport: Viewport,
    params: SimParams,
    pulse: Pulse,
    points: Vec<Vec2>,
    targets: Vec<Vec2>,
    particles: Vec<Particle>,
    sprites: Vec<ClickHeart>,
    rng: StdRng,
}

impl Simulation {
    /// Build the target cloud for the viewport's device class and one particle
    /// per target point. All randomness comes from a generator seeded with `seed`.
    pub fn new(viewport: Viewport, params: SimParams, seed: u64) -> Result<Self, SimError> {
        params.validate()?;
        let device = viewport.device;
        let points = generate_targets(device.sample_step())?;
        let mut rng = StdRng::seed_from_u64(seed);
        let trail_len = device.trail_len();
        let particles = (0..points.len())
            .map(|_| Particle::spawn(&mut rng, &viewport, points.len(), trail_len))
            .collect::<Vec<_>>();
        log::info!(
            "[sim] device={:?} points={} particles={} trail={}",
            device,
            points.len(),
            particles.len(),
            trail_len
        );
        let mut sim = Self {
            viewport,
            params,
            pulse: Pulse::new(),
            points,
            targets: Vec::new(),
            particles,
            sprites: Vec::new(),
            rng,
        };
        sim.refresh_targets();
        Ok(sim)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Canvas resized; particles keep their positions and chase the recentred heart.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
        log::debug!("[resize] {}x{}", width, height);
    }

    /// Tunables validated at construction; fixed for the session.
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn pulse(&self) -> &Pulse {
        &self.pulse
    }

    pub fn pulse_mut(&mut self) -> &mut Pulse {
        &mut self.pulse
    }

    /// Curve-local target points, fixed for the session.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Canvas-space targets for the current pulse.
    pub fn targets(&self) -> &[Vec2] {
        &self.targets
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn sprites(&self) -> &[ClickHeart] {
        &self.sprites
    }

    /// Recompute canvas-space targets from the current pulse scale.
    pub fn refresh_targets(&mut self) {
        scale_targets(
            &self.points,
            self.pulse.scale(),
            self.viewport.device.heart_scale(),
            self.viewport.center(),
            &mut self.targets,
        );
    }

    /// Advance one animation frame: pulse and targets, particle pursuit, then
    /// click hearts, dropping any whose life has run out.
    pub fn step(&mut self) {
        self.refresh_targets();
        self.pulse.advance(self.params.time_delta);

        for p in &mut self.particles {
            p.steer(&self.targets, &self.params, &mut self.rng);
        }

        for h in &mut self.sprites {
            h.update();
        }
        self.sprites.retain(|h| !h.is_expired());
    }

    /// Spawn a burst of click hearts at `at` (canvas CSS pixels); returns how many.
    pub fn spawn_click_hearts(&mut self, at: Vec2) -> usize {
        let count = self.viewport.device.sprite_count();
        let decay = self.params.sprite_decay;
        self.sprites.reserve(count);
        for _ in 0..count {
            let heart = ClickHeart::spawn(&mut self.rng, at, decay);
            self.sprites.push(heart);
        }
        log::debug!(
            "[click] spawned {} hearts at ({:.0},{:.0}), active={}",
            count,
            at.x,
            at.y,
            self.sprites.len()
        );
        count
    }
}
