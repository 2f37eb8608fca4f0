//! Short-lived floating hearts spawned by clicks and taps.

use crate::color::Hsla;
use crate::constants::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug)]
pub struct ClickHeart {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    /// 1.0 at spawn, expired at or below 0.
    pub life: f32,
    pub decay: f32,
    pub hue: f32,
    pub rotation: f32,
    pub spin: f32,
    pub float_phase: f32,
    age: u32,
}

impl ClickHeart {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, at: Vec2, decay: f32) -> Self {
        let angle = rng.gen::<f32>() * TAU;
        let speed = SPRITE_SPEED_MIN + rng.gen::<f32>() * SPRITE_SPEED_SPAN;
        Self {
            position: at,
            velocity: Vec2::new(angle.cos() * speed, angle.sin() * speed - SPRITE_UPWARD_BIAS),
            size: SPRITE_SIZE_MIN + rng.gen::<f32>() * SPRITE_SIZE_SPAN,
            life: 1.0,
            decay,
            hue: SPRITE_HUE_MIN + rng.gen::<f32>() * SPRITE_HUE_SPAN,
            rotation: rng.gen::<f32>() * PI,
            spin: (rng.gen::<f32>() - 0.5) * SPRITE_SPIN_SPAN,
            float_phase: rng.gen::<f32>() * TAU,
            age: 0,
        }
    }

    /// Frames this heart has been updated.
    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn update(&mut self) {
        self.float_phase += SPRITE_FLOAT_STEP;
        self.velocity *= SPRITE_DAMPING;
        self.position.x += self.velocity.x + self.float_phase.sin() * SPRITE_DRIFT_AMPLITUDE;
        self.position.y += self.velocity.y - SPRITE_RISE;
        self.rotation += self.spin;
        // Derived from age so repeated subtraction cannot leave a sliver of life.
        self.age += 1;
        self.life = 1.0 - self.age as f32 * self.decay;
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }

    pub fn fill(&self) -> Hsla {
        Hsla::new(self.hue, SPRITE_SATURATION, SPRITE_LIGHTNESS, self.alpha())
    }
}

/// Cubic Bezier segment continuing from the previous end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicTo {
    pub c1: Vec2,
    pub c2: Vec2,
    pub to: Vec2,
}

/// Closed two-lobe heart in sprite-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartOutline {
    pub start: Vec2,
    pub curves: [CubicTo; 2],
}

pub fn heart_outline(size: f32) -> HeartOutline {
    let s = size;
    let top = Vec2::new(0.0, -s / 2.0);
    HeartOutline {
        start: top,
        curves: [
            CubicTo {
                c1: Vec2::new(-s, -s),
                c2: Vec2::new(-s * 1.5, s / 2.0),
                to: Vec2::new(0.0, s),
            },
            CubicTo {
                c1: Vec2::new(s * 1.5, s / 2.0),
                c2: Vec2::new(s, -s),
                to: top,
            },
        ],
    }
}
