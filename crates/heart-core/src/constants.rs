// Shared tuning constants for the heart simulation.
//
// Motion constants are per animation frame and assume a ~60 Hz display.

// Trail easing and pulse pacing
pub const TRACE_K: f32 = 0.4; // fraction of the gap a trail follower closes each frame
pub const TIME_DELTA: f64 = 0.01; // base pulse time increment per frame
pub const PULSE_SKIP_MULTIPLIER: f64 = 9.0; // applied while sin(time) < 0
pub const PULSE_DWELL_MULTIPLIER: f64 = 0.2; // applied near the pulse peak
pub const PULSE_DWELL_THRESHOLD: f64 = 0.8; // intensity above which the pulse lingers

// Steering
pub const PROXIMITY_THRESHOLD: f32 = 10.0; // distance at which a particle picks a new target
pub const GLOBAL_RETARGET_CHANCE: f64 = 0.05;
pub const DIRECTION_FLIP_CHANCE: f64 = 0.01;
pub const DISTANCE_EPSILON: f32 = 0.001; // stands in for a zero distance when normalising

// Upper bound on curve samples; finer steps are rejected
pub const MAX_CURVE_SAMPLES: usize = 1 << 16;

// Heart silhouette layers, (sx, sy) per layer from outer to inner
pub const HEART_LAYERS: [[f32; 2]; 3] = [[210.0, 13.0], [150.0, 9.0], [90.0, 5.0]];

// Particle randomisation ranges (min, span)
pub const PARTICLE_SPEED_MIN: f32 = 5.0;
pub const PARTICLE_SPEED_SPAN: f32 = 1.0;
pub const PARTICLE_FORCE_MIN: f32 = 0.7; // velocity damping, always < 1
pub const PARTICLE_FORCE_SPAN: f32 = 0.2;
pub const PARTICLE_SATURATION_MIN: f32 = 60.0;
pub const PARTICLE_SATURATION_SPAN: f32 = 40.0;
pub const PARTICLE_LIGHTNESS_MIN: f32 = 20.0;
pub const PARTICLE_LIGHTNESS_SPAN: f32 = 60.0;
pub const PARTICLE_ALPHA: f32 = 0.35;
pub const PARTICLE_HUE: f32 = 0.0;

// Upper bound on trail length, sized for the desktop trail
pub const TRAIL_CAPACITY: usize = 50;

// Click hearts
pub const SPRITE_SPEED_MIN: f32 = 0.6;
pub const SPRITE_SPEED_SPAN: f32 = 1.2;
pub const SPRITE_UPWARD_BIAS: f32 = 0.8;
pub const SPRITE_SIZE_MIN: f32 = 6.0;
pub const SPRITE_SIZE_SPAN: f32 = 6.0;
pub const SPRITE_DECAY: f32 = 1.0 / 300.0; // ~5 seconds at 60 fps
pub const SPRITE_HUE_MIN: f32 = 330.0;
pub const SPRITE_HUE_SPAN: f32 = 20.0;
pub const SPRITE_SPIN_SPAN: f32 = 0.01; // angular velocity in [-span/2, span/2)
pub const SPRITE_FLOAT_STEP: f32 = 0.02; // float phase advance per frame
pub const SPRITE_DAMPING: f32 = 0.995;
pub const SPRITE_DRIFT_AMPLITUDE: f32 = 0.15; // horizontal sway
pub const SPRITE_RISE: f32 = 0.15; // constant upward drift
pub const SPRITE_SATURATION: f32 = 85.0;
pub const SPRITE_LIGHTNESS: f32 = 65.0;
