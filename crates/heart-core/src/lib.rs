pub mod color;
pub mod constants;
pub mod device;
pub mod error;
pub mod geometry;
pub mod particle;
pub mod pulse;
pub mod simulation;
pub mod sprite;

pub use color::*;
pub use constants::*;
pub use device::*;
pub use error::*;
pub use geometry::*;
pub use particle::*;
pub use pulse::*;
pub use simulation::*;
pub use sprite::*;
