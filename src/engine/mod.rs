//! Pure casting geometry, independent of any pixel buffer.

pub mod planes;
pub mod rays;
pub mod walls;

pub use rays::RayFan;
pub use walls::{Hit, RaySample, Side, WallColumn};
