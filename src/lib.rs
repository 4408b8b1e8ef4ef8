//! Texture-mapped ray caster over a square tile grid.
//!
//! * [`world`] – grid, player and texture storage.
//! * [`sim`] – input commands, fixed-rate tics and wall sliding.
//! * [`engine`] – pure casting geometry (ray fan, wall hits, floor rows).
//! * [`renderer`] – the [`renderer::Renderer`] trait and its CPU back-end.
//! * [`assets`] – PPM decoding and procedural fallback textures.

pub mod assets;
pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;

pub use config::{Config, ConfigError};
