mod grid;
mod player;
mod texture;

pub use grid::{Cell, Grid, GridError};

pub use player::Player;

pub use texture::{Texture, TextureError, TextureSet, modulate, pack_rgb};
