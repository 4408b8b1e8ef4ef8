//! Axis-separated collision against the grid.
//!
//! Each axis is probed on its own, a `buffer` ahead of the new position in
//! the direction of travel.  A blocked axis is dropped while the other one
//! still applies, so the player slides along walls.

use glam::Vec2;

use crate::world::Grid;

/// Move `pos` by `delta`, rejecting each axis that would end up in a wall.
///
/// X is resolved first; the Y probe already uses the accepted X.
pub fn slide_move(grid: &Grid, pos: Vec2, delta: Vec2, buffer: f32) -> Vec2 {
    let mut out = pos;

    if delta.x != 0.0 {
        let probe = out.x + delta.x + buffer * delta.x.signum();
        if !grid.is_wall(probe, out.y) {
            out.x += delta.x;
        }
    }
    if delta.y != 0.0 {
        let probe = out.y + delta.y + buffer * delta.y.signum();
        if !grid.is_wall(out.x, probe) {
            out.y += delta.y;
        }
    }
    out
}
