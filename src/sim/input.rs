use bitflags::bitflags;

use super::motion::slide_move;
use crate::{
    config::Config,
    world::{Grid, Player},
};

bitflags! {
    /// Movement keys held during a tic, independent of the windowing layer.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Controls: u8 {
        const TURN_LEFT  = 0x01;
        const TURN_RIGHT = 0x02;
        const FORWARD    = 0x04;
        const BACKWARD   = 0x08;
    }
}

/// One tic worth of player intent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub forward: f32, // -1 … +1
    pub turn: f32,    // -1 … +1  (left / right)
}

impl InputCmd {
    /// Opposite keys cancel out.
    pub fn from_controls(keys: Controls) -> Self {
        let axis = |pos: Controls, neg: Controls| {
            keys.contains(pos) as i8 as f32 - keys.contains(neg) as i8 as f32
        };
        Self {
            forward: axis(Controls::FORWARD, Controls::BACKWARD),
            turn: axis(Controls::TURN_RIGHT, Controls::TURN_LEFT),
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.forward == 0.0 && self.turn == 0.0
    }
}

/// Turn first, then walk along the new heading through the collision test.
pub fn apply_input(player: &mut Player, grid: &Grid, cmd: InputCmd, cfg: &Config) {
    let turn = cmd.turn.clamp(-1.0, 1.0);
    let forward = cmd.forward.clamp(-1.0, 1.0);

    if turn != 0.0 {
        player.turn(turn * cfg.turn_speed);
    }
    if forward != 0.0 {
        let delta = player.forward() * (forward * cfg.move_speed);
        player.pos = slide_move(grid, player.pos, delta, cfg.collision_buffer);
    }
}
