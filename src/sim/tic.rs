use std::time::{Duration, Instant};

use super::input::{InputCmd, apply_input};
use crate::{
    config::Config,
    world::{Grid, Player},
};

/// Upper bound on tics run by a single `pump`; the rest of the backlog is
/// dropped so a stalled frame does not teleport the player.
pub const MAX_CATCHUP: u32 = 5;

/// Drives player motion at a fixed rate, independent of the render rate.
pub struct TicRunner {
    tic: Duration,
    last: Instant,
    tics: u64,
}

impl TicRunner {
    pub fn new(fps: usize) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    pub fn starting_at(fps: usize, now: Instant) -> Self {
        Self {
            tic: Duration::from_micros(1_000_000 / fps.max(1) as u64),
            last: now,
            tics: 0,
        }
    }

    #[inline]
    pub fn tic_length(&self) -> Duration {
        self.tic
    }

    /// Tics run since construction.
    #[inline]
    pub fn tics(&self) -> u64 {
        self.tics
    }

    /// Advance enough tics to synchronise simulation with real time.
    pub fn pump(&mut self, player: &mut Player, grid: &Grid, cmd: InputCmd, cfg: &Config) -> u32 {
        self.pump_at(Instant::now(), player, grid, cmd, cfg)
    }

    /// [`pump`](Self::pump) against an explicit clock reading.
    pub fn pump_at(
        &mut self,
        now: Instant,
        player: &mut Player,
        grid: &Grid,
        cmd: InputCmd,
        cfg: &Config,
    ) -> u32 {
        let mut ran = 0;
        while now.saturating_duration_since(self.last) >= self.tic {
            if ran == MAX_CATCHUP {
                log::debug!(
                    "tic backlog of {:?} dropped after {MAX_CATCHUP} tics",
                    now - self.last
                );
                self.last = now;
                break;
            }
            apply_input(player, grid, cmd, cfg);
            self.last += self.tic;
            self.tics += 1;
            ran += 1;
        }
        ran
    }
}
