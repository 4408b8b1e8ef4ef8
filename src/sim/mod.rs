mod input;
mod motion;
mod tic;

pub use input::{Controls, InputCmd, apply_input};
pub use motion::slide_move;
pub use tic::{MAX_CATCHUP, TicRunner};
