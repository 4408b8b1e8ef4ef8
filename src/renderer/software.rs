//! ---------------------------------------------------------------------------
//! Classic software (CPU) ray-casting renderer
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * Layers are painted back to front (sky, floor, walls, minimap), so no
//!   depth buffer is needed.
//! ---------------------------------------------------------------------------

mod overlay;
mod planes;
mod sky;
mod walls;

pub use overlay::Minimap;
pub use sky::sky_offset;

use crate::{
    engine::RaySample,
    renderer::{Renderer, Rgba, Scene},
};

/// Clear colour; only visible where no layer paints (the horizon row).
const CLEAR: Rgba = 0x00_202020;

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    /// Ray samples of the frame in flight; cleared by every wall pass.
    rays: Vec<RaySample>,
    width: usize,
    height: usize,
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(CLEAR);
    }

    fn draw_scene(&mut self, scene: &Scene<'_>) {
        debug_assert_eq!(
            (scene.config.width, scene.config.height),
            (self.width, self.height),
            "frame size differs from config"
        );
        self.draw_sky(scene);
        self.draw_floor(scene);
        self.draw_walls(scene);
        if scene.minimap {
            self.draw_minimap(scene);
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*──────────────────────── pixel helpers ──────────────────────────────*/

impl Software {
    /// Samples cast by the most recent wall pass, one per ray.
    #[inline]
    pub fn rays(&self) -> &[RaySample] {
        &self.rays
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.scratch[y * self.width + x])
    }

    /// Paint `len` pixels of row `y` starting at `x`, clipped to the frame.
    #[inline]
    fn fill_run(&mut self, x: usize, y: usize, len: usize, col: Rgba) {
        if y >= self.height || x >= self.width {
            return;
        }
        let end = (x + len).min(self.width);
        let row = y * self.width;
        self.scratch[row + x..row + end].fill(col);
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, col: Rgba) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.scratch[y as usize * self.width + x as usize] = col;
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
