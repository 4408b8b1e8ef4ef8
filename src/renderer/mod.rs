//! Rendering abstraction layer.
//!
//! *Game logic never touches a pixel buffer directly.*  It describes the
//! frame as a [`Scene`] and hands it to a type that implements [`Renderer`].
//!
//! * A back-end owns its scratch buffer and paints sky, floor, walls and the
//!   optional minimap, in that order.
//! * A helper blanket‐impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

use crate::{
    config::Config,
    world::{Grid, Player, TextureSet},
};

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Everything one frame reads.  All borrows are shared: nothing in here is
/// mutated while the frame is being drawn.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub grid: &'a Grid,
    pub player: &'a Player,
    pub textures: &'a TextureSet,
    pub config: &'a Config,
    pub minimap: bool,
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Paint every layer of `scene` into the scratch buffer.
    fn draw_scene(&mut self, scene: &Scene<'_>);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(&mut self, scene: &Scene<'_>, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(scene.config.width, scene.config.height);
        self.draw_scene(scene);
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;

pub use software::{Minimap, Software};
