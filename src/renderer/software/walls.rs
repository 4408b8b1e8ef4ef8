use crate::{
    engine::walls::{WallColumn, cast_fan, project_column},
    renderer::{Scene, software::Software},
    world::{Texture, modulate},
};

impl Software {
    /// Cast the fan and paint one shaded, scaled strip per ray.
    pub(super) fn draw_walls(&mut self, scene: &Scene<'_>) {
        let cfg = scene.config;
        let tex = &scene.textures.wall;

        cast_fan(scene.grid, scene.player, cfg, &mut self.rays);

        for i in 0..self.rays.len() {
            let col = project_column(i, &self.rays[i], cfg, scene.grid.tile(), tex.w);
            self.draw_column(&col, tex);
        }
    }

    /// Draw a single strip, `col.width` pixels wide.
    fn draw_column(&mut self, col: &WallColumn, tex: &Texture) {
        if col.height == 0 {
            return;
        }
        for r in 0..col.rows {
            let y = col.top + r;
            if y >= self.height {
                break;
            }
            let texel = tex.texel(col.tex_x, col.tex_row(r, tex.h));
            self.fill_run(col.x, y, col.width, modulate(texel, col.light));
        }
    }
}
