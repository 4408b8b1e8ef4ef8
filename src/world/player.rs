use glam::Vec2;

/// Viewer state in world space.
///
/// * `pos` is in the same units as the grid (`tile`-scaled).
/// * `heading` is in radians: 0 = +X (east), positive turns towards +Y,
///   which is *down* on screen because map rows grow downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    heading: f32,
}

impl Player {
    pub fn new(pos: Vec2, heading: f32) -> Self {
        Self {
            pos,
            heading: heading.rem_euclid(std::f32::consts::TAU),
        }
    }

    /// Heading, always in `[0, TAU)`.
    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Unit vector along the heading.
    #[inline(always)]
    pub fn forward(&self) -> Vec2 {
        let (s, c) = self.heading.sin_cos();
        Vec2::new(c, s)
    }

    /// Rotate by `delta` radians (positive = clockwise on screen).
    pub fn turn(&mut self, delta: f32) {
        self.heading = (self.heading + delta).rem_euclid(std::f32::consts::TAU);
    }
}

impl Default for Player {
    /// Spawn in the open north-west corner, facing east.
    fn default() -> Self {
        Self::new(Vec2::new(100.0, 100.0), 0.0)
    }
}
