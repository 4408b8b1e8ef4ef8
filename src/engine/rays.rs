/// Lazy sequence of the `count` ray angles spanning the FOV.
///
/// ```text
/// angle(i) = start + i * step      i = 0 .. count-1
/// ```
///
/// [`Config::ray_fan`](crate::Config::ray_fan) starts it at `heading - fov/2`
/// with `step = fov / num_rays`.
///
/// Wall and floor casting both iterate the same `RayFan`, so column `i` of
/// the wall pass and column `i` of every floor row share one angle.
#[derive(Clone, Debug)]
pub struct RayFan {
    start: f32,
    step: f32,
    next: usize,
    count: usize,
}

impl RayFan {
    pub fn new(start: f32, step: f32, count: usize) -> Self {
        Self {
            start,
            step,
            next: 0,
            count,
        }
    }

    /// Angle of ray `i` without advancing the iterator.
    #[inline]
    pub fn angle(&self, i: usize) -> f32 {
        self.start + i as f32 * self.step
    }
}

impl Iterator for RayFan {
    type Item = f32;

    #[inline]
    fn next(&mut self) -> Option<f32> {
        if self.next >= self.count {
            return None;
        }
        let a = self.angle(self.next);
        self.next += 1;
        Some(a)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RayFan {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_3;

    #[test]
    fn fan_spans_fov_left_to_right() {
        let fan = RayFan::new(-FRAC_PI_3 / 2.0, FRAC_PI_3 / 120.0, 120);
        assert_eq!(fan.len(), 120);
        let angles: Vec<f32> = fan.collect();
        assert!((angles[0] + FRAC_PI_3 / 2.0).abs() < 1e-6);
        assert!((angles[60]).abs() < 1e-5);
        let step = FRAC_PI_3 / 120.0;
        for w in angles.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-5);
        }
        // last ray stops one step short of the right edge
        assert!((angles[119] - (FRAC_PI_3 / 2.0 - step)).abs() < 1e-5);
    }

    #[test]
    fn clone_replays_identical_angles() {
        let mut fan = RayFan::new(0.5, 0.25, 7);
        let saved = fan.clone();
        let first: Vec<f32> = fan.by_ref().take(3).collect();
        assert_eq!(fan.len(), 4);
        assert_eq!(fan.angle(2), first[2]);
        let again: Vec<f32> = saved.take(3).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn empty_fan_yields_nothing() {
        assert_eq!(RayFan::new(0.0, 1.0, 0).count(), 0);
    }
}
