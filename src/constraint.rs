//! Rope constraints: fixed segment distance and the world boundary.

use crate::float::Float;
use crate::vec::Vec2;

/// Separations below this are treated as coincident and left alone.
const DEGENERATE_SEPARATION: f32 = 1e-8;

/// Keeps two nodes at `rest_length` apart.
///
/// Each unpinned end absorbs half of the error along the connecting normal,
/// so every node is treated as unit mass. A pinned end never moves and its
/// half of the correction is simply dropped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        DistanceConstraint { a, b, rest_length }
    }

    /// Signed length error (positive when stretched).
    pub fn error(&self, positions: &[Vec2<F>]) -> F {
        positions[self.a].distance(positions[self.b]) - self.rest_length
    }

    pub fn solve(&self, positions: &mut [Vec2<F>], pinned: &[bool]) {
        let delta = positions[self.b] - positions[self.a];
        let dist = delta.length();
        if dist < F::from_f32(DEGENERATE_SEPARATION) {
            return;
        }

        let normal = delta.scale(F::one() / dist);
        let half = (dist - self.rest_length) * F::half();

        if !pinned[self.a] {
            positions[self.a] = positions[self.a] + normal.scale(half);
        }
        if !pinned[self.b] {
            positions[self.b] = positions[self.b] - normal.scale(half);
        }
    }
}

/// Axis-aligned world boundary.
///
/// Rope nodes are hard-clamped into it with no bounce. The body instead
/// reflects its velocity by a restitution factor when it leaves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundsConstraint<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> BoundsConstraint<F> {
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Self {
        BoundsConstraint { min, max }
    }

    /// The normalized world, `[0, 1] x [0, 1]`.
    pub fn unit() -> Self {
        BoundsConstraint {
            min: Vec2::zero(),
            max: Vec2::new(F::one(), F::one()),
        }
    }

    pub fn contains(&self, p: Vec2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn clamp_point(&self, p: Vec2<F>) -> Vec2<F> {
        Vec2::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Clamp every unpinned node into the bounds.
    pub fn clamp_nodes(&self, positions: &mut [Vec2<F>], pinned: &[bool]) {
        for (p, &fixed) in positions.iter_mut().zip(pinned.iter()) {
            if fixed { continue; }
            *p = self.clamp_point(*p);
        }
    }

    /// Clamp a free point and flip the velocity component on each axis it left by.
    pub fn bounce(&self, pos: &mut Vec2<F>, vel: &mut Vec2<F>, restitution: F) {
        if pos.x < self.min.x {
            pos.x = self.min.x;
            vel.x = -vel.x * restitution;
        }
        if pos.x > self.max.x {
            pos.x = self.max.x;
            vel.x = -vel.x * restitution;
        }
        if pos.y < self.min.y {
            pos.y = self.min.y;
            vel.y = -vel.y * restitution;
        }
        if pos.y > self.max.y {
            pos.y = self.max.y;
            vel.y = -vel.y * restitution;
        }
    }
}

impl<F: Float> Default for BoundsConstraint<F> {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stretched_pair_pulls_together_evenly() {
        let mut pos = [Vec2::new(0.0f32, 0.0), Vec2::new(0.5, 0.0), Vec2::new(1.0, 0.0)];
        let pinned = [false, false, false];
        DistanceConstraint::new(0, 1, 0.3).solve(&mut pos, &pinned);
        assert!((pos[0].x - 0.1).abs() < 1e-6);
        assert!((pos[1].x - 0.4).abs() < 1e-6);
    }

    #[test]
    fn pinned_end_keeps_position_and_drops_its_half() {
        let mut pos = [Vec2::new(0.0f32, 0.0), Vec2::new(0.5, 0.0)];
        let pinned = [true, false];
        DistanceConstraint::new(0, 1, 0.3).solve(&mut pos, &pinned);
        assert_eq!(pos[0], Vec2::new(0.0, 0.0));
        assert!((pos[1].x - 0.4).abs() < 1e-6);
    }

    #[test]
    fn coincident_nodes_are_skipped() {
        let mut pos = [Vec2::new(0.5f32, 0.5), Vec2::new(0.5, 0.5)];
        DistanceConstraint::new(0, 1, 0.1).solve(&mut pos, &[false, false]);
        assert!(pos[0].x.is_finite() && pos[1].x.is_finite());
        assert_eq!(pos[0], pos[1]);
    }

    #[test]
    fn clamp_nodes_skips_pinned() {
        let bounds = BoundsConstraint::<f32>::unit();
        let mut pos = [Vec2::new(-0.5, 0.5), Vec2::new(1.5, -0.2), Vec2::new(2.0, 2.0)];
        bounds.clamp_nodes(&mut pos, &[false, false, true]);
        assert_eq!(pos[0], Vec2::new(0.0, 0.5));
        assert_eq!(pos[1], Vec2::new(1.0, 0.0));
        assert_eq!(pos[2], Vec2::new(2.0, 2.0));
    }

    #[test]
    fn bounce_reverses_and_scales_velocity() {
        let bounds = BoundsConstraint::<f32>::unit();
        let mut pos = Vec2::new(-0.01, 0.5);
        let mut vel = Vec2::new(-1.0, 0.0);
        bounds.bounce(&mut pos, &mut vel, 0.4);
        assert_eq!(pos.x, 0.0);
        assert!((vel.x - 0.4).abs() < 1e-6);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn bounce_leaves_inside_point_alone() {
        let bounds = BoundsConstraint::<f32>::unit();
        let mut pos = Vec2::new(0.3, 0.7);
        let mut vel = Vec2::new(-1.0, 2.0);
        bounds.bounce(&mut pos, &mut vel, 0.4);
        assert_eq!(pos, Vec2::new(0.3, 0.7));
        assert_eq!(vel, Vec2::new(-1.0, 2.0));
    }
}
