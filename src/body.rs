//! The point body the rope is tied to.

use crate::constraint::BoundsConstraint;
use crate::float::Float;
use crate::vec::Vec2;

/// Smallest sub-step used when deriving velocity from displacement.
const MIN_DERIVE_DT: f32 = 1e-6;

/// A point with explicit velocity, e.g. the player.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub radius: F,
}

impl<F: Float> Body<F> {
    pub fn new(position: Vec2<F>, radius: F) -> Self {
        Body { position, velocity: Vec2::zero(), radius }
    }

    /// Free flight: damp velocity, then move by it.
    pub fn drift(&mut self, damping: F, dt: F) {
        self.velocity = self.velocity.scale(damping);
        self.position = self.position + self.velocity.scale(dt);
    }

    /// Snap to `target` and take the displacement over `dt` as the new velocity.
    pub fn follow(&mut self, target: Vec2<F>, dt: F) {
        let before = self.position;
        self.position = target;
        self.velocity = (self.position - before).scale(F::one() / dt.max(F::from_f32(MIN_DERIVE_DT)));
    }

    pub fn apply_impulse(&mut self, delta_v: Vec2<F>) {
        self.velocity = self.velocity + delta_v;
    }

    pub fn keep_within(&mut self, bounds: &BoundsConstraint<F>, restitution: F) {
        bounds.bounce(&mut self.position, &mut self.velocity, restitution);
    }
}
