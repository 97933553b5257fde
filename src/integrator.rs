//! Störmer-Verlet step for the free nodes of a rope.

use crate::chain::Chain;
use crate::float::Float;
use crate::vec::Vec2;

/// Advances unpinned nodes using `position - previous` as their velocity.
///
/// Damping is applied to that implicit velocity every call. Pinned nodes,
/// including both endpoints, are never touched.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VerletIntegrator<F: Float> {
    pub damping: F,
    pub gravity: Vec2<F>,
}

impl<F: Float> VerletIntegrator<F> {
    pub fn new(damping: F) -> Self {
        VerletIntegrator { damping, gravity: Vec2::zero() }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn integrate(&self, chain: &mut Chain<F>, dt: F) {
        let (positions, previous, pinned) = chain.nodes_mut();
        let kick = self.gravity.scale(dt);
        for i in 0..positions.len() {
            if pinned[i] { continue; }
            let pos = positions[i];
            let velocity = (pos - previous[i]).scale(self.damping) + kick;
            previous[i] = pos;
            positions[i] = pos + velocity;
        }
    }
}
