//! Lays out a fresh rope between the body and the anchor.

use crate::chain::Chain;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Endpoints closer than this produce no rope.
const MIN_BUILD_DISTANCE: f32 = 1e-5;

/// Builds straight, motionless chains of roughly `rest_length` spacing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RopeBuilder<F: Float> {
    pub rest_length: F,
    pub max_segments: usize,
}

impl<F: Float> RopeBuilder<F> {
    pub fn new(rest_length: F, max_segments: usize) -> Self {
        RopeBuilder { rest_length, max_segments }
    }

    /// Number of segments a rope spanning `distance` gets: `ceil(distance / rest)`
    /// kept within `[2, max_segments]`.
    pub fn segments_for(&self, distance: F) -> usize {
        let wanted = (distance / self.rest_length).ceil().to_usize();
        wanted.clamp(2, self.max_segments.max(2))
    }

    /// Lay `n + 1` evenly spaced nodes from `source` to `destination` inclusive.
    ///
    /// Returns `None` when the endpoints (nearly) coincide or are not finite.
    pub fn build(&self, source: Vec2<F>, destination: Vec2<F>) -> Option<Chain<F>> {
        let distance = source.distance(destination);
        // Written negated so a NaN distance is rejected too.
        if !(distance >= F::from_f32(MIN_BUILD_DISTANCE) && distance.is_finite()) {
            return None;
        }

        let segments = self.segments_for(distance);
        let n = F::from_usize(segments);
        let mut positions = AllocVec::with_capacity(segments + 1);
        for i in 0..segments {
            positions.push(source.lerp(destination, F::from_usize(i) / n));
        }
        positions.push(destination);

        Chain::from_positions(positions).ok()
    }
}
