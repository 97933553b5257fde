//! Rope chain: node positions, previous positions, and the pinned mask.

use crate::constraint::DistanceConstraint;
use crate::error::RopeError;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// An ordered run of rope nodes from the body end (index 0) to the anchor end.
///
/// `positions`, `previous` and `pinned` are index-aligned and always the same
/// length, which is never below 2. Velocity is implicit in
/// `positions[i] - previous[i]`. Both endpoints are always pinned; interior
/// nodes may be pinned too.
#[derive(Clone, Debug, PartialEq)]
pub struct Chain<F: Float> {
    positions: AllocVec<Vec2<F>>,
    previous: AllocVec<Vec2<F>>,
    pinned: AllocVec<bool>,
}

/// Result of [`Chain::closest_point`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentHit<F: Float> {
    /// Index of the segment's first node.
    pub segment: usize,
    pub point: Vec2<F>,
    pub distance: F,
}

impl<F: Float> Chain<F> {
    /// Build a chain at rest through the given points.
    pub fn from_positions(positions: AllocVec<Vec2<F>>) -> Result<Self, RopeError> {
        let count = positions.len();
        if count < 2 {
            return Err(RopeError::TooFewNodes { count });
        }
        let mut pinned = alloc::vec![false; count];
        pinned[0] = true;
        pinned[count - 1] = true;
        Ok(Chain {
            previous: positions.clone(),
            positions,
            pinned,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.positions.len() - 1
    }

    pub fn last_index(&self) -> usize {
        self.positions.len() - 1
    }

    pub fn positions(&self) -> &[Vec2<F>] {
        &self.positions
    }

    pub fn previous_positions(&self) -> &[Vec2<F>] {
        &self.previous
    }

    /// Position of node `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn position(&self, index: usize) -> Vec2<F> {
        self.positions[index]
    }

    /// Node 0, slaved to the body.
    pub fn body_end(&self) -> Vec2<F> {
        self.positions[0]
    }

    /// Last node, slaved to the anchor.
    pub fn anchor_end(&self) -> Vec2<F> {
        self.positions[self.last_index()]
    }

    pub fn is_pinned(&self, index: usize) -> bool {
        self.pinned.get(index).copied().unwrap_or(false)
    }

    /// Pin an interior node where it currently is, dropping its velocity.
    pub fn pin(&mut self, index: usize) -> Result<(), RopeError> {
        self.check_index(index)?;
        self.pinned[index] = true;
        self.previous[index] = self.positions[index];
        Ok(())
    }

    /// Release an interior node. Endpoints cannot be released.
    pub fn unpin(&mut self, index: usize) -> Result<(), RopeError> {
        self.check_index(index)?;
        if index == 0 || index == self.last_index() {
            return Err(RopeError::EndpointPin { index });
        }
        self.pinned[index] = false;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), RopeError> {
        if index >= self.positions.len() {
            return Err(RopeError::NodeOutOfBounds { index, count: self.positions.len() });
        }
        Ok(())
    }

    /// Shift an unpinned node without touching its previous position, which
    /// gives it that much implicit velocity. Pinned nodes ignore the nudge.
    pub fn nudge(&mut self, index: usize, offset: Vec2<F>) -> Result<(), RopeError> {
        self.check_index(index)?;
        if !self.pinned[index] {
            self.positions[index] = self.positions[index] + offset;
        }
        Ok(())
    }

    /// Force node 0 to `pos`, clearing its implicit velocity.
    pub fn pin_body_end(&mut self, pos: Vec2<F>) {
        self.positions[0] = pos;
        self.previous[0] = pos;
    }

    /// Force the last node to `pos`.
    pub fn pin_anchor_end(&mut self, pos: Vec2<F>) {
        let last = self.last_index();
        self.positions[last] = pos;
    }

    /// Split borrow for the integrator and solver.
    pub(crate) fn nodes_mut(&mut self) -> (&mut [Vec2<F>], &mut [Vec2<F>], &[bool]) {
        (&mut self.positions, &mut self.previous, &self.pinned)
    }

    /// Sum of all segment lengths.
    pub fn total_length(&self) -> F {
        self.positions
            .windows(2)
            .fold(F::zero(), |acc, w| acc + w[0].distance(w[1]))
    }

    /// Largest absolute deviation of any segment from `rest_length`.
    pub fn max_segment_error(&self, rest_length: F) -> F {
        (0..self.segment_count())
            .map(|i| DistanceConstraint::new(i, i + 1, rest_length).error(&self.positions).abs())
            .fold(F::zero(), |acc, e| acc.max(e))
    }

    /// Nearest point on the rope polyline to `p`.
    pub fn closest_point(&self, p: Vec2<F>) -> SegmentHit<F> {
        let first = self.positions[0];
        let mut best = SegmentHit { segment: 0, point: first, distance: p.distance(first) };
        for (segment, w) in self.positions.windows(2).enumerate() {
            let (a, b) = (w[0], w[1]);
            let ab = b - a;
            let denom = ab.length_sq().max(F::from_f32(1e-6));
            let t = ((p - a).dot(ab) / denom).clamp(F::zero(), F::one());
            let point = a + ab.scale(t);
            let distance = p.distance(point);
            if distance < best.distance {
                best = SegmentHit { segment, point, distance };
            }
        }
        best
    }

    /// Unit normal of a segment, or zero for a collapsed segment.
    ///
    /// # Panics
    ///
    /// Panics if `segment >= self.segment_count()`.
    pub fn segment_normal(&self, segment: usize) -> Vec2<F> {
        (self.positions[segment + 1] - self.positions[segment]).perp().normalize()
    }

    /// Overwrite `out` with `x0, y0, x1, y1, ...`.
    pub fn write_flat(&self, out: &mut AllocVec<F>) {
        out.clear();
        out.reserve(self.positions.len() * 2);
        for p in &self.positions {
            out.push(p.x);
            out.push(p.y);
        }
    }
}
