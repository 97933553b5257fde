//! Gauss-Seidel relaxation of rope distance, anchor and boundary constraints.

use crate::chain::Chain;
use crate::constraint::{BoundsConstraint, DistanceConstraint};
use crate::float::Float;
use crate::observer::StepObserver;
use crate::vec::Vec2;

/// Iteratively relaxes a chain toward uniform `rest_length` spacing.
///
/// Each iteration sweeps the segments in ascending order, re-pins the last
/// node to the anchor, then clamps free nodes into `bounds` when set. Cost is
/// `O(iterations * nodes)`; more iterations give a stiffer rope.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstraintSolver<F: Float> {
    pub rest_length: F,
    iterations: usize,
    pub bounds: Option<BoundsConstraint<F>>,
}

impl<F: Float> ConstraintSolver<F> {
    /// `iterations` below 1 is raised to 1.
    pub fn new(rest_length: F, iterations: usize) -> Self {
        ConstraintSolver {
            rest_length,
            iterations: iterations.max(1),
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, bounds: BoundsConstraint<F>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn relax<O: StepObserver>(&self, chain: &mut Chain<F>, anchor: Vec2<F>, observer: &mut O) {
        for it in 0..self.iterations {
            {
                let (positions, _, pinned) = chain.nodes_mut();
                for i in 0..positions.len() - 1 {
                    DistanceConstraint::new(i, i + 1, self.rest_length).solve(positions, pinned);
                }
            }

            chain.pin_anchor_end(anchor);

            if let Some(bounds) = &self.bounds {
                let (positions, _, pinned) = chain.nodes_mut();
                bounds.clamp_nodes(positions, pinned);
            }

            observer.on_relax_iteration(it);
        }
    }
}
