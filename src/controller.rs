//! Attach/detach lifecycle and the per-frame sub-step loop.

use crate::body::Body;
use crate::builder::RopeBuilder;
use crate::chain::Chain;
use crate::config::RopeConfig;
use crate::error::RopeError;
use crate::float::Float;
use crate::integrator::VerletIntegrator;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::solver::ConstraintSolver;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Whether the body is currently hooked. A rope exists only while attached.
#[derive(Clone, Debug, PartialEq)]
pub enum AttachmentState<F: Float> {
    Detached,
    Attached(Chain<F>),
}

/// A body on a grappling rope toward a movable anchor.
///
/// While attached, node 0 is pinned to the body and the last node to the
/// anchor; the body then takes node 0's position and derives its velocity
/// from it. While detached, the body flies freely with damping. Either way it
/// bounces off the world bounds, whereas rope nodes are clamped without bounce.
#[derive(Clone, Debug)]
pub struct RopeController<F: Float = f32> {
    config: RopeConfig<F>,
    body: Body<F>,
    anchor: Vec2<F>,
    state: AttachmentState<F>,
    iterations: usize,
    dash_cooldown: F,
}

impl<F: Float> RopeController<F> {
    pub fn new(config: RopeConfig<F>) -> Result<Self, RopeError> {
        config.validate()?;
        Ok(Self::from_checked(config))
    }

    fn from_checked(config: RopeConfig<F>) -> Self {
        RopeController {
            body: Body::new(config.body_start, config.body_radius),
            anchor: config.anchor_start,
            state: AttachmentState::Detached,
            iterations: config.iterations.max(1),
            dash_cooldown: F::zero(),
            config,
        }
    }

    /// Restore the configured body, anchor and iteration count, and detach.
    pub fn reset(&mut self) {
        self.body = Body::new(self.config.body_start, self.config.body_radius);
        self.anchor = self.config.anchor_start;
        self.state = AttachmentState::Detached;
        self.iterations = self.config.iterations.max(1);
        self.dash_cooldown = F::zero();
        #[cfg(feature = "log")]
        log::debug!("rope controller reset");
    }

    /// Move the anchor. Out-of-world values are accepted as-is.
    pub fn set_anchor(&mut self, x: F, y: F) {
        self.anchor = Vec2::new(x, y);
    }

    /// Replace any rope with a fresh one from the body to the anchor.
    ///
    /// If the two coincide no rope is built and the controller ends detached.
    pub fn attach(&mut self) {
        let builder = RopeBuilder::new(self.config.rest_length, self.config.max_segments);
        match builder.build(self.body.position, self.anchor) {
            Some(chain) => {
                #[cfg(feature = "log")]
                log::debug!("rope attached with {} nodes", chain.len());
                self.state = AttachmentState::Attached(chain);
            }
            None => {
                #[cfg(feature = "log")]
                log::trace!("attach skipped: body is on the anchor");
                self.state = AttachmentState::Detached;
            }
        }
    }

    pub fn detach(&mut self) {
        #[cfg(feature = "log")]
        if self.is_attached() {
            log::debug!("rope detached");
        }
        self.state = AttachmentState::Detached;
    }

    /// Set relaxation sweeps per sub-step; 0 becomes 1.
    pub fn set_iterations(&mut self, iterations: usize) {
        self.iterations = iterations.max(1);
    }

    /// Push the body toward the anchor unless the cooldown is running.
    ///
    /// Returns whether the dash fired. While attached the rope overrides the
    /// body's velocity on the next sub-step.
    pub fn dash(&mut self) -> bool {
        if self.dash_cooldown > F::zero() {
            return false;
        }
        let dir = (self.anchor - self.body.position).normalize();
        self.body.apply_impulse(dir.scale(self.config.dash_speed));
        self.dash_cooldown = self.config.dash_cooldown_ms;
        #[cfg(feature = "log")]
        log::trace!("dash toward ({:?}, {:?})", self.anchor.x, self.anchor.y);
        true
    }

    /// Advance one frame of `dt_ms` milliseconds. Negative or non-finite
    /// frame times advance nothing.
    pub fn step(&mut self, dt_ms: F) {
        self.step_with(dt_ms, &mut NoOpStepObserver);
    }

    pub fn step_with<O: StepObserver>(&mut self, dt_ms: F, observer: &mut O) {
        let dt_ms = if dt_ms.is_finite() { dt_ms.max(F::zero()) } else { F::zero() };
        let h = dt_ms / F::from_f32(1000.0) / F::from_usize(self.config.sub_steps);
        self.dash_cooldown = (self.dash_cooldown - dt_ms).max(F::zero());

        let integrator = VerletIntegrator::new(self.config.damping).with_gravity(self.config.gravity);
        let mut solver = ConstraintSolver::new(self.config.rest_length, self.iterations);
        if self.config.clamp_chain {
            solver = solver.with_bounds(self.config.bounds);
        }

        for substep in 0..self.config.sub_steps {
            match &mut self.state {
                AttachmentState::Attached(chain) => {
                    chain.pin_body_end(self.body.position);
                    chain.pin_anchor_end(self.anchor);
                    integrator.integrate(chain, h);
                    observer.on_integrate();
                    solver.relax(chain, self.anchor, &mut *observer);
                    self.body.follow(chain.body_end(), h);
                }
                AttachmentState::Detached => {
                    self.body.drift(self.config.free_damping, h);
                }
            }
            self.body.keep_within(&self.config.bounds, self.config.restitution);
            observer.on_substep_complete(substep);
        }

        observer.on_step_complete();
    }

    pub fn config(&self) -> &RopeConfig<F> {
        &self.config
    }

    pub fn body(&self) -> &Body<F> {
        &self.body
    }

    /// Direct body access, e.g. to teleport it or set its velocity.
    pub fn body_mut(&mut self) -> &mut Body<F> {
        &mut self.body
    }

    pub fn body_position(&self) -> Vec2<F> {
        self.body.position
    }

    pub fn anchor(&self) -> Vec2<F> {
        self.anchor
    }

    pub fn state(&self) -> &AttachmentState<F> {
        &self.state
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.state, AttachmentState::Attached(_))
    }

    pub fn chain(&self) -> Option<&Chain<F>> {
        match &self.state {
            AttachmentState::Attached(chain) => Some(chain),
            AttachmentState::Detached => None,
        }
    }

    /// Mutable rope access, e.g. for pinning interior nodes.
    pub fn chain_mut(&mut self) -> Option<&mut Chain<F>> {
        match &mut self.state {
            AttachmentState::Attached(chain) => Some(chain),
            AttachmentState::Detached => None,
        }
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Rope node count, 0 while detached.
    pub fn node_count(&self) -> usize {
        self.chain().map_or(0, Chain::len)
    }

    pub fn dash_ready(&self) -> bool {
        self.dash_cooldown <= F::zero()
    }

    /// Fill `out` with `x0, y0, x1, y1, ...` from the body end; empty while detached.
    pub fn write_positions(&self, out: &mut AllocVec<F>) {
        match self.chain() {
            Some(chain) => chain.write_flat(out),
            None => out.clear(),
        }
    }

    pub fn positions_flat(&self) -> AllocVec<F> {
        let mut out = AllocVec::new();
        self.write_positions(&mut out);
        out
    }
}

impl<F: Float> Default for RopeController<F> {
    fn default() -> Self {
        Self::from_checked(RopeConfig::new())
    }
}
