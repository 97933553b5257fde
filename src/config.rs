//! Tunables for a rope simulation.

use crate::constraint::BoundsConstraint;
use crate::error::RopeError;
use crate::float::Float;
use crate::vec::Vec2;

/// Configuration for a [`crate::RopeController`].
///
/// # Builder Pattern
/// ```
/// use tether::config::RopeConfig;
/// use tether::vec::Vec2;
///
/// let config: RopeConfig<f32> = RopeConfig::new()
///     .with_rest_length(0.01)
///     .with_iterations(32)
///     .with_gravity(Vec2::new(0.0, 0.5))
///     .with_sub_steps(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RopeConfig<F: Float> {
    /// Target distance between adjacent nodes. Default: 0.008.
    pub rest_length: F,
    /// Relaxation sweeps per sub-step, at least 1. Default: 64.
    pub iterations: usize,
    /// Sub-steps per frame, at least 1. Default: 4.
    pub sub_steps: usize,
    /// Multiplier on rope node implicit velocity per sub-step. Default: 0.9992.
    pub damping: F,
    /// Multiplier on the detached body's velocity per sub-step. Default: 0.998.
    pub free_damping: F,
    /// Acceleration on free rope nodes. Default: zero.
    pub gravity: Vec2<F>,
    /// Fraction of velocity kept when the body bounces off a wall. Default: 0.4.
    pub restitution: F,
    /// Hard cap on segments per rope. Default: 2000.
    pub max_segments: usize,
    /// World rectangle. Default: the unit square.
    pub bounds: BoundsConstraint<F>,
    /// Whether free rope nodes are clamped into `bounds`. Default: true.
    pub clamp_chain: bool,
    /// Body position after construction or reset. Default: (0.2, 0.5).
    pub body_start: Vec2<F>,
    /// Body radius, for host-side collision. Default: 0.012.
    pub body_radius: F,
    /// Anchor after construction or reset. Default: (0.5, 0.5).
    pub anchor_start: Vec2<F>,
    /// Speed added toward the anchor by a dash. Default: 0.6.
    pub dash_speed: F,
    /// Milliseconds before another dash is allowed. Default: 120.
    pub dash_cooldown_ms: F,
}

impl<F: Float> RopeConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        RopeConfig {
            rest_length: F::from_f32(0.008),
            iterations: 64,
            sub_steps: 4,
            damping: F::from_f32(0.9992),
            free_damping: F::from_f32(0.998),
            gravity: Vec2::zero(),
            restitution: F::from_f32(0.4),
            max_segments: 2000,
            bounds: BoundsConstraint::unit(),
            clamp_chain: true,
            body_start: Vec2::new(F::from_f32(0.2), F::half()),
            body_radius: F::from_f32(0.012),
            anchor_start: Vec2::new(F::half(), F::half()),
            dash_speed: F::from_f32(0.6),
            dash_cooldown_ms: F::from_f32(120.0),
        }
    }

    pub fn with_rest_length(mut self, rest_length: F) -> Self {
        self.rest_length = rest_length;
        self
    }

    /// Set relaxation sweeps; 0 becomes 1.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    /// Set sub-steps; 0 becomes 1.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_free_damping(mut self, free_damping: F) -> Self {
        self.free_damping = free_damping;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_restitution(mut self, restitution: F) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }

    pub fn with_bounds(mut self, bounds: BoundsConstraint<F>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Turn the rope's boundary clamp on or off. The body always bounces.
    pub fn with_chain_bounds(mut self, clamp_chain: bool) -> Self {
        self.clamp_chain = clamp_chain;
        self
    }

    pub fn with_body_start(mut self, body_start: Vec2<F>) -> Self {
        self.body_start = body_start;
        self
    }

    pub fn with_anchor_start(mut self, anchor_start: Vec2<F>) -> Self {
        self.anchor_start = anchor_start;
        self
    }

    pub fn with_dash(mut self, speed: F, cooldown_ms: F) -> Self {
        self.dash_speed = speed;
        self.dash_cooldown_ms = cooldown_ms;
        self
    }

    pub fn validate(&self) -> Result<(), RopeError> {
        if !self.rest_length.is_finite() || self.rest_length <= F::zero() {
            return Err(RopeError::InvalidRestLength);
        }
        for d in [self.damping, self.free_damping] {
            if !(d > F::zero() && d <= F::one()) {
                return Err(RopeError::InvalidDamping);
            }
        }
        if !(self.restitution >= F::zero() && self.restitution <= F::one()) {
            return Err(RopeError::InvalidRestitution);
        }
        if self.sub_steps == 0 {
            return Err(RopeError::InvalidSubSteps);
        }
        if self.max_segments < 2 {
            return Err(RopeError::InvalidSegmentCap { max_segments: self.max_segments });
        }
        let b = &self.bounds;
        if !(b.min.x <= b.max.x && b.min.y <= b.max.y) {
            return Err(RopeError::InvalidBounds);
        }
        Ok(())
    }
}

impl<F: Float> Default for RopeConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
