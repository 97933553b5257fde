//! Error types for rope configuration and chain construction.

use core::fmt;

/// Errors raised when configuring a rope or building a chain by hand.
///
/// The per-frame API never returns these; it clamps or ignores bad input.
#[derive(Debug, Clone, PartialEq)]
pub enum RopeError {
    /// Rest segment length must be positive and finite.
    InvalidRestLength,
    /// Damping factors must be in (0, 1].
    InvalidDamping,
    /// Restitution must be in [0, 1].
    InvalidRestitution,
    /// At least one sub-step per frame is required.
    InvalidSubSteps,
    /// The segment cap must allow at least two segments.
    InvalidSegmentCap { max_segments: usize },
    /// World bounds must have `min <= max` on both axes.
    InvalidBounds,
    /// A chain needs at least two nodes.
    TooFewNodes { count: usize },
    /// Node index is out of bounds.
    NodeOutOfBounds { index: usize, count: usize },
    /// The first and last nodes are always pinned.
    EndpointPin { index: usize },
}

impl fmt::Display for RopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RopeError::InvalidRestLength => write!(f, "rest length must be positive and finite"),
            RopeError::InvalidDamping => write!(f, "damping must be in (0, 1]"),
            RopeError::InvalidRestitution => write!(f, "restitution must be in [0, 1]"),
            RopeError::InvalidSubSteps => write!(f, "sub-step count must be at least 1"),
            RopeError::InvalidSegmentCap { max_segments } => {
                write!(f, "segment cap {} is below the minimum of 2", max_segments)
            }
            RopeError::InvalidBounds => write!(f, "bounds min must not exceed max"),
            RopeError::TooFewNodes { count } => {
                write!(f, "chain needs at least 2 nodes (got {})", count)
            }
            RopeError::NodeOutOfBounds { index, count } => {
                write!(f, "node index {} out of bounds (count: {})", index, count)
            }
            RopeError::EndpointPin { index } => {
                write!(f, "node {} is a chain endpoint and is always pinned", index)
            }
        }
    }
}
