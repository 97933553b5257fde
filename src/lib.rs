//! Grappling-hook rope simulation with Verlet integration and constraint relaxation.
//!
//! `tether` models a rope as a chain of unit-mass nodes between a body and an
//! anchor point in a normalized `[0, 1] x [0, 1]` world. Each frame is split
//! into sub-steps; in each one the free nodes take a damped Störmer-Verlet
//! step and a Gauss-Seidel sweep enforces segment length, the anchor pin and
//! the world boundary. The body rides node 0 while attached and flies freely
//! otherwise.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity from previous positions
//! - **Tunable stiffness**: relaxation iterations adjustable at runtime
//! - **Extra pins**: interior nodes can be pinned alongside the endpoints
//! - **Flat output**: interleaved `x, y` buffers for renderers
//! - **Observable**: monitor steps via the `StepObserver` trait, or enable the
//!   `log` feature for lifecycle logging
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use tether::RopeController;
//!
//! let mut rope: RopeController = RopeController::default();
//! rope.set_anchor(0.8, 0.3);
//! rope.attach();
//! rope.step(16.0);
//! assert_eq!(rope.positions_flat().len(), rope.node_count() * 2);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod constraint;
pub mod chain;
pub mod builder;
pub mod integrator;
pub mod solver;
pub mod body;
pub mod controller;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use constraint::{DistanceConstraint, BoundsConstraint};
pub use chain::{Chain, SegmentHit};
pub use builder::RopeBuilder;
pub use integrator::VerletIntegrator;
pub use solver::ConstraintSolver;
pub use body::Body;
pub use controller::{RopeController, AttachmentState};
pub use observer::{StepObserver, NoOpStepObserver};
#[cfg(feature = "log")]
pub use observer::LogStepObserver;
pub use config::RopeConfig;
pub use error::RopeError;
