//! Step observer trait for monitoring rope simulation progress.

/// Trait for observing rope simulation steps.
///
/// Implement this to watch solver progress (debug overlays, profiling).
/// All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after the free nodes have been integrated in a sub-step.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation sweep.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called once the body has been updated for a sub-step.
    fn on_substep_complete(&mut self, _substep: usize) {}

    /// Called when a frame step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Used by [`crate::RopeController::step`].
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards every hook to `log::trace!`.
#[cfg(feature = "log")]
pub struct LogStepObserver;

#[cfg(feature = "log")]
impl StepObserver for LogStepObserver {
    fn on_integrate(&mut self) {
        log::trace!("rope integrated");
    }

    fn on_relax_iteration(&mut self, iteration: usize) {
        log::trace!("relax iteration {}", iteration);
    }

    fn on_substep_complete(&mut self, substep: usize) {
        log::trace!("substep {} complete", substep);
    }

    fn on_step_complete(&mut self) {
        log::trace!("step complete");
    }
}
