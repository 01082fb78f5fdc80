//! Step observer trait for monitoring simulation progress.

/// Hooks called by the stepping loop.
///
/// All methods default to no-ops. Drivers implement this to log, profile
/// or visualize solver progress without the core depending on a logger.
pub trait StepObserver {
    /// Called after the integration phase with the number of free points moved.
    fn on_integrate(&mut self, _moved: usize) {}

    /// Called after each relaxation pass.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Running totals across every step it has observed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepStats {
    pub steps: usize,
    pub relaxation_passes: usize,
    pub points_moved: usize,
}

impl StepObserver for StepStats {
    fn on_integrate(&mut self, moved: usize) {
        self.points_moved += moved;
    }

    fn on_relaxation_pass(&mut self, _pass: usize) {
        self.relaxation_passes += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
