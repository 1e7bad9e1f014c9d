//! Step observer trait for monitoring cloth simulation progress.

/// Hooks called at the phase boundaries of [`Cloth::simulate`](crate::Cloth::simulate).
///
/// Implement this to collect per-step statistics (debugging, profiling, HUDs).
/// All methods default to no-ops.
pub trait StepObserver {
    /// Called once every force accumulator holds external and spring forces.
    fn on_forces_accumulated(&mut self) {}

    /// Called after the Verlet update of all unpinned point masses.
    fn on_integrate(&mut self) {}

    /// Called after the stretch-limit pass with the number of springs it shortened.
    fn on_stretch_limited(&mut self, _corrected: usize) {}

    /// Called after the spatial hash is rebuilt with the number of occupied cells.
    fn on_spatial_hash_rebuilt(&mut self, _cells: usize) {}

    /// Called after collision resolution with the number of point masses moved
    /// by self-collision.
    fn on_self_collisions(&mut self, _resolved: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
