//! Material parameters and step settings for the cloth simulation.

use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Material parameters read by every simulation step.
///
/// # Builder Pattern
/// ```
/// use drapery::config::ClothParameters;
///
/// let params: ClothParameters<f64> = ClothParameters::new()
///     .with_ks(2500.0)
///     .with_damping(0.5)
///     .with_bending(false);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClothParameters<F: Float> {
    /// Spring constant for structural and shearing springs. Default: 5000.
    pub ks: F,
    /// Areal density; total cloth mass is `width * height * density`. Default: 15.
    pub density: F,
    /// Percentage of velocity removed per step, in [0, 100]. Default: 0.2.
    pub damping: F,
    pub enable_structural: bool,
    pub enable_shearing: bool,
    pub enable_bending: bool,
}

impl<F: Float> ClothParameters<F> {
    pub fn new() -> Self {
        ClothParameters {
            ks: F::from_f32(5000.0),
            density: F::from_f32(15.0),
            damping: F::from_f64(0.2),
            enable_structural: true,
            enable_shearing: true,
            enable_bending: true,
        }
    }

    pub fn with_ks(mut self, ks: F) -> Self {
        self.ks = ks;
        self
    }

    pub fn with_density(mut self, density: F) -> Self {
        self.density = density;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_structural(mut self, enabled: bool) -> Self {
        self.enable_structural = enabled;
        self
    }

    pub fn with_shearing(mut self, enabled: bool) -> Self {
        self.enable_shearing = enabled;
        self
    }

    pub fn with_bending(mut self, enabled: bool) -> Self {
        self.enable_bending = enabled;
        self
    }

    /// Fraction of last step's displacement carried into the next one.
    pub fn retained_velocity(&self) -> F {
        F::one() - self.damping / F::from_f32(100.0)
    }
}

impl<F: Float> Default for ClothParameters<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing and external accelerations for the step loop.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: Float> {
    /// Rendered frames per second. Default: 90.
    pub frames_per_sec: F,
    /// Simulation steps per rendered frame. Default: 30.
    pub steps_per_frame: usize,
    /// Accelerations applied to every point mass (gravity, wind, ...).
    /// Default: gravity `(0, -9.8, 0)`.
    pub external_accelerations: AllocVec<Vec3<F>>,
}

impl<F: Float> SimulationConfig<F> {
    pub fn new() -> Self {
        let mut external_accelerations = AllocVec::new();
        external_accelerations.push(Vec3::new(F::zero(), F::from_f64(-9.8), F::zero()));
        SimulationConfig {
            frames_per_sec: F::from_f32(90.0),
            steps_per_frame: 30,
            external_accelerations,
        }
    }

    pub fn with_frames_per_sec(mut self, frames_per_sec: F) -> Self {
        self.frames_per_sec = frames_per_sec;
        self
    }

    /// Set the number of steps per frame. Clamped to at least 1.
    pub fn with_steps_per_frame(mut self, steps: usize) -> Self {
        self.steps_per_frame = steps.max(1);
        self
    }

    /// Append an external acceleration.
    pub fn with_acceleration(mut self, acceleration: Vec3<F>) -> Self {
        self.external_accelerations.push(acceleration);
        self
    }

    /// Drop every external acceleration, including the default gravity.
    pub fn without_accelerations(mut self) -> Self {
        self.external_accelerations.clear();
        self
    }

    /// Length of one simulation step: `1 / (frames_per_sec * steps_per_frame)`.
    pub fn delta_t(&self) -> F {
        F::one() / (self.frames_per_sec * F::from_usize(self.steps_per_frame))
    }

    /// Sum of all external accelerations.
    pub fn total_acceleration(&self) -> Vec3<F> {
        self.external_accelerations
            .iter()
            .fold(Vec3::zero(), |sum, &a| sum + a)
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
