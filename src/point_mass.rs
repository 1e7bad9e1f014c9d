//! Point masses: the Verlet particles a cloth is made of.

use crate::float::Float;
use crate::vec::Vec3;

/// A particle of the cloth with implicit velocity `position - last_position`.
#[derive(Clone, Debug)]
pub struct PointMass<F: Float> {
    pub position: Vec3<F>,
    pub last_position: Vec3<F>,
    /// Build-time position restored by [`PointMass::reset`].
    pub start_position: Vec3<F>,
    /// Force accumulated during the current step.
    pub forces: Vec3<F>,
    pub pinned: bool,
    /// Handle into the renderer's mesh. Never read by the simulation.
    pub mesh_link: Option<usize>,
}

impl<F: Float> PointMass<F> {
    pub fn new(position: Vec3<F>, pinned: bool) -> Self {
        PointMass {
            position,
            last_position: position,
            start_position: position,
            forces: Vec3::zero(),
            pinned,
            mesh_link: None,
        }
    }

    /// Damped Verlet update.
    ///
    /// `retain` is the fraction of the previous displacement kept, i.e.
    /// `1 - damping / 100`. Pinned point masses are left untouched.
    pub fn integrate(&mut self, mass: F, delta_t: F, retain: F) {
        if self.pinned {
            return;
        }
        let velocity = (self.position - self.last_position).scale(retain);
        let acceleration = self.forces.scale(F::one() / mass);
        let new_position = self.position + velocity + acceleration.scale(delta_t * delta_t);
        self.last_position = self.position;
        self.position = new_position;
    }

    /// Per-step displacement, the Verlet stand-in for velocity.
    pub fn velocity_raw(&self) -> Vec3<F> {
        self.position - self.last_position
    }

    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.last_position = self.start_position;
        self.forces = Vec3::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_point_mass_ignores_forces() {
        let mut pm = PointMass::new(Vec3::new(1.0f64, 2.0, 3.0), true);
        pm.forces = Vec3::new(100.0, -100.0, 5.0);
        pm.integrate(1.0, 0.1, 1.0);
        assert_eq!(pm.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(pm.last_position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn integrate_keeps_momentum() {
        let mut pm = PointMass::new(Vec3::new(1.0f64, 0.0, 0.0), false);
        pm.last_position = Vec3::zero();
        pm.integrate(1.0, 0.1, 1.0);
        assert!((pm.position.x - 2.0).abs() < 1e-12);
        assert!((pm.last_position.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn full_damping_discards_velocity() {
        let mut pm = PointMass::new(Vec3::new(1.0f64, 0.0, 0.0), false);
        pm.last_position = Vec3::zero();
        pm.integrate(1.0, 0.1, 0.0);
        assert_eq!(pm.position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn reset_restores_start() {
        let mut pm = PointMass::new(Vec3::new(0.0f32, 1.0, 0.0), false);
        pm.position = Vec3::new(5.0, 5.0, 5.0);
        pm.last_position = Vec3::new(4.0, 4.0, 4.0);
        pm.reset();
        assert_eq!(pm.position, pm.start_position);
        assert_eq!(pm.last_position, pm.start_position);
        assert_eq!(pm.velocity_raw(), Vec3::zero());
    }
}
