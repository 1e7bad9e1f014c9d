use crate::collision::Collider;
use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::Vec3;

/// A solid sphere.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere<F: Float> {
    pub origin: Vec3<F>,
    pub radius: F,
    /// 0 slides freely, 1 leaves the point mass at its last position.
    pub friction: F,
}

impl<F: Float> Sphere<F> {
    pub fn new(origin: Vec3<F>, radius: F, friction: F) -> Self {
        Sphere { origin, radius, friction }
    }

    pub fn contains(&self, point: Vec3<F>) -> bool {
        point.distance(self.origin) < self.radius
    }

    /// Where the ray from the center through `last_position` leaves the surface.
    fn surface_point(&self, pm: &PointMass<F>) -> Vec3<F> {
        let mut direction = (pm.last_position - self.origin).unit();
        if direction == Vec3::zero() {
            direction = (pm.position - self.origin).unit();
        }
        self.origin + direction.scale(self.radius)
    }
}

impl<F: Float> Collider<F> for Sphere<F> {
    fn collide(&self, pm: &mut PointMass<F>) {
        if pm.pinned || !self.contains(pm.position) {
            return;
        }
        let correction = self.surface_point(pm) - pm.last_position;
        pm.position = pm.last_position + correction.scale(F::one() - self.friction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn falling(last_y: f64, y: f64) -> PointMass<f64> {
        let mut pm = PointMass::new(Vec3::new(0.0, y, 0.0), false);
        pm.last_position = Vec3::new(0.0, last_y, 0.0);
        pm
    }

    #[test]
    fn frictionless_projects_to_surface() {
        let sphere = Sphere::new(Vec3::zero(), 1.0, 0.0);
        let mut pm = falling(2.0, 0.5);
        sphere.collide(&mut pm);
        assert!((pm.position.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn full_friction_holds_last_position() {
        let sphere = Sphere::new(Vec3::zero(), 1.0, 1.0);
        let mut pm = falling(2.0, 0.5);
        sphere.collide(&mut pm);
        assert_eq!(pm.position, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn partial_friction_blends() {
        let sphere = Sphere::new(Vec3::zero(), 1.0, 0.5);
        let mut pm = falling(2.0, 0.5);
        sphere.collide(&mut pm);
        assert!((pm.position.y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn outside_point_untouched() {
        let sphere = Sphere::new(Vec3::zero(), 1.0, 0.0);
        let mut pm = falling(2.0, 1.5);
        sphere.collide(&mut pm);
        assert_eq!(pm.position.y, 1.5);
    }

    #[test]
    fn last_position_at_center_uses_current_direction() {
        let sphere = Sphere::new(Vec3::zero(), 2.0, 0.0);
        let mut pm = falling(0.0, 0.5);
        sphere.collide(&mut pm);
        assert!((pm.position.y - 2.0).abs() < 1e-12);
    }
}
