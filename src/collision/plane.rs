use crate::collision::Collider;
use crate::float::Float;
use crate::point_mass::PointMass;
use crate::vec::Vec3;

/// Distance a corrected point mass is kept from the plane surface.
pub const SURFACE_OFFSET: f64 = 1e-4;

/// An infinite plane through `point` with unit `normal`.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane<F: Float> {
    pub point: Vec3<F>,
    pub normal: Vec3<F>,
    /// 0 slides freely, 1 leaves the point mass at its last position.
    pub friction: F,
}

impl<F: Float> Plane<F> {
    /// `normal` is normalized here.
    pub fn new(point: Vec3<F>, normal: Vec3<F>, friction: F) -> Self {
        Plane { point, normal: normal.unit(), friction }
    }

    /// Signed distance of `p` along the normal.
    pub fn signed_distance(&self, p: Vec3<F>) -> F {
        (p - self.point).dot(self.normal)
    }
}

impl<F: Float> Collider<F> for Plane<F> {
    fn collide(&self, pm: &mut PointMass<F>) {
        if pm.pinned {
            return;
        }
        let last_side = self.signed_distance(pm.last_position);
        let current_side = self.signed_distance(pm.position);
        let zero = F::zero();
        let crossed = (last_side > zero && current_side <= zero)
            || (last_side < zero && current_side >= zero);
        if !crossed {
            return;
        }

        let offset = if last_side < F::zero() {
            -F::from_f64(SURFACE_OFFSET)
        } else {
            F::from_f64(SURFACE_OFFSET)
        };
        let on_plane = pm.position - self.normal.scale(current_side);
        let target = on_plane + self.normal.scale(offset);
        let correction = target - pm.last_position;
        pm.position = pm.last_position + correction.scale(F::one() - self.friction);
    }
}
