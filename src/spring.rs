//! Springs between point masses and the per-spring force and stretch-limit passes.

use crate::config::ClothParameters;
use crate::float::Float;
use crate::point_mass::PointMass;

/// Maximum elongation allowed after a step, as a multiple of rest length.
pub const MAX_STRETCH: f64 = 1.10;

/// Bending springs use this fraction of `ks`.
pub const BENDING_STIFFNESS_SCALE: f64 = 0.2;

/// Which neighbor relation a spring encodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpringType {
    /// Adjacent grid neighbors.
    Structural,
    /// Diagonal neighbors.
    Shearing,
    /// Neighbors two cells apart.
    Bending,
}

/// A spring connecting point masses `a` and `b` by index.
#[derive(Clone, Debug)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    /// Distance at construction time. Never recomputed.
    pub rest_length: F,
    pub spring_type: SpringType,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, spring_type: SpringType) -> Self {
        Spring { a, b, rest_length, spring_type }
    }

    /// Build a spring whose rest length is the current distance between `a` and `b`.
    pub fn from_point_masses(a: usize, b: usize, point_masses: &[PointMass<F>], spring_type: SpringType) -> Self {
        let rest_length = point_masses[a].position.distance(point_masses[b].position);
        Spring { a, b, rest_length, spring_type }
    }

    /// Hooke stiffness for this spring, or `None` if its category is disabled.
    pub fn stiffness(&self, params: &ClothParameters<F>) -> Option<F> {
        match self.spring_type {
            SpringType::Structural if params.enable_structural => Some(params.ks),
            SpringType::Shearing if params.enable_shearing => Some(params.ks),
            SpringType::Bending if params.enable_bending => {
                Some(params.ks * F::from_f64(BENDING_STIFFNESS_SCALE))
            }
            _ => None,
        }
    }

    /// Add this spring's Hooke force to both endpoints' accumulators.
    ///
    /// A stretched spring pulls the endpoints together, a compressed one pushes
    /// them apart. Equal and opposite on `a` and `b`.
    pub fn apply_force(&self, point_masses: &mut [PointMass<F>], params: &ClothParameters<F>) {
        let Some(ks) = self.stiffness(params) else {
            return;
        };
        let delta = point_masses[self.a].position - point_masses[self.b].position;
        let magnitude = ks * (delta.length() - self.rest_length);
        let force = delta.unit().scale(magnitude);
        point_masses[self.b].forces += force;
        point_masses[self.a].forces -= force;
    }

    /// Provot stretch limit: pull the endpoints together until the spring is no
    /// longer than `MAX_STRETCH * rest_length`.
    ///
    /// Returns `true` if a correction was applied.
    pub fn limit_stretch(&self, point_masses: &mut [PointMass<F>]) -> bool {
        let a_pinned = point_masses[self.a].pinned;
        let b_pinned = point_masses[self.b].pinned;
        if a_pinned && b_pinned {
            return false;
        }

        let a_pos = point_masses[self.a].position;
        let b_pos = point_masses[self.b].position;
        let max_length = self.rest_length * F::from_f64(MAX_STRETCH);
        let dist = a_pos.distance(b_pos);
        if dist <= max_length {
            return false;
        }

        let clamp = dist - max_length;
        let a_to_b = (b_pos - a_pos).unit();
        if a_pinned {
            point_masses[self.b].position -= a_to_b.scale(clamp);
        } else if b_pinned {
            point_masses[self.a].position += a_to_b.scale(clamp);
        } else {
            let half = a_to_b.scale(clamp * F::half());
            point_masses[self.a].position += half;
            point_masses[self.b].position -= half;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec3;

    fn pair(b_x: f64, a_pinned: bool, b_pinned: bool) -> [PointMass<f64>; 2] {
        [
            PointMass::new(Vec3::new(0.0, 0.0, 0.0), a_pinned),
            PointMass::new(Vec3::new(b_x, 0.0, 0.0), b_pinned),
        ]
    }

    #[test]
    fn rest_length_from_construction_distance() {
        let pms = pair(3.0, false, false);
        let s = Spring::from_point_masses(0, 1, &pms, SpringType::Structural);
        assert!((s.rest_length - 3.0).abs() < 1e-12);
    }

    #[test]
    fn stretched_spring_pulls_endpoints_together() {
        let mut pms = pair(2.0, false, false);
        let s = Spring::new(0, 1, 1.0, SpringType::Structural);
        s.apply_force(&mut pms, &ClothParameters::new().with_ks(10.0));
        assert!((pms[0].forces.x - 10.0).abs() < 1e-12);
        assert!((pms[1].forces.x + 10.0).abs() < 1e-12);
    }

    #[test]
    fn bending_is_softer() {
        let mut pms = pair(2.0, false, false);
        let s = Spring::new(0, 1, 1.0, SpringType::Bending);
        s.apply_force(&mut pms, &ClothParameters::new().with_ks(10.0));
        assert!((pms[0].forces.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn disabled_category_applies_no_force() {
        let mut pms = pair(2.0, false, false);
        let s = Spring::new(0, 1, 1.0, SpringType::Shearing);
        s.apply_force(&mut pms, &ClothParameters::new().with_shearing(false));
        assert_eq!(pms[0].forces, Vec3::zero());
        assert_eq!(pms[1].forces, Vec3::zero());
    }

    #[test]
    fn stretch_limit_splits_between_free_endpoints() {
        let mut pms = pair(2.0, false, false);
        let s = Spring::new(0, 1, 1.0, SpringType::Structural);
        assert!(s.limit_stretch(&mut pms));
        assert!((pms[0].position.x - 0.45).abs() < 1e-12);
        assert!((pms[1].position.x - 1.55).abs() < 1e-12);
    }

    #[test]
    fn stretch_limit_moves_only_free_endpoint() {
        let mut pms = pair(2.0, true, false);
        let s = Spring::new(0, 1, 1.0, SpringType::Structural);
        assert!(s.limit_stretch(&mut pms));
        assert_eq!(pms[0].position, Vec3::zero());
        assert!((pms[1].position.x - 1.1).abs() < 1e-12);

        let mut pms = pair(2.0, false, true);
        assert!(s.limit_stretch(&mut pms));
        assert!((pms[0].position.x - 0.9).abs() < 1e-12);
        assert_eq!(pms[1].position.x, 2.0);
    }

    #[test]
    fn stretch_limit_skips_two_pinned_endpoints() {
        let mut pms = pair(5.0, true, true);
        let s = Spring::new(0, 1, 1.0, SpringType::Structural);
        assert!(!s.limit_stretch(&mut pms));
        assert_eq!(pms[1].position.x, 5.0);
    }

    #[test]
    fn stretch_limit_ignores_slack_spring() {
        let mut pms = pair(1.05, false, false);
        let s = Spring::new(0, 1, 1.0, SpringType::Structural);
        assert!(!s.limit_stretch(&mut pms));
        assert_eq!(pms[1].position.x, 1.05);
    }
}
