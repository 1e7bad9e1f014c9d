//! 3D vector used for positions, forces, and accelerations.

use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// 3D vector in simulation space. Y is up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// Zero vector.
    pub fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }

    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }

    pub fn length_sq(self) -> F { self.dot(self) }

    pub fn length(self) -> F { self.length_sq().sqrt() }

    pub fn distance(self, other: Self) -> F { (self - other).length() }

    /// Unit vector in the same direction.
    ///
    /// Returns the zero vector when the length is near zero, so coincident
    /// point masses produce no force or correction instead of NaN.
    pub fn unit(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    /// True if every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> AddAssign for Vec3<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> SubAssign for Vec3<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_pythagorean_triple() {
        let v = Vec3::new(2.0f64, 3.0, 6.0);
        assert!((v.length() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn unit_of_zero_vector_is_zero() {
        assert_eq!(Vec3::<f32>::zero().unit(), Vec3::zero());
    }

    #[test]
    fn unit_has_length_one() {
        let u = Vec3::new(0.0f32, -4.0, 3.0).unit();
        assert!((u.length() - 1.0).abs() < 1e-6);
        assert!((u.y + 0.8).abs() < 1e-6);
    }

    #[test]
    fn add_assign_accumulates() {
        let mut v = Vec3::new(1.0f64, 1.0, 1.0);
        v += Vec3::new(0.5, -1.0, 2.0);
        v -= Vec3::new(0.5, 0.0, 0.0);
        assert_eq!(v, Vec3::new(1.0, 0.0, 3.0));
    }

    #[test]
    fn nan_component_is_not_finite() {
        assert!(!Vec3::new(0.0f64, f64::NAN, 0.0).is_finite());
        assert!(Vec3::new(0.0f64, 1.0, 0.0).is_finite());
    }
}
